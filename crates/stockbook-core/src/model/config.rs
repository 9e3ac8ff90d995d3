use serde::{Deserialize, Serialize};

/// Canonical column order for the Configuration sheet
pub const CONFIGURATION_COLUMNS: [&str; 2] = ["version", "generated_at"];

/// WorkbookConfig - the single metadata row of the Configuration sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkbookConfig {
    /// Workbook format version
    pub version: String,

    /// Timestamp the workbook was generated (RFC 3339)
    pub generated_at: String,
}

impl WorkbookConfig {
    /// Current workbook format version
    pub const CURRENT_VERSION: &'static str = "1.0";

    /// Build a config row stamped with the given generation time
    pub fn generated(generated_at: impl Into<String>) -> Self {
        Self {
            version: Self::CURRENT_VERSION.to_string(),
            generated_at: generated_at.into(),
        }
    }
}
