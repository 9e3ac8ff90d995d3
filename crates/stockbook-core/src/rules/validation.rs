use crate::errors::{Result, StockbookError};
use crate::model::{InventoryItem, NewItem};

/// Validate an incoming item payload against the current inventory and
/// normalize it into a stored record
///
/// Checks, first violation wins:
///
/// 1. `code` is present
/// 2. `code` is non-empty
/// 3. `code` does not collide with an existing row
/// 4. `quantity`, `unit_price` and `minimum` are non-negative
///
/// On success the returned record carries the payload's values with
/// unspecified fields already defaulted (empty strings, zeros) by the
/// payload type itself.
///
/// # Errors
/// Returns the corresponding validation error; the inventory is never
/// modified here.
pub fn normalize_new_item(inventory: &[InventoryItem], payload: NewItem) -> Result<InventoryItem> {
    let code = payload.code.ok_or(StockbookError::MissingCode)?;
    if code.is_empty() {
        return Err(StockbookError::EmptyCode);
    }

    if inventory.iter().any(|item| item.code == code) {
        return Err(StockbookError::DuplicateCode { code });
    }

    if payload.quantity < 0 {
        return Err(StockbookError::NegativeValue {
            field: "quantity",
            value: payload.quantity as f64,
        });
    }
    if payload.unit_price < 0.0 {
        return Err(StockbookError::NegativeValue {
            field: "unit_price",
            value: payload.unit_price,
        });
    }
    if payload.minimum < 0 {
        return Err(StockbookError::NegativeValue {
            field: "minimum",
            value: payload.minimum as f64,
        });
    }

    Ok(InventoryItem {
        code,
        name: payload.name,
        category: payload.category,
        quantity: payload.quantity,
        unit_price: payload.unit_price,
        location: payload.location,
        minimum: payload.minimum,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> Vec<InventoryItem> {
        vec![InventoryItem {
            code: "PRD-001".to_string(),
            name: "Laptop".to_string(),
            category: "Technology".to_string(),
            quantity: 12,
            unit_price: 950.0,
            location: "A1".to_string(),
            minimum: 5,
        }]
    }

    #[test]
    fn test_missing_code_rejected() {
        let err = normalize_new_item(&existing(), NewItem::default()).unwrap_err();
        assert_eq!(err, StockbookError::MissingCode);
    }

    #[test]
    fn test_empty_code_rejected() {
        let err = normalize_new_item(&existing(), NewItem::with_code("")).unwrap_err();
        assert_eq!(err, StockbookError::EmptyCode);
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let err = normalize_new_item(&existing(), NewItem::with_code("PRD-001")).unwrap_err();
        assert_eq!(
            err,
            StockbookError::DuplicateCode {
                code: "PRD-001".to_string()
            }
        );
    }

    #[test]
    fn test_negative_numerics_rejected() {
        let mut payload = NewItem::with_code("PRD-010");
        payload.quantity = -1;
        let err = normalize_new_item(&existing(), payload).unwrap_err();
        assert!(matches!(
            err,
            StockbookError::NegativeValue {
                field: "quantity",
                ..
            }
        ));

        let mut payload = NewItem::with_code("PRD-010");
        payload.unit_price = -0.5;
        assert!(normalize_new_item(&existing(), payload).is_err());

        let mut payload = NewItem::with_code("PRD-010");
        payload.minimum = -3;
        assert!(normalize_new_item(&existing(), payload).is_err());
    }

    #[test]
    fn test_defaults_fill_unspecified_fields() {
        let stored = normalize_new_item(&existing(), NewItem::with_code("PRD-010")).unwrap();
        assert_eq!(stored.code, "PRD-010");
        assert_eq!(stored.name, "");
        assert_eq!(stored.category, "");
        assert_eq!(stored.location, "");
        assert_eq!(stored.quantity, 0);
        assert_eq!(stored.unit_price, 0.0);
        assert_eq!(stored.minimum, 0);
    }
}
