pub mod config;
pub mod count;
pub mod item;
pub mod movement;

pub use config::{WorkbookConfig, CONFIGURATION_COLUMNS};
pub use count::{CountRecord, COUNTS_COLUMNS};
pub use item::{InventoryItem, NewItem, INVENTORY_COLUMNS};
pub use movement::{Movement, MovementKind, MOVEMENTS_COLUMNS};
