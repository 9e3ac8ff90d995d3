pub mod validation;

pub use validation::normalize_new_item;
