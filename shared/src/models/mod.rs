//! Entity models

pub mod dining_table;

pub use dining_table::DiningTable;
