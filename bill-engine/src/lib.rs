//! Bill-management domain engine
//!
//! In-process engine for restaurant bill management: open tables, their
//! ordered items, and partial/complete payments recorded against them
//! through four bill-splitting strategies.
//!
//! All money decisions route through [`orders::money`]; all mutations are
//! pure old-order → new-order functions applied by the [`orders::manager`].

pub mod orders;

// Re-exports
pub use orders::error::OrderError;
pub use orders::manager::TableManager;
