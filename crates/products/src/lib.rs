//! Products domain module.
//!
//! A product is a passive record: identity plus attributes. Validation of
//! quantities and prices lives in the value objects; cross-record rules (id
//! uniqueness) belong to the inventory store.

pub mod product;
pub mod value;

pub use amazonia_core::ProductId;
pub use product::{Product, UNCATEGORIZED};
pub use value::{Price, Quantity};
