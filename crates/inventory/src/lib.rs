//! Inventory store.
//!
//! Owns the ordered product collection, loads it from a flat comma-delimited
//! text file and rewrites that file after every successful mutation.

pub mod record;
pub mod report;
pub mod store;

pub use record::{RecordError, format_line, parse_line};
pub use report::{LoadOutcome, LoadReport, SkipReason, SkippedLine};
pub use store::{AddProduct, Inventory, PersistError, SaveStatus, UpdateProduct};
