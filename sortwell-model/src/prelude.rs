//! Snapshot of the model surface for downstream crates.

pub use super::field::{CaseHandling, Direction, NullHandling, SortField};
pub use super::options::TextOptions;
pub use super::orders::SortOrders;
pub use super::text::{parse, parse_all, serialize};
