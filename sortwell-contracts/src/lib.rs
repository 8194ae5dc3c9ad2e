//! Runtime value surface that sortwell comparators extract from.
//!
//! [`Inspect`] is the seam between caller-owned objects and field paths:
//! implement it for a type and any `a.b.c` path can be resolved against it.
//! [`Value`] is what a resolved path yields.

pub mod inspect;
pub mod json;
pub mod value;

pub use inspect::Inspect;
pub use json::to_value;
pub use value::Value;

/// Frequently used items for crates that implement [`Inspect`].
pub mod prelude {
    pub use super::inspect::Inspect;
    pub use super::json::to_value;
    pub use super::value::Value;
}
