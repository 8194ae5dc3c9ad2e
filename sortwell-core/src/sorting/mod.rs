//! Comparator composition
//!
//! This module provides:
//! - The fallible [`Comparator`] trait and its closure blanket impl
//! - [`FieldComparator`] for one sort field
//! - [`ComparatorChainBuilder`] and [`ComparatorChain`] for multi-key ordering

pub mod chain;
pub mod field;
pub mod traits;

#[cfg(test)]
mod tests;

pub use chain::*;
pub use field::*;
pub use traits::*;
