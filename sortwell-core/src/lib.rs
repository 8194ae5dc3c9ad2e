//! # Sortwell Core
//!
//! Turns sort-order text into comparators over runtime-typed objects.
//!
//! ## Overview
//!
//! - **Extraction**: [`ValueExtractor`] resolves dotted field paths against
//!   anything implementing [`Inspect`](sortwell_contracts::Inspect)
//! - **Comparison**: [`FieldComparator`] orders by one field with per-field
//!   direction, case folding and null placement
//! - **Composition**: [`ComparatorChainBuilder`] assembles fields, closures and
//!   custom comparators into a [`ComparatorChain`]
//! - **Paging**: [`SortMapper`] converts to and from a paging layer's order type
//!
//! ## Feature Flags
//!
//! - `serde`: JSON mapping of the model types in `sortwell-model`
//!
//! ## Examples
//!
//! ```
//! use sortwell_contracts::Value;
//! use sortwell_core::prelude::*;
//!
//! let people = vec![
//!     Value::record([("name", Value::from("bob")), ("age", 30.into())]),
//!     Value::record([("name", Value::from("Alice")), ("age", 25.into())]),
//!     Value::record([("name", Value::from("Bob")), ("age", 40.into())]),
//! ];
//!
//! let chain = ComparatorChainBuilder::<Value>::new()
//!     .add_text("name;age,desc", TextOptions::defaults())
//!     .build();
//!
//! let sorted = chain.sorted(people).unwrap();
//! assert_eq!(sorted[0].attribute("name"), Some(Value::from("Alice")));
//! assert_eq!(sorted[1].attribute("age"), Some(Value::Int(40)));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod error;
/// Field path resolution
pub mod extract;
/// Conversion to and from paging layer orders
pub mod mapper;
/// Natural ordering of values
pub mod natural;
pub mod prelude;
/// Comparators and comparator chains
pub mod sorting;

pub use error::{CompareError, ComparatorError, ConfigError, ExtractError, Result};
pub use extract::{Extract, ValueExtractor};
pub use mapper::{ExternalNullHandling, ExternalOrder, OrderDefaults, SortMapper};
pub use natural::natural_cmp;
pub use sorting::{
    BoxedComparator, Comparator, ComparatorChain, ComparatorChainBuilder, FieldComparator,
    NaturalOrder, ValueComparator,
};
