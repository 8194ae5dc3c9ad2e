//! Everything needed to build and run comparator chains.

pub use crate::error::{ComparatorError, Result as ComparatorResult};
pub use crate::extract::{Extract, ValueExtractor};
pub use crate::mapper::{OrderDefaults, SortMapper};
pub use crate::sorting::{
    BoxedComparator, Comparator, ComparatorChain, ComparatorChainBuilder, FieldComparator,
};
pub use sortwell_contracts::prelude::*;
pub use sortwell_model::prelude::*;
