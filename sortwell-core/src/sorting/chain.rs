//! Comparator chains
//!
//! A chain evaluates its comparators in insertion order and returns the
//! first result that is not `Equal`. Later comparators only break ties of
//! all earlier ones.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use sortwell_contracts::Inspect;
use sortwell_model::{CaseHandling, Direction, NullHandling, SortField, TextOptions};
use tracing::debug;

use super::field::FieldComparator;
use super::traits::{BoxedComparator, Comparator, ValueComparator};
use crate::error::Result;
use crate::extract::{Extract, ValueExtractor};

/// Accumulates comparators for a [`ComparatorChain`].
pub struct ComparatorChainBuilder<T> {
    comparators: Vec<Arc<dyn Comparator<T>>>,
    extractor: Arc<dyn Extract>,
}

impl<T> fmt::Debug for ComparatorChainBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparatorChainBuilder")
            .field("comparator_count", &self.comparators.len())
            .finish()
    }
}

impl<T> Default for ComparatorChainBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ComparatorChainBuilder<T> {
    pub fn new() -> Self {
        Self {
            comparators: Vec::new(),
            extractor: Arc::new(ValueExtractor::strict()),
        }
    }

    /// Extractor used by field comparators added after this call.
    pub fn with_extractor(mut self, extractor: impl Extract + 'static) -> Self {
        self.extractor = Arc::new(extractor);
        self
    }

    /// Append a comparator or `Fn(&T, &T) -> Ordering` closure.
    pub fn add(mut self, comparator: impl Comparator<T> + 'static) -> Self {
        self.comparators.push(Arc::new(comparator));
        self
    }

    pub fn add_boxed(mut self, comparator: BoxedComparator<T>) -> Self {
        self.comparators.push(Arc::from(comparator));
        self
    }

    pub fn add_shared(mut self, comparator: Arc<dyn Comparator<T>>) -> Self {
        self.comparators.push(comparator);
        self
    }

    pub fn len(&self) -> usize {
        self.comparators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comparators.is_empty()
    }

    pub fn build(self) -> ComparatorChain<T> {
        debug!(comparators = self.comparators.len(), "built comparator chain");
        ComparatorChain {
            comparators: self.comparators,
        }
    }
}

impl<T: Inspect> ComparatorChainBuilder<T> {
    /// Append a field comparator using the builder's extractor.
    pub fn add_field(self, field: SortField) -> Self {
        let comparator = FieldComparator::new(field).with_shared_extractor(self.extractor.clone());
        self.add(comparator)
    }

    pub fn add_order(
        self,
        path: &str,
        direction: Direction,
        case_handling: CaseHandling,
        null_handling: NullHandling,
    ) -> Self {
        self.add_field(SortField::new(
            Some(path),
            direction,
            case_handling,
            null_handling,
        ))
    }

    /// Append one field comparator per entry, preserving order.
    pub fn add_all<'a, I>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = &'a SortField>,
    {
        fields
            .into_iter()
            .fold(self, |builder, field| builder.add_field(field.clone()))
    }

    /// Like [`add_all`](Self::add_all), but `factory` may supply the
    /// comparator for a field. Fields it returns `None` for use generic
    /// extraction.
    pub fn add_all_with<'a, I, F>(self, fields: I, mut factory: F) -> Self
    where
        I: IntoIterator<Item = &'a SortField>,
        F: FnMut(&SortField) -> Option<BoxedComparator<T>>,
    {
        fields
            .into_iter()
            .fold(self, |builder, field| match factory(field) {
                Some(custom) => builder.add_boxed(custom),
                None => builder.add_field(field.clone()),
            })
    }

    /// Parse sort-order text and append its fields.
    pub fn add_text(self, text: &str, options: &TextOptions) -> Self {
        self.add_all(&sortwell_model::text::parse(text, options))
    }

    /// Append a field comparator that orders values with `inner`.
    pub fn add_delegating(
        self,
        field: SortField,
        inner: Option<Arc<ValueComparator>>,
    ) -> Result<Self> {
        let comparator = FieldComparator::delegating(field, self.extractor.clone(), inner)?;
        Ok(self.add(comparator))
    }
}

/// Lexicographic composition of comparators.
pub struct ComparatorChain<T> {
    comparators: Vec<Arc<dyn Comparator<T>>>,
}

impl<T> Clone for ComparatorChain<T> {
    fn clone(&self) -> Self {
        Self {
            comparators: self.comparators.clone(),
        }
    }
}

impl<T> fmt::Debug for ComparatorChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparatorChain")
            .field("comparator_count", &self.comparators.len())
            .finish()
    }
}

impl<T> ComparatorChain<T> {
    pub fn builder() -> ComparatorChainBuilder<T> {
        ComparatorChainBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.comparators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comparators.is_empty()
    }

    /// Stable sort of `items`.
    ///
    /// Stops consulting the chain after the first error and returns it; the
    /// slice is then left in an unspecified order.
    pub fn sort(&self, items: &mut [T]) -> Result<()> {
        let mut failure = None;
        items.sort_by(|a, b| {
            if failure.is_some() {
                return Ordering::Equal;
            }
            self.compare(a, b).unwrap_or_else(|err| {
                failure = Some(err);
                Ordering::Equal
            })
        });

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn sorted(&self, mut items: Vec<T>) -> Result<Vec<T>> {
        self.sort(&mut items)?;
        Ok(items)
    }
}

impl<T> Comparator<T> for ComparatorChain<T> {
    fn compare(&self, a: &T, b: &T) -> Result<Ordering> {
        for comparator in &self.comparators {
            match comparator.compare(a, b)? {
                Ordering::Equal => continue,
                ordering => return Ok(ordering),
            }
        }
        Ok(Ordering::Equal)
    }
}
