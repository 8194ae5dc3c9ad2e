//! Core comparator trait
//!
//! Comparisons are fallible: strict field extraction and mismatched value
//! kinds surface as errors instead of an arbitrary ordering.

use std::cmp::Ordering;

use sortwell_contracts::Value;

use crate::error::Result;
use crate::natural::natural_cmp;

/// A total order over `T` that may fail.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a comparator, so domain specific
/// orderings can be plugged into a chain without a wrapper type.
pub trait Comparator<T: ?Sized>: Send + Sync {
    /// Compare `a` with `b`
    fn compare(&self, a: &T, b: &T) -> Result<Ordering>;
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering + Send + Sync,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Result<Ordering> {
        Ok(self(a, b))
    }
}

/// Owned comparator as returned by per-field factories
pub type BoxedComparator<T> = Box<dyn Comparator<T>>;

/// Ordering rule applied to already extracted, non-null values
pub type ValueComparator = dyn Comparator<Value>;

/// Natural ordering of values, see [`natural_cmp`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl Comparator<Value> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &Value, b: &Value) -> Result<Ordering> {
        natural_cmp(a, b)
    }
}
