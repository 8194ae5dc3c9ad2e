//! Single field comparator
//!
//! Resolves the field of both objects, places nulls, folds case and hands the
//! remaining pair to an inner value ordering.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use sortwell_contracts::{Inspect, Value};
use sortwell_model::SortField;

use super::traits::{Comparator, NaturalOrder, ValueComparator};
use crate::error::{ConfigError, Result};
use crate::extract::{Extract, ValueExtractor};

#[derive(Clone)]
enum Rule {
    Natural,
    Custom(Arc<ValueComparator>),
}

/// Compares objects by the value at one [`SortField`]'s path.
#[derive(Clone)]
pub struct FieldComparator {
    field: SortField,
    extractor: Arc<dyn Extract>,
    rule: Rule,
}

impl fmt::Debug for FieldComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = match self.rule {
            Rule::Natural => "natural",
            Rule::Custom(_) => "custom",
        };

        f.debug_struct("FieldComparator")
            .field("field", &self.field)
            .field("rule", &rule)
            .finish()
    }
}

impl FieldComparator {
    /// Natural ordering of the field, resolved by a strict [`ValueExtractor`].
    pub fn new(field: SortField) -> Self {
        Self {
            field,
            extractor: Arc::new(ValueExtractor::strict()),
            rule: Rule::Natural,
        }
    }

    /// Orders extracted values with `inner` instead of the natural order.
    ///
    /// Null placement, case folding and direction stay with this comparator;
    /// `inner` only sees non-null values. A missing `inner` is rejected here
    /// so that a chain never fails for configuration reasons mid-sort.
    pub fn delegating(
        field: SortField,
        extractor: Arc<dyn Extract>,
        inner: Option<Arc<ValueComparator>>,
    ) -> Result<Self> {
        let Some(inner) = inner else {
            return Err(ConfigError::MissingComparator {
                path: field.path().map(str::to_owned),
            }
            .into());
        };

        Ok(Self {
            field,
            extractor,
            rule: Rule::Custom(inner),
        })
    }

    pub fn with_extractor(mut self, extractor: impl Extract + 'static) -> Self {
        self.extractor = Arc::new(extractor);
        self
    }

    pub(crate) fn with_shared_extractor(mut self, extractor: Arc<dyn Extract>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn field(&self) -> &SortField {
        &self.field
    }

    /// Compare two already extracted values.
    pub fn compare_values(&self, a: &Value, b: &Value) -> Result<Ordering> {
        let nulls_first = self.field.is_nulls_first();
        match (a.is_null(), b.is_null()) {
            (true, true) => return Ok(Ordering::Equal),
            (true, false) => {
                return Ok(if nulls_first {
                    Ordering::Less
                } else {
                    Ordering::Greater
                });
            }
            (false, true) => {
                return Ok(if nulls_first {
                    Ordering::Greater
                } else {
                    Ordering::Less
                });
            }
            (false, false) => {}
        }

        let ordering = match (a, b) {
            (Value::Text(x), Value::Text(y)) if self.field.is_case_insensitive() => self
                .apply_rule(
                    &Value::Text(x.to_lowercase()),
                    &Value::Text(y.to_lowercase()),
                )?,
            _ => self.apply_rule(a, b)?,
        };

        Ok(if self.field.is_ascending() {
            ordering
        } else {
            ordering.reverse()
        })
    }

    fn apply_rule(&self, a: &Value, b: &Value) -> Result<Ordering> {
        match &self.rule {
            Rule::Natural => NaturalOrder.compare(a, b),
            Rule::Custom(inner) => inner.compare(a, b),
        }
    }
}

impl<T: Inspect> Comparator<T> for FieldComparator {
    fn compare(&self, a: &T, b: &T) -> Result<Ordering> {
        let path = self.field.path();
        let left = self.extractor.extract(a, path)?;
        let right = self.extractor.extract(b, path)?;
        self.compare_values(&left, &right)
    }
}
