//! Field path resolution.
//!
//! A path such as `person.address.city` is resolved one segment at a time.
//! Each segment is looked up with [`Inspect::property`] and, failing that,
//! [`Inspect::attribute`]. A null anywhere along the way ends resolution with
//! [`Value::Null`].

use sortwell_contracts::{Inspect, Value};
use tracing::trace;

use crate::error::{ExtractError, Result};

/// Resolves the value a sort field points at.
pub trait Extract: Send + Sync {
    fn extract(&self, object: &dyn Inspect, path: Option<&str>) -> Result<Value>;
}

impl<F> Extract for F
where
    F: Fn(&dyn Inspect, Option<&str>) -> Result<Value> + Send + Sync,
{
    fn extract(&self, object: &dyn Inspect, path: Option<&str>) -> Result<Value> {
        self(object, path)
    }
}

/// Default [`Extract`] implementation.
///
/// In strict mode (the default) a segment that matches neither a property
/// nor an attribute is an error. Lenient mode resolves it to null instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueExtractor {
    strict: bool,
}

impl Default for ValueExtractor {
    fn default() -> Self {
        Self::strict()
    }
}

impl ValueExtractor {
    pub const fn strict() -> Self {
        ValueExtractor { strict: true }
    }

    pub const fn lenient() -> Self {
        ValueExtractor { strict: false }
    }

    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    /// Resolve `path` against `object`.
    ///
    /// Blank and repeated dots are ignored, so `" .a..b. "` is the path
    /// `a.b`. An empty path yields the object's own natural value.
    pub fn resolve(&self, object: &dyn Inspect, path: Option<&str>) -> Result<Value> {
        if object.is_null() {
            return Ok(Value::Null);
        }

        let mut segments = path
            .into_iter()
            .flat_map(|p| p.split('.'))
            .map(str::trim)
            .filter(|segment| !segment.is_empty());

        let Some(first) = segments.next() else {
            return object.natural().ok_or_else(|| {
                ExtractError::NotOrderable {
                    object: format!("{object:?}"),
                }
                .into()
            });
        };

        let mut current = self.member(object, first)?;
        for segment in segments {
            if current.is_null() {
                return Ok(Value::Null);
            }
            current = self.member(&current, segment)?;
        }
        Ok(current)
    }

    fn member(&self, object: &dyn Inspect, segment: &str) -> Result<Value> {
        if let Some(value) = object
            .property(segment)
            .or_else(|| object.attribute(segment))
        {
            return Ok(value);
        }

        if self.strict {
            return Err(ExtractError::MissingField {
                segment: segment.to_owned(),
                object: format!("{object:?}"),
            }
            .into());
        }

        trace!(segment, "field not found, resolving to null");
        Ok(Value::Null)
    }
}

impl Extract for ValueExtractor {
    fn extract(&self, object: &dyn Inspect, path: Option<&str>) -> Result<Value> {
        self.resolve(object, path)
    }
}
