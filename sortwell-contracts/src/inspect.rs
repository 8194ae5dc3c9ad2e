//! Runtime introspection used to resolve field paths.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value::Value;

/// Exposes named members of an object at runtime.
///
/// A path segment is looked up with [`Inspect::property`] first and
/// [`Inspect::attribute`] second. Implementations return `None` for names
/// they do not know; the extractor decides whether that is an error.
///
/// ```
/// use sortwell_contracts::{Inspect, Value};
///
/// #[derive(Debug)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// impl Inspect for Person {
///     fn property(&self, name: &str) -> Option<Value> {
///         match name {
///             "name" => Some(self.name.as_str().into()),
///             "age" => Some(self.age.into()),
///             _ => None,
///         }
///     }
/// }
///
/// let bob = Person { name: "Bob".into(), age: 30 };
/// assert_eq!(bob.property("age"), Some(Value::UInt(30)));
/// ```
pub trait Inspect: fmt::Debug + Send + Sync {
    /// Accessor-style member.
    fn property(&self, name: &str) -> Option<Value>;

    /// Plain data member, consulted when no property matches.
    fn attribute(&self, _name: &str) -> Option<Value> {
        None
    }

    /// The object itself as a comparable value. Used when a sort field has
    /// no path.
    fn natural(&self) -> Option<Value> {
        None
    }

    /// Whether the object stands for an absent value.
    fn is_null(&self) -> bool {
        false
    }
}

impl Inspect for Value {
    fn property(&self, name: &str) -> Option<Value> {
        match self {
            Value::List(items) => {
                name.parse::<usize>().ok().and_then(|i| items.get(i)).cloned()
            }
            Value::Object(object) => object.property(name),
            _ => None,
        }
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match self {
            Value::Record(map) => map.get(name).cloned(),
            Value::Object(object) => object.attribute(name),
            _ => None,
        }
    }

    fn natural(&self) -> Option<Value> {
        match self {
            Value::Object(object) => {
                object.natural().or_else(|| Some(self.clone()))
            }
            other => Some(other.clone()),
        }
    }

    fn is_null(&self) -> bool {
        Value::is_null(self)
    }
}

macro_rules! impl_inspect_scalar {
    ($($t:ty),*) => {
        $(impl Inspect for $t {
            fn property(&self, _name: &str) -> Option<Value> {
                None
            }

            fn natural(&self) -> Option<Value> {
                Some(Value::from(self.clone()))
            }
        })*
    };
}

impl_inspect_scalar!(
    bool,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    String,
    DateTime<Utc>,
    Uuid
);

impl Inspect for str {
    fn property(&self, _name: &str) -> Option<Value> {
        None
    }

    fn natural(&self) -> Option<Value> {
        Some(Value::from(self))
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn property(&self, name: &str) -> Option<Value> {
        self.as_ref().and_then(|inner| inner.property(name))
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        self.as_ref().and_then(|inner| inner.attribute(name))
    }

    fn natural(&self) -> Option<Value> {
        match self {
            Some(inner) => inner.natural(),
            None => Some(Value::Null),
        }
    }

    fn is_null(&self) -> bool {
        self.as_ref().is_none_or(|inner| inner.is_null())
    }
}

macro_rules! impl_inspect_deref {
    ($($ptr:ty),*) => {
        $(impl<T: Inspect + ?Sized> Inspect for $ptr {
            fn property(&self, name: &str) -> Option<Value> {
                (**self).property(name)
            }

            fn attribute(&self, name: &str) -> Option<Value> {
                (**self).attribute(name)
            }

            fn natural(&self) -> Option<Value> {
                (**self).natural()
            }

            fn is_null(&self) -> bool {
                (**self).is_null()
            }
        })*
    };
}

impl_inspect_deref!(&T, Box<T>, Arc<T>);
