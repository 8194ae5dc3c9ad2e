//! Bridges `serde_json` documents into the value tree.

use serde::Serialize;
use serde_json::Value as Json;

use crate::inspect::Inspect;
use crate::value::Value;

/// Serializes any `Serialize` type into a [`Value`].
///
/// Structs become records keyed by their serialized field names, so the
/// paths a comparator uses are the ones the JSON document would use.
pub fn to_value<T>(value: &T) -> serde_json::Result<Value>
where
    T: Serialize + ?Sized,
{
    serde_json::to_value(value).map(Value::from)
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInt(u)
                } else {
                    n.as_f64().map_or(Value::Null, Value::Float)
                }
            }
            Json::String(s) => Value::Text(s),
            Json::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            Json::Object(map) => Value::Record(
                map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
        }
    }
}

impl Inspect for Json {
    fn property(&self, name: &str) -> Option<Value> {
        match self {
            Json::Array(items) => name
                .parse::<usize>()
                .ok()
                .and_then(|i| items.get(i))
                .cloned()
                .map(Value::from),
            _ => None,
        }
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match self {
            Json::Object(map) => map.get(name).cloned().map(Value::from),
            _ => None,
        }
    }

    fn natural(&self) -> Option<Value> {
        match self {
            Json::Object(_) | Json::Array(_) => None,
            scalar => Some(Value::from(scalar.clone())),
        }
    }

    fn is_null(&self) -> bool {
        matches!(self, Json::Null)
    }
}
