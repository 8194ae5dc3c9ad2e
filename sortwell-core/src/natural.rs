//! Natural ordering of extracted values.

use std::cmp::Ordering;
use std::sync::Arc;

use ordered_float::OrderedFloat;
use sortwell_contracts::{Inspect, Value};

use crate::error::{CompareError, ExtractError, Result};

/// Compare two values by their natural order.
///
/// Numbers compare exactly across `Int`, `UInt` and `Float`; NaN sorts above
/// every other number. Text compares ordinally, lists lexicographically. Objects are
/// compared through [`Inspect::natural`]. Null sorts below everything, which
/// only matters inside lists since field comparators place nulls themselves.
pub fn natural_cmp(a: &Value, b: &Value) -> Result<Ordering> {
    match (a, b) {
        (Value::Object(object), _) => natural_cmp(&unwrap_object(object)?, b),
        (_, Value::Object(object)) => natural_cmp(a, &unwrap_object(object)?),
        (Value::Null, Value::Null) => Ok(Ordering::Equal),
        (Value::Null, _) => Ok(Ordering::Less),
        (_, Value::Null) => Ok(Ordering::Greater),
        (Value::Bool(x), Value::Bool(y)) => Ok(x.cmp(y)),
        (Value::Text(x), Value::Text(y)) => Ok(x.cmp(y)),
        (Value::Timestamp(x), Value::Timestamp(y)) => Ok(x.cmp(y)),
        (Value::Uuid(x), Value::Uuid(y)) => Ok(x.cmp(y)),
        (Value::List(xs), Value::List(ys)) => compare_lists(xs, ys),
        _ => compare_numbers(a, b).ok_or_else(|| {
            CompareError::Incomparable {
                left: a.kind(),
                right: b.kind(),
            }
            .into()
        }),
    }
}

fn compare_lists(xs: &[Value], ys: &[Value]) -> Result<Ordering> {
    for (x, y) in xs.iter().zip(ys) {
        match natural_cmp(x, y)? {
            Ordering::Equal => continue,
            ordering => return Ok(ordering),
        }
    }
    Ok(xs.len().cmp(&ys.len()))
}

fn compare_numbers(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Float(x), Value::Float(y)) => Some(OrderedFloat(*x).cmp(&OrderedFloat(*y))),
        (Value::Float(x), _) => Some(compare_int_float(as_i128(b)?, *x).reverse()),
        (_, Value::Float(y)) => Some(compare_int_float(as_i128(a)?, *y)),
        _ => Some(as_i128(a)?.cmp(&as_i128(b)?)),
    }
}

fn as_i128(value: &Value) -> Option<i128> {
    match value {
        Value::Int(v) => Some(i128::from(*v)),
        Value::UInt(v) => Some(i128::from(*v)),
        _ => None,
    }
}

// Bounds of i64 and u64, both exact in f64.
const INT_MIN: f64 = -9_223_372_036_854_775_808.0;
const UINT_END: f64 = 18_446_744_073_709_551_616.0;

/// Exact comparison of an integer with a float. NaN sorts above every
/// number, as it does between floats.
fn compare_int_float(int: i128, float: f64) -> Ordering {
    if float.is_nan() || float >= UINT_END {
        return Ordering::Less;
    }
    if float < INT_MIN {
        return Ordering::Greater;
    }

    let whole = float.trunc();
    // |whole| < 2^64, so the cast is exact.
    match int.cmp(&(whole as i128)) {
        Ordering::Equal => OrderedFloat(0.0).cmp(&OrderedFloat(float - whole)),
        ordering => ordering,
    }
}

fn unwrap_object(object: &Arc<dyn Inspect>) -> Result<Value> {
    match object.natural() {
        Some(Value::Object(inner)) if Arc::ptr_eq(&inner, object) => Err(not_orderable(object)),
        Some(value) => Ok(value),
        None => Err(not_orderable(object)),
    }
}

fn not_orderable(object: &Arc<dyn Inspect>) -> crate::error::ComparatorError {
    ExtractError::NotOrderable {
        object: format!("{object:?}"),
    }
    .into()
}
