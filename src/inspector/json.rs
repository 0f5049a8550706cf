//! Import of JSON documents into a [`Heap`].
//!
//! Tool-call results reach the inspector as JSON, so this is the main way a
//! host builds values. Object key order is preserved (`serde_json` is built
//! with `preserve_order`). Integers that do not fit in an `f64` without loss
//! become bigints rather than silently rounding.

use super::value::{BigIntLiteral, Heap, Value};

/// Largest integer an `f64` represents exactly.
const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

impl Heap {
    /// Allocate `json` into this heap and return the resulting value.
    pub fn import_json(&mut self, json: &serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => import_number(n),
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => {
                let elements = items.iter().map(|item| self.import_json(item)).collect();
                Value::Ref(self.new_array(elements))
            }
            serde_json::Value::Object(map) => {
                let id = self.new_object();
                for (key, item) in map {
                    let value = self.import_json(item);
                    self.set_property(id, key.as_str(), value);
                }
                Value::Ref(id)
            }
        }
    }
}

fn import_number(n: &serde_json::Number) -> Value {
    if let Some(u) = n.as_u64() {
        if u > MAX_SAFE_INTEGER {
            return Value::BigInt(BigIntLiteral::from(u));
        }
        return Value::Number(u as f64);
    }
    if let Some(i) = n.as_i64() {
        if i.unsigned_abs() > MAX_SAFE_INTEGER {
            return Value::BigInt(BigIntLiteral::from(i));
        }
        return Value::Number(i as f64);
    }
    Value::Number(n.as_f64().unwrap_or(f64::NAN))
}
