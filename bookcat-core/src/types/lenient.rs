//! Tolerant deserializers for text fields
//!
//! Stored and bundled records sometimes hold numbers or booleans where text is
//! expected (`"price": 15`). These keep the value as its JSON text instead of
//! rejecting the whole collection.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

fn scalar_text<E: de::Error>(value: Value) -> Result<Option<String>, E> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(E::custom(format!("expected text, found {}", other))),
    }
}

/// Text field accepting strings, numbers, booleans; `null` becomes empty
pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    scalar_text(Value::deserialize(deserializer)?).map(Option::unwrap_or_default)
}

/// Optional text field accepting strings, numbers, booleans
pub fn optional_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    scalar_text(Value::deserialize(deserializer)?)
}
