//! JSON adapter for the visualization front-end.
//!
//! Thin layer over `serde_json` that adds a default-conversion hook, so
//! domain objects (sequence wrappers, curated views) can be encoded without
//! this module depending on their concrete types. Object key order is
//! preserved as written unless sorting is requested.

use std::any::Any;
use std::fmt;
use std::io::Read;

use crate::errors::{GutvizError, Result};

pub mod views;

pub use views::{JsonDomain, JsonOrf, KeyedView};

/// Capability surface inspected by the default conversion hook.
///
/// The hook checks the capabilities in a fixed priority order and the first
/// match wins: `as_residues`, then `to_plain`, then `to_json_legacy`. A type
/// exposing none of them cannot be encoded.
pub trait Convertible: fmt::Debug {
    /// Name reported in conversion and mismatch errors.
    fn type_name(&self) -> &'static str;

    /// Downcasting support for typed collection guards.
    fn as_any(&self) -> &dyn Any;

    /// Present on biological sequence wrappers; encoded as the raw string.
    fn as_residues(&self) -> Option<&str> {
        None
    }

    /// Primary conversion to a plain value.
    fn to_plain(&self) -> Option<JsonValue> {
        None
    }

    /// Legacy conversion hook kept for older renderer types.
    fn to_json_legacy(&self) -> Option<JsonValue> {
        None
    }
}

/// Object key. Non-string keys are coerced to their string form at encode
/// time rather than rejected, matching common JSON-library behavior.
#[derive(Debug, Clone, PartialEq)]
pub enum MapKey {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl MapKey {
    fn to_key_string(&self) -> String {
        match self {
            MapKey::Str(s) => s.clone(),
            MapKey::Int(i) => i.to_string(),
            MapKey::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for MapKey {
    fn from(key: &str) -> Self {
        MapKey::Str(key.to_string())
    }
}

impl From<String> for MapKey {
    fn from(key: String) -> Self {
        MapKey::Str(key)
    }
}

impl From<i64> for MapKey {
    fn from(key: i64) -> Self {
        MapKey::Int(key)
    }
}

impl From<bool> for MapKey {
    fn from(key: bool) -> Self {
        MapKey::Bool(key)
    }
}

/// Document tree handed to `encode`.
///
/// Built-in values are encoded directly; `Custom` leaves are resolved
/// through the conversion hook when the document is encoded.
#[derive(Debug)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<JsonValue>),
    /// Key/value pairs in insertion order.
    Object(Vec<(MapKey, JsonValue)>),
    /// Foreign object, resolved by the hook at encode time.
    Custom(Box<dyn Convertible>),
}

#[cfg(test)]
impl Clone for JsonValue {
    fn clone(&self) -> Self {
        match self {
            JsonValue::Null => JsonValue::Null,
            JsonValue::Bool(b) => JsonValue::Bool(*b),
            JsonValue::Int(i) => JsonValue::Int(*i),
            JsonValue::Float(f) => JsonValue::Float(*f),
            JsonValue::String(s) => JsonValue::String(s.clone()),
            JsonValue::Array(items) => JsonValue::Array(items.clone()),
            JsonValue::Object(pairs) => JsonValue::Object(pairs.clone()),
            JsonValue::Custom(_) => panic!("JsonValue::Custom cannot be cloned"),
        }
    }
}

impl JsonValue {
    /// Build an object from key/value pairs, keeping the given order.
    pub fn object<K, I>(pairs: I) -> Self
    where
        K: Into<MapKey>,
        I: IntoIterator<Item = (K, JsonValue)>,
    {
        JsonValue::Object(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Wrap a domain object for hook-based conversion.
    pub fn custom<T: Convertible + 'static>(value: T) -> Self {
        JsonValue::Custom(Box::new(value))
    }

    /// Short name of this value's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "boolean",
            JsonValue::Int(_) => "integer",
            JsonValue::Float(_) => "float",
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
            JsonValue::Custom(obj) => obj.type_name(),
        }
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<i32> for JsonValue {
    fn from(value: i32) -> Self {
        JsonValue::Int(i64::from(value))
    }
}

impl From<i64> for JsonValue {
    fn from(value: i64) -> Self {
        JsonValue::Int(value)
    }
}

impl From<usize> for JsonValue {
    fn from(value: usize) -> Self {
        JsonValue::Int(value as i64)
    }
}

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        JsonValue::Float(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(value: Vec<JsonValue>) -> Self {
        JsonValue::Array(value)
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    JsonValue::Int(i)
                } else if let Some(f) = n.as_f64() {
                    // u64 values beyond i64 range keep their f64 approximation
                    JsonValue::Float(f)
                } else {
                    JsonValue::Null
                }
            }
            serde_json::Value::String(s) => JsonValue::String(s),
            serde_json::Value::Array(items) => {
                JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
            }
            serde_json::Value::Object(map) => JsonValue::Object(
                map.into_iter()
                    .map(|(k, v)| (MapKey::Str(k), JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Switches recognized by `encode`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeOptions {
    /// Pretty-print with a fixed 2-space indent step.
    pub indent: bool,
    /// Emit object keys in sorted order instead of insertion order.
    pub sort_keys: bool,
}

/// Conversion hook signature accepted by `encode_with`.
pub type Convertor = fn(&dyn Convertible) -> Result<JsonValue>;

/// Default conversion hook.
///
/// Capability checks run in priority order: sequence wrappers first, then
/// the primary conversion, then the legacy hook. A value exposing none of
/// them fails with a `TypeConversion` error naming its type.
pub fn base_convertor(value: &dyn Convertible) -> Result<JsonValue> {
    if let Some(residues) = value.as_residues() {
        return Ok(JsonValue::String(residues.to_string()));
    }
    if let Some(plain) = value.to_plain() {
        return Ok(plain);
    }
    if let Some(legacy) = value.to_json_legacy() {
        return Ok(legacy);
    }
    Err(GutvizError::TypeConversion {
        type_name: value.type_name().to_string(),
    })
}

fn resolve(value: &JsonValue, sort_keys: bool, convertor: Convertor) -> Result<serde_json::Value> {
    use serde_json::Value;

    match value {
        JsonValue::Null => Ok(Value::Null),
        JsonValue::Bool(b) => Ok(Value::Bool(*b)),
        JsonValue::Int(i) => Ok(Value::from(*i)),
        JsonValue::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .ok_or(GutvizError::NonFiniteNumber(*f)),
        JsonValue::String(s) => Ok(Value::String(s.clone())),
        JsonValue::Array(items) => items
            .iter()
            .map(|item| resolve(item, sort_keys, convertor))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        JsonValue::Object(pairs) => {
            let mut resolved = Vec::with_capacity(pairs.len());
            for (key, val) in pairs {
                resolved.push((key.to_key_string(), resolve(val, sort_keys, convertor)?));
            }
            if sort_keys {
                resolved.sort_by(|a, b| a.0.cmp(&b.0));
            }
            let mut map = serde_json::Map::with_capacity(resolved.len());
            for (key, val) in resolved {
                // duplicate keys after coercion: last write wins
                map.insert(key, val);
            }
            Ok(Value::Object(map))
        }
        JsonValue::Custom(obj) => {
            // a conversion may itself contain further custom leaves
            let converted = convertor(obj.as_ref())?;
            resolve(&converted, sort_keys, convertor)
        }
    }
}

/// Convert the given value to a JSON string using the default hook.
pub fn encode(value: &JsonValue, options: EncodeOptions) -> Result<String> {
    encode_with(value, options, base_convertor)
}

/// Convert the given value to a JSON string with a caller-supplied hook
/// replacing the default convertor.
pub fn encode_with(
    value: &JsonValue,
    options: EncodeOptions,
    convertor: Convertor,
) -> Result<String> {
    let plain = resolve(value, options.sort_keys, convertor)?;
    let out = if options.indent {
        serde_json::to_string_pretty(&plain)
    } else {
        serde_json::to_string(&plain)
    };
    out.map_err(GutvizError::Encode)
}

/// Parse JSON text into standard values.
pub fn decode(text: &str) -> Result<serde_json::Value> {
    serde_json::from_str(text).map_err(GutvizError::Parse)
}

/// Read the full content of `reader` and parse it as JSON.
pub fn load<R: Read>(mut reader: R) -> Result<serde_json::Value> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    decode(&text)
}
