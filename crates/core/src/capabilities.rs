//! Capability traits for element types.
//!
//! Operations that need more than traversal ask for it here: truthiness for
//! the default iterator of `every`/`some`, named properties for `pluck` and
//! `sort_by_property`, writable keys for merge targets, and named zero-argument
//! methods for `invoke`.

use crate::errors::{Error, Result};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Truthiness of a value when no predicate is supplied
pub trait Truthy {
    /// Whether the value counts as "true"
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! integer_truthy {
    ($($ty:ty),+) => {$(
        impl Truthy for $ty {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        }
    )+};
}

integer_truthy!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            Value::Number(number) => number.as_f64().is_some_and(|n| n.is_truthy()),
            Value::String(text) => !text.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

/// Named-property lookup on an element
pub trait Property {
    /// Type of the property values
    type Value;

    /// The value stored under `name`, or `None` when absent
    fn property(&self, name: &str) -> Option<&Self::Value>;
}

impl<V, S: BuildHasher> Property for HashMap<String, V, S> {
    type Value = V;

    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V, S: BuildHasher> Property for IndexMap<String, V, S> {
    type Value = V;

    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V> Property for BTreeMap<String, V> {
    type Value = V;

    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl Property for Map<String, Value> {
    type Value = Value;

    fn property(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

/// Non-objects have no properties.
impl Property for Value {
    type Value = Value;

    fn property(&self, name: &str) -> Option<&Value> {
        self.as_object().and_then(|object| object.get(name))
    }
}

/// A keyed mapping that merge operations can write into
pub trait MappingMut {
    /// Type of the stored values
    type Value;

    /// Whether a value is currently stored under `key`
    fn contains_key(&self, key: &str) -> bool;

    /// Store `value` under `key`, replacing any previous value
    fn insert(&mut self, key: String, value: Self::Value);
}

impl<V, S: BuildHasher> MappingMut for HashMap<String, V, S> {
    type Value = V;

    fn contains_key(&self, key: &str) -> bool {
        HashMap::contains_key(self, key)
    }

    fn insert(&mut self, key: String, value: V) {
        HashMap::insert(self, key, value);
    }
}

impl<V, S: BuildHasher> MappingMut for IndexMap<String, V, S> {
    type Value = V;

    fn contains_key(&self, key: &str) -> bool {
        IndexMap::contains_key(self, key)
    }

    fn insert(&mut self, key: String, value: V) {
        IndexMap::insert(self, key, value);
    }
}

impl<V> MappingMut for BTreeMap<String, V> {
    type Value = V;

    fn contains_key(&self, key: &str) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn insert(&mut self, key: String, value: V) {
        BTreeMap::insert(self, key, value);
    }
}

impl MappingMut for Map<String, Value> {
    type Value = Value;

    fn contains_key(&self, key: &str) -> bool {
        Map::contains_key(self, key)
    }

    fn insert(&mut self, key: String, value: Value) {
        Map::insert(self, key, value);
    }
}

/// Zero-argument methods callable by name
pub trait Methods {
    /// Result type shared by every method
    type Output;

    /// Invoke the method called `name`, failing if the receiver has none
    fn call_method(&self, name: &str) -> Result<Self::Output>;
}

impl Methods for str {
    type Output = String;

    fn call_method(&self, name: &str) -> Result<String> {
        match name {
            "to_uppercase" => Ok(self.to_uppercase()),
            "to_lowercase" => Ok(self.to_lowercase()),
            "trim" => Ok(self.trim().to_string()),
            "reverse" => Ok(self.chars().rev().collect()),
            "len" => Ok(self.chars().count().to_string()),
            _ => Err(Error::unknown_method(name, "str")),
        }
    }
}

impl Methods for String {
    type Output = String;

    fn call_method(&self, name: &str) -> Result<String> {
        self.as_str().call_method(name)
    }
}

impl Methods for Value {
    type Output = Value;

    fn call_method(&self, name: &str) -> Result<Value> {
        match (name, self) {
            ("to_string", Value::String(text)) => Ok(Value::String(text.clone())),
            ("to_string", other) => Ok(Value::String(other.to_string())),
            ("type_of", _) => Ok(Value::String(json_type_name(self).to_string())),
            ("len", Value::String(text)) => Ok(Value::from(text.chars().count())),
            ("len", Value::Array(items)) => Ok(Value::from(items.len())),
            ("len", Value::Object(object)) => Ok(Value::from(object.len())),
            ("keys", Value::Object(object)) => {
                Ok(Value::Array(object.keys().cloned().map(Value::String).collect()))
            }
            _ => Err(Error::unknown_method(name, json_type_name(self))),
        }
    }
}

impl<T: Methods + ?Sized> Methods for &T {
    type Output = T::Output;

    fn call_method(&self, name: &str) -> Result<T::Output> {
        (**self).call_method(name)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
