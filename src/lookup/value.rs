//! Dynamic value model that lookups walk over.
//!
//! `Hash` and `Array` are the built-in containers. `Object` holds any
//! user type implementing [`Diggable`], which takes over the rest of a walk
//! once reached. Everything else is a scalar and cannot be dug into.
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::index::resolve_index;
use super::{Diggable, DigResult, Key};
use crate::error::DigError;

pub type Hash = BTreeMap<Key, Value>;

#[derive(Debug, Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Sym(String),
    Array(Vec<Value>),
    Hash(Hash),
    Object(Arc<dyn Diggable>),
}

impl Value {
    pub fn str(text: impl Into<String>) -> Self {
        Self::Str(text.into())
    }

    pub fn sym(name: impl Into<String>) -> Self {
        Self::Sym(name.into())
    }

    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Self::Array(items.into_iter().collect())
    }

    pub fn hash<K: Into<Key>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Self::Hash(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn object<D: Diggable + 'static>(object: D) -> Self {
        Self::Object(Arc::new(object))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Ruby-style class name, used in error messages.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Nil => "NilClass",
            Self::Bool(true) => "TrueClass",
            Self::Bool(false) => "FalseClass",
            Self::Int(_) => "Integer",
            Self::Float(_) => "Float",
            Self::Str(_) => "String",
            Self::Sym(_) => "Symbol",
            Self::Array(_) => "Array",
            Self::Hash(_) => "Hash",
            Self::Object(object) => object.type_name(),
        }
    }

    /// Single-key access on the built-in containers, the equivalent of `self[key]`.
    ///
    /// `Ok(None)` when the key is missing or the index is out of range. Scalars
    /// and objects have no keyed access and fail with `NotDiggable`.
    pub fn index(&self, key: &Key) -> Result<Option<&Value>, DigError> {
        match self {
            Self::Hash(entries) => Ok(entries.get(key)),
            Self::Array(items) => Ok(resolve_index(key, items.len())?.map(|i| &items[i])),
            other => Err(DigError::not_diggable(other.type_name(), key.clone())),
        }
    }

    pub fn dig(&self, keys: &[Key]) -> DigResult {
        super::dig(self, keys)
    }
}

/// Text used for a hash key in JSON output.
///
/// String and symbol keys are written bare, everything else in inspect form
/// (`1`, `true`, `nil`).
fn json_key(key: &Key) -> String {
    match key {
        Key::Str(s) | Key::Sym(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Serializes into a JSON-shaped tree: hash keys become strings and objects
/// serialize as their inspect text.
///
/// Keys whose text collides (`1` and `"1"`, `:a` and `"a"`) collapse into one
/// entry; the later key in `Key` order wins, so strings beat integers and
/// symbols beat strings.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Nil => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Str(s) | Self::Sym(s) => serializer.serialize_str(s),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Hash(entries) => {
                let rendered: BTreeMap<String, &Value> =
                    entries.iter().map(|(k, v)| (json_key(k), v)).collect();
                let mut map = serializer.serialize_map(Some(rendered.len()))?;
                for (key, value) in rendered {
                    map.serialize_entry(&key, value)?;
                }
                map.end()
            }
            Self::Object(_) => serializer.serialize_str(&self.to_string()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Sym(a), Self::Sym(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Hash(a), Self::Hash(b)) => a == b,
            // objects have no structural equality
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Sym(s) => write!(f, ":{s}"),
            Self::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Hash(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}=>{value}")?;
                }
                write!(f, "}}")
            }
            Self::Object(object) => write!(f, "#<{}>", object.type_name()),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::str(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}
