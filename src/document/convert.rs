use crate::lookup::{Key, Value};

use super::LoadOptions;

/// Converts a parsed JSON tree into the lookup value model.
pub fn from_json(json: serde_json::Value, options: &LoadOptions) -> Value {
    match json {
        serde_json::Value::Null => Value::Nil,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => n.as_f64().map_or(Value::Nil, Value::Float),
        },
        serde_json::Value::String(s) => Value::Str(s),
        serde_json::Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| from_json(item, options))
                .collect(),
        ),
        serde_json::Value::Object(entries) => Value::Hash(
            entries
                .into_iter()
                .map(|(k, v)| (object_key(k, options), from_json(v, options)))
                .collect(),
        ),
    }
}

/// Converts a parsed YAML tree into the lookup value model.
///
/// Unlike JSON, YAML mapping keys keep their scalar type, so `0: false` is
/// dug with the integer key `0`. Keys with no `Key` counterpart (floats,
/// sequences, mappings) become string keys holding their inspect text.
pub fn from_yaml(yaml: serde_yaml::Value, options: &LoadOptions) -> Value {
    match yaml {
        serde_yaml::Value::Null => Value::Nil,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => yaml_number(&n),
        serde_yaml::Value::String(s) => Value::Str(s),
        serde_yaml::Value::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(|item| from_yaml(item, options))
                .collect(),
        ),
        serde_yaml::Value::Mapping(entries) => Value::Hash(
            entries
                .into_iter()
                .map(|(k, v)| (yaml_key(k, options), from_yaml(v, options)))
                .collect(),
        ),
        serde_yaml::Value::Tagged(tagged) => from_yaml(tagged.value, options),
    }
}

fn yaml_number(n: &serde_yaml::Number) -> Value {
    match n.as_i64() {
        Some(i) => Value::Int(i),
        None => n.as_f64().map_or(Value::Nil, Value::Float),
    }
}

fn yaml_key(key: serde_yaml::Value, options: &LoadOptions) -> Key {
    match from_yaml(key, options) {
        Value::Nil => Key::Nil,
        Value::Bool(b) => Key::Bool(b),
        Value::Int(i) => Key::Int(i),
        Value::Str(s) => object_key(s, options),
        Value::Sym(s) => Key::Sym(s),
        other => Key::Str(other.to_string()),
    }
}

fn object_key(name: String, options: &LoadOptions) -> Key {
    if options.symbolize_keys {
        Key::Sym(name)
    } else {
        Key::Str(name)
    }
}
