pub mod index;
pub mod key;
pub mod outcome;
pub mod value;

pub use key::Key;
pub use outcome::Lookup;
pub use value::{Hash, Value};

use std::fmt::Debug;

use crate::error::DigError;

pub type DigResult = Result<Lookup, DigError>;

/// A value that can resolve a whole key path on its own.
///
/// When a walk reaches an implementor, every remaining key is handed to
/// `dig` in one call and the answer is returned as is. Nothing the
/// implementor returns is walked any further.
pub trait Diggable: Debug + Send + Sync {
    fn type_name(&self) -> &str;
    fn dig(&self, keys: &[Key]) -> DigResult;
}

/// Walks `root` one key at a time.
///
/// Missing keys, out of range indices and `nil` along the way end the walk
/// with `Lookup::Absent`. Fails when no keys are given, or when a key is left
/// over for a value that cannot be dug into.
pub fn dig(root: &Value, keys: &[Key]) -> DigResult {
    if keys.is_empty() {
        return Err(DigError::NoKeys);
    }

    let mut current = root;
    for (step, key) in keys.iter().enumerate() {
        if let Value::Object(object) = current {
            return object.dig(&keys[step..]);
        }

        match current.index(key)? {
            Some(next) if !next.is_nil() => current = next,
            _ => return Ok(Lookup::Absent),
        }
    }

    Ok(Lookup::found(current.clone()))
}

impl Diggable for Value {
    fn type_name(&self) -> &str {
        Value::type_name(self)
    }

    fn dig(&self, keys: &[Key]) -> DigResult {
        dig(self, keys)
    }
}
