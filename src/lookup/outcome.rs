use super::Value;

/// Outcome of a successful lookup.
///
/// `Absent` is the only way "nothing here" is reported: landing on a stored
/// `Nil` is absence too, so `Found` never carries `Value::Nil`.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(Value),
    Absent,
}

impl Lookup {
    pub fn found(value: Value) -> Self {
        if value.is_nil() {
            Self::Absent
        } else {
            Self::Found(value)
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Found(value) => Some(value),
            Self::Absent => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Found(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// The found value, with absence surfaced as `Value::Nil`.
    pub fn into_value_or_nil(self) -> Value {
        self.into_value().unwrap_or(Value::Nil)
    }
}

impl From<Option<Value>> for Lookup {
    fn from(value: Option<Value>) -> Self {
        value.map_or(Self::Absent, Self::found)
    }
}
