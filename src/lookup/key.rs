use std::fmt;

/// A single lookup key: a mapping key, or a sequence index when it is an `Int`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Nil,
    Bool(bool),
    Int(i64),
    Str(String),
    Sym(String),
}

impl Key {
    pub fn sym(name: impl Into<String>) -> Self {
        Self::Sym(name.into())
    }

    pub fn str(text: impl Into<String>) -> Self {
        Self::Str(text.into())
    }

    pub fn as_index(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Ruby-style class name of the key, used in conversion errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(true) => "true",
            Self::Bool(false) => "false",
            Self::Int(_) => "Integer",
            Self::Str(_) => "String",
            Self::Sym(_) => "Symbol",
        }
    }

    /// Parses a key typed on the command line.
    ///
    /// `:name` is a symbol, `"text"` a string, an optionally signed integer an
    /// index, and `nil`/`true`/`false` their literal keys. Anything else is a
    /// plain string key.
    pub fn parse(text: &str) -> Self {
        match text {
            "nil" => return Self::Nil,
            "true" => return Self::Bool(true),
            "false" => return Self::Bool(false),
            _ => {}
        }

        if let Some(name) = text.strip_prefix(':') {
            if !name.is_empty() {
                return Self::sym(name);
            }
        }

        if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
            return Self::str(&text[1..text.len() - 1]);
        }

        if let Ok(index) = text.parse::<i64>() {
            return Self::Int(index);
        }

        Self::str(text)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Sym(s) => write!(f, ":{s}"),
        }
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Self::Int(index)
    }
}

impl From<bool> for Key {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Key {
    fn from(text: &str) -> Self {
        Self::str(text)
    }
}

impl From<String> for Key {
    fn from(text: String) -> Self {
        Self::Str(text)
    }
}
