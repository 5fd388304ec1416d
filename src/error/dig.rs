use thiserror::Error;

use crate::lookup::Key;

/// Broad failure class of a lookup, mirroring Ruby's `ArgumentError` and
/// `TypeError` split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidCall,
    NotDiggable,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigError {
    #[error("wrong number of arguments (given 0, expected 1+)")]
    NoKeys,

    #[error("{type_name} does not have #dig method")]
    NotDiggable { type_name: String, key: Key },

    #[error("no implicit conversion of {} into Integer", key.type_name())]
    InvalidIndex { key: Key },
}

impl DigError {
    pub fn not_diggable(type_name: impl Into<String>, key: Key) -> Self {
        Self::NotDiggable {
            type_name: type_name.into(),
            key,
        }
    }

    pub fn invalid_index(key: Key) -> Self {
        Self::InvalidIndex { key }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoKeys => ErrorKind::InvalidCall,
            Self::NotDiggable { .. } | Self::InvalidIndex { .. } => ErrorKind::NotDiggable,
        }
    }
}
