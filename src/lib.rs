//! Nested Dig
//!
//! Recursive nested lookup across maps, sequences and user-defined values,
//! plus a small CLI for digging into JSON and YAML documents.
pub mod cli;
pub mod document;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod output;

pub use error::{DigError, ErrorKind};
pub use lookup::{dig, DigResult, Diggable, Key, Lookup, Value};
