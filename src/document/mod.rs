//! Loading JSON and YAML documents into the lookup value model.

mod convert;
mod loader;

pub use loader::{detect_format, Document, DocumentFormat, LoadOptions};
