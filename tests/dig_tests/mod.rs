
pub mod documents;
pub mod nested_hash;
