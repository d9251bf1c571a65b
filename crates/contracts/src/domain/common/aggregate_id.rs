use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of a catalog aggregate as it travels through URLs and JSON.
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Path segment form of the id
    fn as_string(&self) -> String;

    /// Parse an id from a path segment or form value
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>().map_err(|e| format!("Invalid i64: {}", e))
    }
}

impl AggregateId for String {
    fn as_string(&self) -> String {
        self.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        if s.trim().is_empty() {
            return Err("Empty id".to_string());
        }
        Ok(s.to_string())
    }
}
