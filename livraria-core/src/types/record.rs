//! Book records as delivered by the books endpoint

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Opaque identifier of a fetched book
///
/// The endpoint may send the id as a JSON string or a JSON number; both are
/// kept as their string form so they can serve as a card's identity key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Read an id from a JSON value; only strings and numbers qualify
    fn from_value(value: Option<&Value>) -> Option<Self> {
        match value? {
            Value::String(s) => Some(BookId(s.clone())),
            Value::Number(n) => Some(BookId(n.to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single book as returned by the remote source
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BookRecord {
    /// Identity key, unique within one fetched list
    pub id: BookId,

    /// Join key into the cover and detail tables
    pub title: String,
}

impl BookRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: BookId::new(id),
            title: title.into(),
        }
    }

    /// Build a record from one object of the fetched list
    ///
    /// A missing or unusable `id` falls back to the object's position in the
    /// list. A missing or null `title` becomes an empty title, which misses
    /// both catalog tables. Other fields are ignored.
    pub fn from_object(index: usize, object: &Map<String, Value>) -> Self {
        let id = BookId::from_value(object.get("id"))
            .unwrap_or_else(|| BookId(index.to_string()));
        let title = match object.get("title") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        };
        Self { id, title }
    }
}

/// Decode a response body into records
///
/// The body only has to be a JSON array of objects; fields inside each object
/// are read leniently by [`BookRecord::from_object`].
pub fn decode_records(body: &[u8]) -> serde_json::Result<Vec<BookRecord>> {
    let objects: Vec<Map<String, Value>> = serde_json::from_slice(body)?;
    Ok(objects
        .iter()
        .enumerate()
        .map(|(index, object)| BookRecord::from_object(index, object))
        .collect())
}
