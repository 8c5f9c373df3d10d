//! Typed records for the studio collections.
//!
//! Documents come back from the store untyped. Every record type decodes
//! through [`decode_document`], which is the only place a raw payload turns
//! into a record.

mod booking;
mod gallery;
mod hero;
mod service;

pub use booking::*;
pub use gallery::*;
pub use hero::*;
pub use service::*;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::store::RawDocument;

/// A stored document that does not match its record shape.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeError {
    pub id: String,
    pub reason: String,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "document {}: {}", self.id, self.reason)
    }
}

impl std::error::Error for DecodeError {}

/// Merge the store identifier into the payload and decode it as `T`.
///
/// The store identifier replaces any `id` field carried in the payload.
pub fn decode_document<T: DeserializeOwned>(doc: RawDocument) -> Result<T, DecodeError> {
    let RawDocument { id, mut data } = doc;
    data.insert("id".to_string(), Value::String(id.clone()));
    serde_json::from_value(Value::Object(data)).map_err(|e| DecodeError {
        id,
        reason: e.to_string(),
    })
}

/// Epoch milliseconds stored as a JSON number, integral or not.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawMillis {
    Int(i64),
    Float(f64),
}

impl RawMillis {
    fn into_millis<E: serde::de::Error>(self) -> Result<i64, E> {
        match self {
            RawMillis::Int(v) => Ok(v),
            RawMillis::Float(v) if v.is_finite() => Ok(v.trunc() as i64),
            RawMillis::Float(v) => Err(E::custom(format!("invalid timestamp {}", v))),
        }
    }
}

pub(crate) fn deserialize_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    RawMillis::deserialize(deserializer)?.into_millis()
}

pub(crate) fn deserialize_opt_millis<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawMillis>::deserialize(deserializer)?
        .map(RawMillis::into_millis)
        .transpose()
}
