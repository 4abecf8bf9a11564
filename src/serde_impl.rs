//! Serde support (feature-gated)
//!
//! `Maybe<T>` serializes exactly like `Option<T>`: `None` is `null`, `Some(v)`
//! is `v`. A [`Tag`] serializes as its normalized string and is normalized
//! again on the way in.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//! use bearing::Maybe;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Customer {
//!     name: String,
//!     nickname: Maybe<String>,
//! }
//!
//! let json = r#"{"name":"Ada","nickname":null}"#;
//! let customer: Customer = serde_json::from_str(json).unwrap();
//! assert!(customer.nickname.is_none());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Tag;
use crate::maybe::Maybe;

impl<T> Serialize for Maybe<T>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Maybe::Some(value) => serializer.serialize_some(value),
            Maybe::None => serializer.serialize_none(),
        }
    }
}

impl<'de, T> Deserialize<'de> for Maybe<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Maybe::from_nullable)
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(Tag::new(raw.as_deref()))
    }
}
