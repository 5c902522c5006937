//! Shared model types: identifiers, connections, and delete outcomes.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A Pipefy record identifier.
///
/// The API accepts numeric and string identifiers interchangeably. `Id`
/// stores the textual form, serializes as a JSON string, and deserializes
/// from either a string or an integer.
///
/// # Example
///
/// ```rust
/// use pipefy_api::Id;
///
/// let from_number = Id::from(301_u64);
/// let from_text = Id::from("301");
/// assert_eq!(from_number, from_text);
/// assert_eq!(serde_json::to_string(&from_number).unwrap(), r#""301""#);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(String);

impl Id {
    /// Creates an identifier from its textual form.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the textual form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the identifier is empty or whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for Id {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&String> for Id {
    fn from(id: &String) -> Self {
        Self(id.clone())
    }
}

impl From<u64> for Id {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<u32> for Id {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl From<Id> for Value {
    fn from(id: Id) -> Self {
        Self::String(id.0)
    }
}

impl From<&Id> for Value {
    fn from(id: &Id) -> Self {
        Self::String(id.0.clone())
    }
}

impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = Id;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer identifier")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Id, E> {
                Ok(Id::from(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Id, E> {
                Ok(Id(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Id, E> {
                Ok(Id::from(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Id, E> {
                Ok(Id(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// Converts a slice of identifiers into a JSON array.
pub(crate) fn id_list(ids: &[Id]) -> Value {
    Value::Array(ids.iter().map(Value::from).collect())
}

/// Deserializes `null` as the type's default (used for list fields).
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Cursor information for a page of a connection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Whether another page follows.
    #[serde(rename = "hasNextPage", alias = "has_next_page", default)]
    pub has_next_page: bool,
    /// Cursor to pass as `after` to fetch the next page.
    #[serde(rename = "endCursor", alias = "end_cursor", default)]
    pub end_cursor: Option<String>,
}

/// One edge of a connection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Edge<T> {
    /// The record.
    pub node: T,
    /// The edge cursor, when selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// A Relay-style page of records.
///
/// The client never fetches further pages on its own; pass
/// `page_info.end_cursor` back as `after` to continue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Connection<T> {
    /// The edges of this page.
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub edges: Vec<Edge<T>>,
    /// Cursor information, when selected.
    #[serde(
        rename = "pageInfo",
        alias = "page_info",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub page_info: Option<PageInfo>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self {
            edges: Vec::new(),
            page_info: None,
        }
    }
}

impl<T> Connection<T> {
    /// Iterates over the records of this page.
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.edges.iter().map(|edge| &edge.node)
    }

    /// Consumes the page, returning its records.
    #[must_use]
    pub fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }

    /// Returns the cursor for the next page, if there is one.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        self.page_info
            .as_ref()
            .filter(|info| info.has_next_page)
            .and_then(|info| info.end_cursor.as_deref())
    }
}

/// Result of a delete-by-id mutation.
///
/// Deleting is idempotent: removing a record that no longer exists reports
/// [`DeleteOutcome::AlreadyAbsent`] rather than failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeleteOutcome {
    /// The record existed and was deleted by this call.
    Deleted,
    /// The record did not exist.
    AlreadyAbsent,
}

impl DeleteOutcome {
    /// Returns `true` if this call removed the record.
    #[must_use]
    pub const fn was_deleted(self) -> bool {
        matches!(self, Self::Deleted)
    }
}

/// Payload of every `delete*` mutation. Both the payload and its `success`
/// flag are required.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct DeletePayload {
    pub success: bool,
}

impl From<DeletePayload> for DeleteOutcome {
    fn from(payload: DeletePayload) -> Self {
        if payload.success {
            Self::Deleted
        } else {
            Self::AlreadyAbsent
        }
    }
}
