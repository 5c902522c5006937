//! Cards, card fields, and comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{null_as_default, Id};
use super::phase::{Phase, PhaseField};
use super::pipe::{Label, Pipe};
use super::user::User;

/// A card in a pipe.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current_phase: Option<Phase>,
    #[serde(default)]
    pub pipe: Option<Pipe>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub assignees: Vec<User>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<Label>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub child_relations: Vec<CardRelation>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fields: Vec<CardField>,
}

impl Card {
    /// Returns the filled-in field whose phase field has the given ID.
    #[must_use]
    pub fn field(&self, field_id: &str) -> Option<&CardField> {
        self.fields.iter().find(|field| {
            field
                .phase_field
                .as_ref()
                .and_then(|phase_field| phase_field.id.as_deref())
                == Some(field_id)
        })
    }
}

/// Cards connected to a card through a pipe relation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardRelation {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cards: Vec<Card>,
}

/// A field value filled in on a card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardField {
    /// The field label.
    #[serde(default)]
    pub name: Option<String>,
    /// The value as the API renders it, usually a string.
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub phase_field: Option<PhaseField>,
}

/// A comment on a card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
