//! Phases and phase fields.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::common::{null_as_default, Connection, Id};

/// A phase (column) within a pipe.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Whether cards in this phase count as finished.
    #[serde(default)]
    pub done: Option<bool>,
    #[serde(default)]
    pub cards_count: Option<u64>,
    #[serde(default)]
    pub cards: Option<Connection<Card>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fields: Vec<PhaseField>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cards_can_be_moved_to_phases: Vec<Phase>,
}

/// A form field attached to a phase or a pipe's start form.
///
/// Field IDs are slugs such as `what_is_your_name`, not numbers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseField {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    /// Field type, e.g. `short_text` or `select`.
    #[serde(rename = "type", default)]
    pub field_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub help: Option<String>,
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(default)]
    pub editable: Option<bool>,
    #[serde(default)]
    pub synced_with_card: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: Vec<String>,
    #[serde(default)]
    pub phase: Option<Phase>,
}
