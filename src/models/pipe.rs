//! Pipes and their labels.

use serde::{Deserialize, Serialize};

use super::common::{null_as_default, Id};
use super::phase::{Phase, PhaseField};
use super::user::Member;

/// A Pipefy pipe (a process board made of phases).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub public: Option<bool>,
    #[serde(default)]
    pub public_form: Option<bool>,
    #[serde(default)]
    pub only_assignees_can_edit_cards: Option<bool>,
    #[serde(default)]
    pub only_admin_can_remove_cards: Option<bool>,
    #[serde(default)]
    pub anyone_can_create_card: Option<bool>,
    #[serde(default)]
    pub cards_count: Option<u64>,
    #[serde(default)]
    pub title_field: Option<TitleField>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phases: Vec<Phase>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<Label>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_form_fields: Vec<PhaseField>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub members: Vec<Member>,
}

/// The field used as card title within a pipe.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleField {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub synced_with_card: Option<bool>,
}

/// A card label.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(default)]
    pub name: Option<String>,
    /// Hex color, e.g. `#FF0000`.
    #[serde(default)]
    pub color: Option<String>,
}
