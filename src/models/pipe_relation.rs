//! Pipe relations (parent/child links between pipes).

use serde::{Deserialize, Serialize};

use super::common::Id;

/// A relation connecting cards of a parent pipe to cards of a child pipe.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipeRelation {
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub parent_id: Option<Id>,
    #[serde(default)]
    pub child_id: Option<Id>,
    #[serde(default)]
    pub child_name: Option<String>,
    #[serde(default)]
    pub child_must_exist_to_move_parent: Option<bool>,
    #[serde(default)]
    pub child_must_exist_to_finish_parent: Option<bool>,
    #[serde(default)]
    pub all_children_must_be_done_to_finish_parent: Option<bool>,
    #[serde(default)]
    pub all_children_must_be_done_to_move_parent: Option<bool>,
    #[serde(default)]
    pub can_create_connected_cards: Option<bool>,
    #[serde(default)]
    pub can_search_connected_cards: Option<bool>,
    #[serde(default)]
    pub can_connect_multiple_cards: Option<bool>,
}
