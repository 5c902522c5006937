//! Typed parameters for mutations.
//!
//! Each input struct serializes to the operation's `variables` map. Optional
//! fields left as `None` are omitted entirely, which the API treats as "leave
//! unchanged" on updates. Construct inputs with struct literals and
//! `..Default::default()`:
//!
//! ```rust
//! use pipefy_api::operations::inputs::CreateCardInput;
//! use pipefy_api::Id;
//!
//! let input = CreateCardInput {
//!     pipe_id: Id::from(301_u64),
//!     title: "New hire".to_string(),
//!     label_ids: Some(vec![Id::from("5")]),
//!     ..Default::default()
//! };
//! let variables = serde_json::to_value(&input).unwrap();
//! assert_eq!(variables["pipe_id"], "301");
//! assert!(variables.get("due_date").is_none());
//! ```
//!
//! Leaving a required field at its default (an empty `Id` or string) is
//! reported as a missing parameter before any request is sent.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::Id;

use super::{OperationSpec, ValidationError};

/// Serializes a typed input into a variables map.
pub(crate) fn to_variables<T: Serialize>(
    spec: &OperationSpec,
    input: &T,
) -> Result<Map<String, Value>, ValidationError> {
    match serde_json::to_value(input) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ValidationError::UnencodableInput {
            operation: spec.name,
            reason: format!("expected an object, got {other}"),
        }),
        Err(e) => Err(ValidationError::UnencodableInput {
            operation: spec.name,
            reason: e.to_string(),
        }),
    }
}

/// Incrementally built variables map for scalar-argument operations.
#[derive(Debug, Default)]
pub(crate) struct Variables(Map<String, Value>);

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    pub fn with_opt(self, name: &str, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

// Organizations

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CreateOrganizationInput {
    /// Industry slug, e.g. `technology`.
    pub industry: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdateOrganizationInput {
    pub id: Id,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_admin_can_invite_users: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_admin_can_create_pipes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_omniauth_to_normal_users: Option<bool>,
}

// Pipes

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ClonePipesInput {
    pub organization_id: Id,
    pub pipe_template_ids: Vec<Id>,
}

/// A label to create along with a pipe.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LabelInput {
    pub name: String,
    pub color: String,
}

/// A membership to grant, used by `createPipe` and `setRole`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemberInput {
    pub user_id: Id,
    /// `admin`, `member` or `read_only`.
    pub role_name: String,
}

/// A phase to create along with a pipe.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PhaseInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

/// A start form field to create along with a pipe.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PhaseFieldInput {
    /// Field type, e.g. `short_text`.
    pub type_id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PipePreferencesInput {
    #[serde(rename = "inboxEmailEnabled", skip_serializing_if = "Option::is_none")]
    pub inbox_email_enabled: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CreatePipeInput {
    pub organization_id: Id,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<LabelInput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<MemberInput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phases: Option<Vec<PhaseInput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_form_fields: Option<Vec<PhaseFieldInput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<PipePreferencesInput>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdatePipeInput {
    pub id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_field_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_form: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_assignees_can_edit_cards: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_admin_can_remove_cards: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anyone_can_create_card: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_time_by_unit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_unit: Option<i64>,
}

// Phases

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CreatePhaseInput {
    pub pipe_id: Id,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_admin_can_move_to_previous: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_receive_card_directly_from_draft: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdatePhaseInput {
    pub id: Id,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_admin_can_move_to_previous: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_receive_card_directly_from_draft: Option<bool>,
}

// Phase fields

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CreatePhaseFieldInput {
    pub phase_id: Id,
    /// Field type, e.g. `short_text`, `select` or `connector`.
    #[serde(rename = "type")]
    pub field_type: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_create_database_record: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_have_multiple_database_records: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_with_card: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UpdatePhaseFieldInput {
    /// The phase field slug.
    pub id: Id,
    pub label: String,
    /// Position within the phase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_with_card: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

// Labels

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CreateLabelInput {
    pub pipe_id: Id,
    pub name: String,
    /// Hex color, e.g. `#FF0000`.
    pub color: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdateLabelInput {
    pub id: Id,
    pub name: String,
    pub color: String,
}

// Cards

/// A field value to fill in when creating a card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FieldValueInput {
    /// The phase field slug.
    pub field_id: String,
    /// A string, or a list of strings for multi-value fields.
    pub field_value: Value,
}

impl FieldValueInput {
    #[must_use]
    pub fn new(field_id: impl Into<String>, field_value: impl Into<Value>) -> Self {
        Self {
            field_id: field_id.into(),
            field_value: field_value.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CreateCardInput {
    pub pipe_id: Id,
    pub title: String,
    /// Phase to create the card in; the pipe's first phase when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_ids: Option<Vec<Id>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<Id>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields_attributes: Option<Vec<FieldValueInput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_ids: Option<Vec<Id>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdateCardInput {
    pub id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Replaces the assignee list; `Some(vec![])` clears it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_ids: Option<Vec<Id>>,
    /// Replaces the label list; `Some(vec![])` clears it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<Id>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MoveCardToPhaseInput {
    pub card_id: Id,
    pub destination_phase_id: Id,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdateCardFieldInput {
    pub card_id: Id,
    /// The phase field slug.
    pub field_id: Id,
    pub new_value: Value,
}

// Comments

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CreateCommentInput {
    pub card_id: Id,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdateCommentInput {
    pub id: Id,
    pub text: String,
}

// Members

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SetRoleInput {
    pub pipe_id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<Id>,
    pub member: MemberInput,
}

// Pipe relations

/// Constraints shared by pipe relation create and update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PipeRelationRules {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_must_exist_to_move_parent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_must_exist_to_finish_parent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_children_must_be_done_to_finish_parent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_children_must_be_done_to_move_parent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_create_connected_cards: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_search_connected_cards: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_connect_multiple_cards: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CreatePipeRelationInput {
    pub parent_id: Id,
    pub child_id: Id,
    pub name: String,
    #[serde(flatten)]
    pub rules: PipeRelationRules,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdatePipeRelationInput {
    pub id: Id,
    pub name: String,
    #[serde(flatten)]
    pub rules: PipeRelationRules,
}

// Webhooks

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CreateWebhookInput {
    pub pipe_id: Id,
    pub name: String,
    pub url: String,
    /// Events to subscribe to, e.g. `card.create`.
    pub actions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdateWebhookInput {
    pub id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::{
        CREATE_CARD, CREATE_PIPE, CREATE_PIPE_RELATION, SET_ROLE, UPDATE_CARD, UPDATE_PHASE_FIELD,
    };
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_optional_fields_are_omitted() {
        let input = UpdateCardInput {
            id: Id::from("7"),
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        let variables = to_variables(&UPDATE_CARD, &input).unwrap();
        assert_eq!(Value::Object(variables), json!({"id": "7", "title": "Renamed"}));
    }

    #[test]
    fn test_empty_list_is_sent_to_clear() {
        let input = UpdateCardInput {
            id: Id::from("7"),
            label_ids: Some(Vec::new()),
            ..Default::default()
        };
        let variables = to_variables(&UPDATE_CARD, &input).unwrap();
        assert_eq!(variables["label_ids"], json!([]));
        assert_eq!(UPDATE_CARD.validate(&variables), Ok(()));
    }

    #[test]
    fn test_create_card_input_validates_against_catalog() {
        let input = CreateCardInput {
            pipe_id: Id::from(301_u64),
            title: "New hire".to_string(),
            due_date: Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
            fields_attributes: Some(vec![FieldValueInput::new("email", "ana@example.com")]),
            ..Default::default()
        };
        let variables = to_variables(&CREATE_CARD, &input).unwrap();

        assert_eq!(variables["due_date"], json!("2024-05-01T12:00:00Z"));
        assert_eq!(
            variables["fields_attributes"],
            json!([{"field_id": "email", "field_value": "ana@example.com"}])
        );
        assert_eq!(CREATE_CARD.validate(&variables), Ok(()));
    }

    #[test]
    fn test_defaulted_required_field_reads_as_missing() {
        let input = CreateCardInput {
            title: "Orphan".to_string(),
            ..Default::default()
        };
        let variables = to_variables(&CREATE_CARD, &input).unwrap();
        assert_eq!(
            CREATE_CARD.validate(&variables),
            Err(ValidationError::MissingParameter {
                operation: "createCard",
                param: "pipe_id",
            })
        );
    }

    #[test]
    fn test_pipe_relation_rules_are_flattened() {
        let input = CreatePipeRelationInput {
            parent_id: Id::from("1"),
            child_id: Id::from("2"),
            name: "Tasks".to_string(),
            rules: PipeRelationRules {
                can_connect_multiple_cards: Some(true),
                ..Default::default()
            },
        };
        let variables = to_variables(&CREATE_PIPE_RELATION, &input).unwrap();
        assert_eq!(
            Value::Object(variables.clone()),
            json!({
                "parent_id": "1",
                "child_id": "2",
                "name": "Tasks",
                "can_connect_multiple_cards": true
            })
        );
        assert_eq!(CREATE_PIPE_RELATION.validate(&variables), Ok(()));
    }

    #[test]
    fn test_nested_inputs_validate() {
        let pipe = CreatePipeInput {
            organization_id: Id::from("42"),
            name: "Hiring".to_string(),
            phases: Some(vec![PhaseInput {
                name: "Done".to_string(),
                done: Some(true),
            }]),
            preferences: Some(PipePreferencesInput {
                inbox_email_enabled: Some(false),
            }),
            ..Default::default()
        };
        let variables = to_variables(&CREATE_PIPE, &pipe).unwrap();
        assert_eq!(variables["preferences"], json!({"inboxEmailEnabled": false}));
        assert_eq!(CREATE_PIPE.validate(&variables), Ok(()));

        let role = SetRoleInput {
            pipe_id: Id::from("301"),
            organization_id: None,
            member: MemberInput {
                user_id: Id::from("9"),
                role_name: "admin".to_string(),
            },
        };
        let variables = to_variables(&SET_ROLE, &role).unwrap();
        assert_eq!(variables["member"], json!({"user_id": "9", "role_name": "admin"}));
        assert_eq!(SET_ROLE.validate(&variables), Ok(()));
    }

    #[test]
    fn test_phase_field_index_is_a_number() {
        let input = UpdatePhaseFieldInput {
            id: Id::from("priority"),
            label: "Priority".to_string(),
            index: Some(2.5),
            ..Default::default()
        };
        let variables = to_variables(&UPDATE_PHASE_FIELD, &input).unwrap();
        assert_eq!(variables["index"], json!(2.5));
        assert_eq!(UPDATE_PHASE_FIELD.validate(&variables), Ok(()));
    }

    #[test]
    fn test_variables_builder_skips_none() {
        let variables = Variables::new()
            .with("id", Id::from(5_u32))
            .with_opt("cardsFirst", None::<i64>)
            .into_map();
        assert_eq!(Value::Object(variables), json!({"id": "5"}));
    }
}
