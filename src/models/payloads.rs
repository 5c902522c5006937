//! Mutation payload wrappers.
//!
//! Every create/update mutation returns an object holding the affected
//! record under a single key, e.g. `createCard { card { ... } }`.

use serde::{Deserialize, Serialize};

use super::card::{Card, Comment};
use super::common::null_as_default;
use super::organization::Organization;
use super::phase::{Phase, PhaseField};
use super::pipe::{Label, Pipe};
use super::pipe_relation::PipeRelation;
use super::user::Member;
use super::webhook::Webhook;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationPayload {
    #[serde(default)]
    pub organization: Option<Organization>,
}

/// Payload of `clonePipes`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PipesPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub pipes: Vec<Pipe>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PipePayload {
    #[serde(default)]
    pub pipe: Option<Pipe>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhasePayload {
    #[serde(default)]
    pub phase: Option<Phase>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseFieldPayload {
    #[serde(default)]
    pub phase_field: Option<PhaseField>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelPayload {
    #[serde(default)]
    pub label: Option<Label>,
}

/// Payload of card mutations, including `moveCardToPhase` and
/// `updateCardField`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardPayload {
    #[serde(default)]
    pub card: Option<Card>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentPayload {
    #[serde(default)]
    pub comment: Option<Comment>,
}

/// Payload of `setRole`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPayload {
    #[serde(default)]
    pub member: Option<Member>,
}

/// Payload of pipe relation mutations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipeRelationPayload {
    #[serde(rename = "pipeRelation", alias = "pipe_relation", default)]
    pub pipe_relation: Option<PipeRelation>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub webhook: Option<Webhook>,
}
