//! Typed records returned by the Pipefy API.
//!
//! The GraphQL selection sets decide which fields come back, so every field
//! is optional and missing fields decode as `None` (or an empty list).
//! Identifiers use [`Id`], which accepts both the string and integer forms
//! the API emits.
//!
//! - [`User`], [`Member`]
//! - [`Organization`], [`Table`]
//! - [`Pipe`], [`Label`], [`TitleField`]
//! - [`Phase`], [`PhaseField`]
//! - [`Card`], [`CardField`], [`CardRelation`], [`Comment`]
//! - [`PipeRelation`]
//! - [`Webhook`]
//!
//! Paged results come back as a [`Connection`], and delete mutations
//! report a [`DeleteOutcome`].

mod card;
mod common;
mod organization;
mod payloads;
mod phase;
mod pipe;
mod pipe_relation;
mod user;
mod webhook;

pub use card::{Card, CardField, CardRelation, Comment};
pub use common::{Connection, DeleteOutcome, Edge, Id, PageInfo};
pub use organization::{Organization, Table};
pub use payloads::{
    CardPayload, CommentPayload, LabelPayload, MemberPayload, OrganizationPayload,
    PhaseFieldPayload, PhasePayload, PipePayload, PipeRelationPayload, PipesPayload,
    WebhookPayload,
};
pub use phase::{Phase, PhaseField};
pub use pipe::{Label, Pipe, TitleField};
pub use pipe_relation::PipeRelation;
pub use user::{Member, User};
pub use webhook::Webhook;

pub(crate) use common::{id_list, null_as_default, DeletePayload};
