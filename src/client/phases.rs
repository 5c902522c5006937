//! Phase and phase field operations.

use super::PipefyClient;
use crate::error::PipefyError;
use crate::models::{DeleteOutcome, Id, Phase, PhaseFieldPayload, PhasePayload};
use crate::operations::inputs::{
    CreatePhaseFieldInput, CreatePhaseInput, UpdatePhaseFieldInput, UpdatePhaseInput, Variables,
};
use crate::operations::{
    CREATE_PHASE, CREATE_PHASE_FIELD, DELETE_PHASE, DELETE_PHASE_FIELD, GET_PHASE_BY_ID,
    UPDATE_PHASE, UPDATE_PHASE_FIELD,
};

impl PipefyClient {
    /// Fetches a phase with its fields, its first cards, and the phases its
    /// cards can move to.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Operation`] if the API rejects the id.
    pub async fn get_phase_by_id(
        &self,
        id: &Id,
        cards_first: Option<i64>,
    ) -> Result<Option<Phase>, PipefyError> {
        let variables = Variables::new()
            .with("id", id)
            .with_opt("cardsFirst", cards_first)
            .into_map();
        self.fetch(&GET_PHASE_BY_ID, variables).await
    }

    /// Adds a phase to a pipe.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Validation`] if `pipe_id` or `name` is blank.
    pub async fn create_phase(&self, input: &CreatePhaseInput) -> Result<PhasePayload, PipefyError> {
        self.run(&CREATE_PHASE, input).await
    }

    /// Updates a phase.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Validation`] if `id` or `name` is blank.
    pub async fn update_phase(&self, input: &UpdatePhaseInput) -> Result<PhasePayload, PipefyError> {
        self.run(&UPDATE_PHASE, input).await
    }

    /// Deletes a phase.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Operation`] for failures other than a missing record.
    pub async fn delete_phase(&self, id: &Id) -> Result<DeleteOutcome, PipefyError> {
        self.delete(&DELETE_PHASE, id).await
    }

    /// Adds a field to a phase.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Validation`] if `phase_id`, `field_type` or
    /// `label` is blank.
    pub async fn create_phase_field(
        &self,
        input: &CreatePhaseFieldInput,
    ) -> Result<PhaseFieldPayload, PipefyError> {
        self.run(&CREATE_PHASE_FIELD, input).await
    }

    /// Updates a phase field.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Validation`] if `id` or `label` is blank.
    pub async fn update_phase_field(
        &self,
        input: &UpdatePhaseFieldInput,
    ) -> Result<PhaseFieldPayload, PipefyError> {
        self.run(&UPDATE_PHASE_FIELD, input).await
    }

    /// Deletes a phase field.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Operation`] for failures other than a missing record.
    pub async fn delete_phase_field(&self, id: &Id) -> Result<DeleteOutcome, PipefyError> {
        self.delete(&DELETE_PHASE_FIELD, id).await
    }
}
