//! Pipe and label operations.

use super::PipefyClient;
use crate::error::PipefyError;
use crate::models::{id_list, DeleteOutcome, Id, LabelPayload, Pipe, PipePayload, PipesPayload};
use crate::operations::inputs::{
    ClonePipesInput, CreateLabelInput, CreatePipeInput, UpdateLabelInput, UpdatePipeInput,
    Variables,
};
use crate::operations::{
    CLONE_PIPES, CREATE_LABEL, CREATE_PIPE, DELETE_LABEL, DELETE_PIPE, GET_PIPE_BY_ID, LIST_PIPES,
    UPDATE_LABEL, UPDATE_PIPE,
};

impl PipefyClient {
    /// Fetches several pipes with their phases.
    ///
    /// `cards_first` limits how many cards are returned per phase. Ids that
    /// do not resolve are left out of the result.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Validation`] if any id is blank.
    pub async fn list_pipes(
        &self,
        ids: &[Id],
        cards_first: Option<i64>,
    ) -> Result<Vec<Pipe>, PipefyError> {
        let variables = Variables::new()
            .with("ids", id_list(ids))
            .with_opt("cardsFirst", cards_first)
            .into_map();
        self.fetch_list(&LIST_PIPES, variables).await
    }

    /// Fetches one pipe with its phases, labels, members and start form.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Operation`] if the API rejects the id.
    pub async fn get_pipe_by_id(
        &self,
        id: &Id,
        cards_first: Option<i64>,
    ) -> Result<Option<Pipe>, PipefyError> {
        let variables = Variables::new()
            .with("id", id)
            .with_opt("cardsFirst", cards_first)
            .into_map();
        self.fetch(&GET_PIPE_BY_ID, variables).await
    }

    /// Clones pipe templates into an organization.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Validation`] if the organization id is blank.
    pub async fn clone_pipes(&self, input: &ClonePipesInput) -> Result<PipesPayload, PipefyError> {
        self.run(&CLONE_PIPES, input).await
    }

    /// Creates a pipe, optionally with labels, members, phases and start
    /// form fields.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Validation`] if `organization_id` or `name` is blank.
    pub async fn create_pipe(&self, input: &CreatePipeInput) -> Result<PipePayload, PipefyError> {
        self.run(&CREATE_PIPE, input).await
    }

    /// Updates the fields of a pipe that are set in `input`.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Validation`] if `id` is blank.
    pub async fn update_pipe(&self, input: &UpdatePipeInput) -> Result<PipePayload, PipefyError> {
        self.run(&UPDATE_PIPE, input).await
    }

    /// Deletes a pipe.
    ///
    /// # Errors
    ///
    /// A pipe that no longer exists is not an error; see
    /// [`DeleteOutcome::AlreadyAbsent`].
    pub async fn delete_pipe(&self, id: &Id) -> Result<DeleteOutcome, PipefyError> {
        self.delete(&DELETE_PIPE, id).await
    }

    /// Creates a label on a pipe.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Validation`] if any field is blank.
    pub async fn create_label(&self, input: &CreateLabelInput) -> Result<LabelPayload, PipefyError> {
        self.run(&CREATE_LABEL, input).await
    }

    /// Renames or recolors a label.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Validation`] if any field is blank.
    pub async fn update_label(&self, input: &UpdateLabelInput) -> Result<LabelPayload, PipefyError> {
        self.run(&UPDATE_LABEL, input).await
    }

    /// Deletes a label.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Operation`] for failures other than a missing record.
    pub async fn delete_label(&self, id: &Id) -> Result<DeleteOutcome, PipefyError> {
        self.delete(&DELETE_LABEL, id).await
    }
}
