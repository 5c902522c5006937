//! Pipe relation operations.

use super::PipefyClient;
use crate::error::PipefyError;
use crate::models::{id_list, DeleteOutcome, Id, PipeRelation, PipeRelationPayload};
use crate::operations::inputs::{CreatePipeRelationInput, UpdatePipeRelationInput, Variables};
use crate::operations::{
    CREATE_PIPE_RELATION, DELETE_PIPE_RELATION, GET_PIPE_RELATION_BY_IDS, UPDATE_PIPE_RELATION,
};

impl PipefyClient {
    /// Fetches pipe relations by id.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Validation`] if any id is blank.
    pub async fn get_pipe_relation_by_ids(
        &self,
        ids: &[Id],
    ) -> Result<Vec<PipeRelation>, PipefyError> {
        let variables = Variables::new().with("ids", id_list(ids)).into_map();
        self.fetch_list(&GET_PIPE_RELATION_BY_IDS, variables).await
    }

    /// Connects a parent pipe to a child pipe.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Validation`] if an id or `name` is blank.
    pub async fn create_pipe_relation(
        &self,
        input: &CreatePipeRelationInput,
    ) -> Result<PipeRelationPayload, PipefyError> {
        self.run(&CREATE_PIPE_RELATION, input).await
    }

    /// Renames a pipe relation and updates its rules.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Validation`] if `id` or `name` is blank.
    pub async fn update_pipe_relation(
        &self,
        input: &UpdatePipeRelationInput,
    ) -> Result<PipeRelationPayload, PipefyError> {
        self.run(&UPDATE_PIPE_RELATION, input).await
    }

    /// Deletes a pipe relation.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Operation`] for failures other than a missing record.
    pub async fn delete_pipe_relation(&self, id: &Id) -> Result<DeleteOutcome, PipefyError> {
        self.delete(&DELETE_PIPE_RELATION, id).await
    }
}
