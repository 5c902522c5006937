//! Card and comment operations.

use super::PipefyClient;
use crate::error::PipefyError;
use crate::models::{Card, CardPayload, CommentPayload, Connection, DeleteOutcome, Id};
use crate::operations::inputs::{
    CreateCardInput, CreateCommentInput, MoveCardToPhaseInput, UpdateCardFieldInput,
    UpdateCardInput, UpdateCommentInput, Variables,
};
use crate::operations::{
    CREATE_CARD, CREATE_COMMENT, DELETE_CARD, DELETE_COMMENT, GET_CARDS_BY_PIPE_ID,
    GET_CARD_BY_ID, MOVE_CARD_TO_PHASE, UPDATE_CARD, UPDATE_CARD_FIELD, UPDATE_COMMENT,
};

impl PipefyClient {
    /// Fetches one page of a pipe's cards.
    ///
    /// Pass the previous page's [`Connection::next_cursor`] as `after` to
    /// continue; pages are never fetched automatically.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Validation`] if `pipe_id` is blank.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # async fn run(client: pipefy_api::PipefyClient) -> Result<(), pipefy_api::PipefyError> {
    /// use pipefy_api::Id;
    ///
    /// let pipe_id = Id::from(301_u64);
    /// let mut after = None;
    /// loop {
    ///     let page = client.get_cards_by_pipe_id(&pipe_id, Some(50), after.as_deref()).await?;
    ///     for card in page.nodes() {
    ///         println!("{:?}", card.title);
    ///     }
    ///     match page.next_cursor() {
    ///         Some(cursor) => after = Some(cursor.to_string()),
    ///         None => break,
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_cards_by_pipe_id(
        &self,
        pipe_id: &Id,
        first: Option<i64>,
        after: Option<&str>,
    ) -> Result<Connection<Card>, PipefyError> {
        let variables = Variables::new()
            .with("pipe_id", pipe_id)
            .with_opt("first", first)
            .with_opt("after", after)
            .into_map();
        let page: Option<Connection<Card>> = self.fetch(&GET_CARDS_BY_PIPE_ID, variables).await?;
        Ok(page.unwrap_or_default())
    }

    /// Fetches a card with its phase, pipe, assignees, labels, child
    /// relations and field values.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Operation`] if the API rejects the id.
    pub async fn get_card_by_id(&self, id: &Id) -> Result<Option<Card>, PipefyError> {
        let variables = Variables::new().with("id", id).into_map();
        self.fetch(&GET_CARD_BY_ID, variables).await
    }

    /// Creates a card.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Validation`] if `pipe_id` or `title` is blank.
    pub async fn create_card(&self, input: &CreateCardInput) -> Result<CardPayload, PipefyError> {
        self.run(&CREATE_CARD, input).await
    }

    /// Updates the fields of a card that are set in `input`.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Validation`] if `id` is blank.
    pub async fn update_card(&self, input: &UpdateCardInput) -> Result<CardPayload, PipefyError> {
        self.run(&UPDATE_CARD, input).await
    }

    /// Deletes a card.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Operation`] for failures other than a missing record.
    pub async fn delete_card(&self, id: &Id) -> Result<DeleteOutcome, PipefyError> {
        self.delete(&DELETE_CARD, id).await
    }

    /// Moves a card to another phase of its pipe.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Operation`] if the move is not allowed.
    pub async fn move_card_to_phase(
        &self,
        input: &MoveCardToPhaseInput,
    ) -> Result<CardPayload, PipefyError> {
        self.run(&MOVE_CARD_TO_PHASE, input).await
    }

    /// Sets the value of one field on a card.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Validation`] if an id is blank or `new_value`
    /// is `null`.
    pub async fn update_card_field(
        &self,
        input: &UpdateCardFieldInput,
    ) -> Result<CardPayload, PipefyError> {
        self.run(&UPDATE_CARD_FIELD, input).await
    }

    /// Comments on a card.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Validation`] if `card_id` or `text` is blank.
    pub async fn create_comment(
        &self,
        input: &CreateCommentInput,
    ) -> Result<CommentPayload, PipefyError> {
        self.run(&CREATE_COMMENT, input).await
    }

    /// Edits a comment.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Validation`] if `id` or `text` is blank.
    pub async fn update_comment(
        &self,
        input: &UpdateCommentInput,
    ) -> Result<CommentPayload, PipefyError> {
        self.run(&UPDATE_COMMENT, input).await
    }

    /// Deletes a comment.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Operation`] for failures other than a missing record.
    pub async fn delete_comment(&self, id: &Id) -> Result<DeleteOutcome, PipefyError> {
        self.delete(&DELETE_COMMENT, id).await
    }
}
