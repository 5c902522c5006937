//! Webhook operations.

use super::PipefyClient;
use crate::error::PipefyError;
use crate::models::{DeleteOutcome, Id, WebhookPayload};
use crate::operations::inputs::{CreateWebhookInput, UpdateWebhookInput};
use crate::operations::{CREATE_WEBHOOK, DELETE_WEBHOOK, UPDATE_WEBHOOK};

impl PipefyClient {
    /// Registers a webhook on a pipe.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Validation`] if `pipe_id`, `name` or `url` is
    /// blank.
    pub async fn create_webhook(
        &self,
        input: &CreateWebhookInput,
    ) -> Result<WebhookPayload, PipefyError> {
        self.run(&CREATE_WEBHOOK, input).await
    }

    /// Updates the fields of a webhook that are set in `input`.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Validation`] if `id` is blank.
    pub async fn update_webhook(
        &self,
        input: &UpdateWebhookInput,
    ) -> Result<WebhookPayload, PipefyError> {
        self.run(&UPDATE_WEBHOOK, input).await
    }

    /// Removes a webhook.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Operation`] for failures other than a missing record.
    pub async fn delete_webhook(&self, id: &Id) -> Result<DeleteOutcome, PipefyError> {
        self.delete(&DELETE_WEBHOOK, id).await
    }
}
