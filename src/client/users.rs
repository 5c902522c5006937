//! The signed-in user and member roles.

use super::PipefyClient;
use crate::error::PipefyError;
use crate::models::{MemberPayload, User};
use crate::operations::inputs::SetRoleInput;
use crate::operations::{GET_ME, SET_ROLE};

impl PipefyClient {
    /// Returns the user that owns the access token.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Transport`] if the request fails (a `401` for a
    /// revoked token, for instance) and [`PipefyError::UnexpectedPayload`] if
    /// `me` comes back `null`.
    pub async fn get_me(&self) -> Result<User, PipefyError> {
        self.fetch(&GET_ME, serde_json::Map::new()).await
    }

    /// Grants or changes a member's role on a pipe.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Validation`] if `pipe_id` or the member's
    /// `user_id` is blank.
    pub async fn set_role(&self, input: &SetRoleInput) -> Result<MemberPayload, PipefyError> {
        self.run(&SET_ROLE, input).await
    }
}
