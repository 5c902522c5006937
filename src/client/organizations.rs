//! Organization operations.

use super::PipefyClient;
use crate::error::PipefyError;
use crate::models::{id_list, DeleteOutcome, Id, Organization, OrganizationPayload};
use crate::operations::inputs::{CreateOrganizationInput, UpdateOrganizationInput, Variables};
use crate::operations::{
    CREATE_ORGANIZATION, DELETE_ORGANIZATION, GET_ORGANIZATION_BY_ID, LIST_ORGANIZATIONS,
    UPDATE_ORGANIZATION,
};

impl PipefyClient {
    /// Lists organizations, optionally restricted to `ids`.
    ///
    /// With `None`, every organization the token can see is returned.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Validation`] if any id is blank.
    pub async fn list_organizations(
        &self,
        ids: Option<&[Id]>,
    ) -> Result<Vec<Organization>, PipefyError> {
        let variables = Variables::new()
            .with_opt("ids", ids.map(id_list))
            .into_map();
        self.fetch_list(&LIST_ORGANIZATIONS, variables).await
    }

    /// Fetches one organization with its members, pipes and tables.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Operation`] if the API rejects the id.
    pub async fn get_organization_by_id(
        &self,
        id: &Id,
    ) -> Result<Option<Organization>, PipefyError> {
        let variables = Variables::new().with("id", id).into_map();
        self.fetch(&GET_ORGANIZATION_BY_ID, variables).await
    }

    /// Creates an organization.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Validation`] if `industry` or `name` is blank.
    pub async fn create_organization(
        &self,
        input: &CreateOrganizationInput,
    ) -> Result<OrganizationPayload, PipefyError> {
        self.run(&CREATE_ORGANIZATION, input).await
    }

    /// Renames an organization and updates its access flags.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Validation`] if `id` or `name` is blank.
    pub async fn update_organization(
        &self,
        input: &UpdateOrganizationInput,
    ) -> Result<OrganizationPayload, PipefyError> {
        self.run(&UPDATE_ORGANIZATION, input).await
    }

    /// Deletes an organization.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Operation`] for failures other than a missing
    /// record, which is reported as [`DeleteOutcome::AlreadyAbsent`].
    pub async fn delete_organization(&self, id: &Id) -> Result<DeleteOutcome, PipefyError> {
        self.delete(&DELETE_ORGANIZATION, id).await
    }
}
