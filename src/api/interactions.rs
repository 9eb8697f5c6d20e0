//! CRM interaction (client touchpoint) calls.

use serde::Serialize;

use crate::models::{Interaction, Page};

use super::{ApiClient, ApiError};

impl ApiClient {
    /// List interactions, optionally filtered (`client`,
    /// `interaction_type`, `page`).
    pub async fn list_interactions(
        &self,
        params: &[(&str, &str)],
    ) -> Result<Page<Interaction>, ApiError> {
        self.get("/crm/interactions/", params).await
    }

    pub async fn get_interaction(&self, id: &str) -> Result<Interaction, ApiError> {
        self.get(&format!("/crm/interactions/{}/", id), &[]).await
    }

    pub async fn create_interaction<B: Serialize>(&self, data: &B) -> Result<Interaction, ApiError> {
        self.post("/crm/interactions/", data).await
    }

    pub async fn update_interaction<B: Serialize>(
        &self,
        id: &str,
        data: &B,
    ) -> Result<Interaction, ApiError> {
        self.put(&format!("/crm/interactions/{}/", id), data).await
    }

    pub async fn delete_interaction(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/crm/interactions/{}/", id)).await
    }
}
