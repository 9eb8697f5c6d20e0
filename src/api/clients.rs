//! CRM client (customer account) calls.

use serde::Serialize;

use crate::models::{ClientRecord, Invoice, Page, Project};

use super::{ApiClient, ApiError};

impl ApiClient {
    /// List CRM clients, optionally filtered (`search`, `is_active`, `page`).
    pub async fn list_clients(
        &self,
        params: &[(&str, &str)],
    ) -> Result<Page<ClientRecord>, ApiError> {
        self.get("/crm/clients/", params).await
    }

    pub async fn get_client(&self, id: &str) -> Result<ClientRecord, ApiError> {
        self.get(&format!("/crm/clients/{}/", id), &[]).await
    }

    pub async fn create_client<B: Serialize>(&self, data: &B) -> Result<ClientRecord, ApiError> {
        self.post("/crm/clients/", data).await
    }

    pub async fn update_client<B: Serialize>(
        &self,
        id: &str,
        data: &B,
    ) -> Result<ClientRecord, ApiError> {
        self.put(&format!("/crm/clients/{}/", id), data).await
    }

    pub async fn delete_client(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/crm/clients/{}/", id)).await
    }

    /// Projects belonging to a client.
    pub async fn client_projects(&self, id: &str) -> Result<Vec<Project>, ApiError> {
        self.get(&format!("/crm/clients/{}/projects/", id), &[])
            .await
    }

    /// Invoices issued to a client.
    pub async fn client_invoices(&self, id: &str) -> Result<Vec<Invoice>, ApiError> {
        self.get(&format!("/crm/clients/{}/invoices/", id), &[])
            .await
    }
}
