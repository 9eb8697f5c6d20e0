//! Invoice calls.

use serde::Serialize;

use crate::models::{Invoice, Page};

use super::{ApiClient, ApiError};

impl ApiClient {
    /// List invoices, optionally filtered (`search`, `status`, `client`,
    /// `page`).
    pub async fn list_invoices(&self, params: &[(&str, &str)]) -> Result<Page<Invoice>, ApiError> {
        self.get("/crm/invoices/", params).await
    }

    pub async fn get_invoice(&self, id: &str) -> Result<Invoice, ApiError> {
        self.get(&format!("/crm/invoices/{}/", id), &[]).await
    }

    pub async fn create_invoice<B: Serialize>(&self, data: &B) -> Result<Invoice, ApiError> {
        self.post("/crm/invoices/", data).await
    }

    pub async fn update_invoice<B: Serialize>(
        &self,
        id: &str,
        data: &B,
    ) -> Result<Invoice, ApiError> {
        self.put(&format!("/crm/invoices/{}/", id), data).await
    }

    pub async fn delete_invoice(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/crm/invoices/{}/", id)).await
    }

    /// Record payment received for an invoice.
    pub async fn mark_invoice_paid(&self, id: &str) -> Result<Invoice, ApiError> {
        self.post_empty(&format!("/crm/invoices/{}/mark-paid/", id))
            .await
    }

    /// Send an invoice to its client.
    pub async fn send_invoice(&self, id: &str) -> Result<Invoice, ApiError> {
        self.post_empty(&format!("/crm/invoices/{}/send/", id))
            .await
    }
}
