//! REST API client module for OpsDesk backends.
//!
//! This module provides the `ApiClient` for communicating with the OpsDesk
//! API: auth session operations plus resource calls for users, CRM clients,
//! projects, tasks, templates, invoices, and interactions.
//!
//! The API uses JWT bearer token authentication with a refresh token issued
//! at login; expired access tokens are renewed transparently by the client.

pub mod client;
pub mod clients;
pub mod error;
pub mod interactions;
pub mod invoices;
pub mod projects;
pub mod tasks;
pub mod templates;
pub mod users;

pub use client::ApiClient;
pub use error::ApiError;
