//! Authentication state: token storage and session teardown notification.
//!
//! This module provides:
//! - `TokenSet`: the stored access/refresh token pair with expiry helpers
//! - `TokenStore`: pluggable storage backing (memory, file, OS keychain)
//! - `AuthEvents`: host-supplied hook fired when the session is torn down
//!
//! Access tokens expire after 1 hour; refresh tokens after 7 days. Expiry
//! helpers are advisory only - the client's 401-driven refresh path is the
//! authoritative signal that an access token is no longer accepted.

pub mod events;
pub mod store;
pub mod tokens;

pub use events::{AuthEvents, NoopAuthEvents};
pub use store::{FileTokenStore, KeyringTokenStore, MemoryTokenStore, TokenStore};
pub use tokens::TokenSet;
