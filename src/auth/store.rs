//! Pluggable token storage.
//!
//! The client reads and writes tokens through the `TokenStore` trait so the
//! backing store is the host application's choice: an in-memory store for
//! tests and short-lived tools, a JSON file under the platform config
//! directory, or the OS keychain.
//!
//! Store writes are deliberately infallible at the trait boundary. Storage
//! failures degrade the session to unauthenticated on the next read, which
//! the 401-refresh path already handles; implementations log the underlying
//! error rather than failing the in-flight API call that triggered the write.

use std::path::PathBuf;
use std::sync::RwLock;

use keyring::Entry;
use tracing::{debug, warn};

use super::TokenSet;

/// Shared access/refresh token storage.
///
/// Implementations must be safe to call from any request context. The store
/// holds both tokens together: `store` and `clear` always mutate the pair,
/// and `rotate_access` replaces only the access token after a successful
/// refresh, keeping the refresh token as issued at login.
pub trait TokenStore: Send + Sync {
    /// The currently stored token pair, if any.
    fn tokens(&self) -> Option<TokenSet>;

    /// Replace the stored pair (login, or a full re-issue).
    fn store(&self, tokens: &TokenSet);

    /// Replace only the access token after a successful refresh.
    /// No-op when no pair is stored.
    fn rotate_access(&self, access: &str);

    /// Remove both tokens (logout, or terminal refresh failure).
    fn clear(&self);

    fn access_token(&self) -> Option<String> {
        self.tokens().map(|t| t.access)
    }

    fn refresh_token(&self) -> Option<String> {
        self.tokens().map(|t| t.refresh)
    }
}

// ============================================================================
// In-memory store
// ============================================================================

/// Process-local token store. The default for tests and one-shot tools.
#[derive(Default)]
pub struct MemoryTokenStore {
    inner: RwLock<Option<TokenSet>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn tokens(&self) -> Option<TokenSet> {
        self.inner.read().ok().and_then(|guard| guard.clone())
    }

    fn store(&self, tokens: &TokenSet) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = Some(tokens.clone());
        }
    }

    fn rotate_access(&self, access: &str) {
        if let Ok(mut guard) = self.inner.write() {
            if let Some(ref mut tokens) = *guard {
                tokens.access = access.to_string();
                tokens.obtained_at = chrono::Utc::now();
            }
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = None;
        }
    }
}

// ============================================================================
// File store
// ============================================================================

/// Tokens file name in the config directory
const TOKENS_FILE: &str = "tokens.json";

/// Application name used for the config directory path
const APP_NAME: &str = "opsdesk";

/// Token store persisted as JSON under the platform config directory
/// (or an explicit path). Survives process restarts.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store under the platform config directory, e.g.
    /// `~/.config/opsdesk/tokens.json`.
    pub fn new() -> anyhow::Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(Self {
            path: config_dir.join(APP_NAME).join(TOKENS_FILE),
        })
    }

    /// Store at an explicit file path.
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_file(&self) -> Option<TokenSet> {
        if !self.path.exists() {
            return None;
        }
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "Failed to read tokens file");
                return None;
            }
        };
        match serde_json::from_str(&contents) {
            Ok(tokens) => Some(tokens),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "Failed to parse tokens file");
                None
            }
        }
    }

    fn write_file(&self, tokens: &TokenSet) {
        if let Some(parent) = self.path.parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                warn!(path = %self.path.display(), error = %err, "Failed to create tokens directory");
                return;
            }
        }
        match serde_json::to_string_pretty(tokens) {
            Ok(contents) => {
                if let Err(err) = std::fs::write(&self.path, contents) {
                    warn!(path = %self.path.display(), error = %err, "Failed to write tokens file");
                }
            }
            Err(err) => warn!(error = %err, "Failed to serialize tokens"),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn tokens(&self) -> Option<TokenSet> {
        self.read_file()
    }

    fn store(&self, tokens: &TokenSet) {
        self.write_file(tokens);
    }

    fn rotate_access(&self, access: &str) {
        if let Some(mut tokens) = self.read_file() {
            tokens.access = access.to_string();
            tokens.obtained_at = chrono::Utc::now();
            self.write_file(&tokens);
        }
    }

    fn clear(&self) {
        if self.path.exists() {
            if let Err(err) = std::fs::remove_file(&self.path) {
                warn!(path = %self.path.display(), error = %err, "Failed to remove tokens file");
            }
        }
    }
}

// ============================================================================
// Keychain store
// ============================================================================

/// Keyring service name for stored tokens
const SERVICE_NAME: &str = "opsdesk";

/// Keyring entry name for the serialized token pair
const TOKENS_ENTRY: &str = "tokens";

/// Token store backed by the OS keychain via `keyring`. The token pair is
/// stored as a single JSON entry so both tokens move together.
pub struct KeyringTokenStore {
    service: String,
}

impl KeyringTokenStore {
    pub fn new() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
        }
    }

    /// Use a custom keyring service name, e.g. to isolate environments.
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self) -> Option<Entry> {
        match Entry::new(&self.service, TOKENS_ENTRY) {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(error = %err, "Failed to create keyring entry");
                None
            }
        }
    }
}

impl Default for KeyringTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for KeyringTokenStore {
    fn tokens(&self) -> Option<TokenSet> {
        let entry = self.entry()?;
        let contents = match entry.get_password() {
            Ok(contents) => contents,
            Err(keyring::Error::NoEntry) => return None,
            Err(err) => {
                warn!(error = %err, "Failed to read tokens from keychain");
                return None;
            }
        };
        match serde_json::from_str(&contents) {
            Ok(tokens) => Some(tokens),
            Err(err) => {
                warn!(error = %err, "Failed to parse keychain tokens");
                None
            }
        }
    }

    fn store(&self, tokens: &TokenSet) {
        let Some(entry) = self.entry() else { return };
        match serde_json::to_string(tokens) {
            Ok(contents) => {
                if let Err(err) = entry.set_password(&contents) {
                    warn!(error = %err, "Failed to store tokens in keychain");
                }
            }
            Err(err) => warn!(error = %err, "Failed to serialize tokens"),
        }
    }

    fn rotate_access(&self, access: &str) {
        if let Some(mut tokens) = self.tokens() {
            tokens.access = access.to_string();
            tokens.obtained_at = chrono::Utc::now();
            self.store(&tokens);
        }
    }

    fn clear(&self) {
        let Some(entry) = self.entry() else { return };
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => {}
            Err(err) => warn!(error = %err, "Failed to delete tokens from keychain"),
        }
        debug!("cleared keychain tokens");
    }
}
