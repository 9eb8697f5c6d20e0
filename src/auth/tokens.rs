use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Access token lifetime in minutes.
/// OpsDesk backends issue access tokens valid for 1 hour.
const ACCESS_TOKEN_LIFETIME_MINUTES: i64 = 60;

/// Refresh token lifetime in days.
const REFRESH_TOKEN_LIFETIME_DAYS: i64 = 7;

/// Buffer time before access expiry to consider the token refresh-worthy.
const REFRESH_BUFFER_MINUTES: i64 = 5;

/// The stored token pair for an authenticated session.
///
/// Both tokens are set together at login and cleared together at logout or
/// terminal refresh failure. A successful refresh replaces the access token
/// and resets `obtained_at`; the refresh token is read-only after login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenSet {
    pub access: String,
    pub refresh: String,
    pub obtained_at: DateTime<Utc>,
}

impl TokenSet {
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: access.into(),
            refresh: refresh.into(),
            obtained_at: Utc::now(),
        }
    }

    /// Whether the access token has outlived its nominal lifetime.
    /// Advisory only; the server's 401 is authoritative.
    pub fn is_access_expired(&self) -> bool {
        let expiry = self.obtained_at + Duration::minutes(ACCESS_TOKEN_LIFETIME_MINUTES);
        Utc::now() > expiry
    }

    /// Whether the access token will expire soon and should be refreshed.
    pub fn needs_refresh(&self) -> bool {
        let refresh_at = self.obtained_at
            + Duration::minutes(ACCESS_TOKEN_LIFETIME_MINUTES - REFRESH_BUFFER_MINUTES);
        Utc::now() > refresh_at
    }

    /// Whether the refresh token itself has outlived its nominal lifetime,
    /// in which case a new login is the only recovery.
    pub fn is_refresh_expired(&self) -> bool {
        let expiry = self.obtained_at + Duration::days(REFRESH_TOKEN_LIFETIME_DAYS);
        Utc::now() > expiry
    }

    /// Minutes remaining until access expiry (for display).
    pub fn minutes_until_expiry(&self) -> i64 {
        let expiry = self.obtained_at + Duration::minutes(ACCESS_TOKEN_LIFETIME_MINUTES);
        (expiry - Utc::now()).num_minutes().max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_tokens_not_expired() {
        let tokens = TokenSet::new("A1", "R1");
        assert!(!tokens.is_access_expired());
        assert!(!tokens.needs_refresh());
        assert!(!tokens.is_refresh_expired());
        assert!(tokens.minutes_until_expiry() > 50);
    }

    #[test]
    fn test_aged_tokens_expire() {
        let mut tokens = TokenSet::new("A1", "R1");
        tokens.obtained_at = Utc::now() - Duration::minutes(61);
        assert!(tokens.is_access_expired());
        assert!(tokens.needs_refresh());
        assert!(!tokens.is_refresh_expired());
        assert_eq!(tokens.minutes_until_expiry(), 0);
    }

    #[test]
    fn test_refresh_buffer_window() {
        // 56 minutes old: inside the 5-minute buffer but not yet expired
        let mut tokens = TokenSet::new("A1", "R1");
        tokens.obtained_at = Utc::now() - Duration::minutes(56);
        assert!(!tokens.is_access_expired());
        assert!(tokens.needs_refresh());
    }

    #[test]
    fn test_refresh_token_expiry() {
        let mut tokens = TokenSet::new("A1", "R1");
        tokens.obtained_at = Utc::now() - Duration::days(8);
        assert!(tokens.is_refresh_expired());
    }
}
