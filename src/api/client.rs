//! Authenticated API client for the OpsDesk REST API.
//!
//! Every resource call flows through one pipeline: attach the stored bearer
//! token, dispatch, and on a first-attempt 401 perform a single transparent
//! token refresh before replaying the original request. A failed refresh
//! tears the session down (tokens cleared, `AuthEvents::on_auth_failure`
//! fired) and surfaces the refresh failure to the caller.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::{AuthEvents, NoopAuthEvents, TokenSet, TokenStore};
use crate::config::Config;
use crate::models::{Credentials, RefreshResponse, TokenPair, User};

use super::ApiError;

/// Token issue endpoint (login)
const LOGIN_PATH: &str = "/token/";

/// Token refresh endpoint
const REFRESH_PATH: &str = "/token/refresh/";

/// Current-user endpoint
const CURRENT_USER_PATH: &str = "/users/me/";

/// API client for OpsDesk backends.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    events: Arc<dyn AuthEvents>,
}

impl ApiClient {
    /// Create a new API client over the given token store.
    pub fn new(config: &Config, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            tokens,
            events: Arc::new(NoopAuthEvents),
        })
    }

    /// Install a handler for terminal auth failures, typically a
    /// navigate-to-login callback in the host application.
    pub fn with_auth_events(mut self, events: Arc<dyn AuthEvents>) -> Self {
        self.events = events;
        self
    }

    // ===== Auth session operations =====

    /// Authenticate and store the returned token pair.
    ///
    /// Goes through the bare dispatcher: a 401 here means bad credentials
    /// and surfaces as a plain status error, never a refresh attempt.
    pub async fn login(&self, credentials: &Credentials) -> Result<TokenPair, ApiError> {
        let body = to_body(credentials)?;
        let text = self
            .dispatch(&Method::POST, LOGIN_PATH, &[], Some(&body), None)
            .await?;
        let pair: TokenPair = parse_body(&text)?;

        self.tokens
            .store(&TokenSet::new(&pair.access, &pair.refresh));
        debug!(username = %credentials.username, "login succeeded");
        Ok(pair)
    }

    /// Drop the stored tokens. Local only; the backend keeps no session.
    pub fn logout(&self) {
        self.tokens.clear();
        debug!("logged out");
    }

    /// Fetch the authenticated user's record.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get(CURRENT_USER_PATH, &[]).await
    }

    /// Whether an access token is currently stored. Purely local; does not
    /// validate expiry against the server.
    pub fn is_authenticated(&self) -> bool {
        self.tokens.access_token().is_some()
    }

    // ===== Request pipeline =====

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        self.request(Method::GET, path, params, None).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, path, &[], Some(to_body(body)?))
            .await
    }

    /// POST without a body, for action endpoints like task completion.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::POST, path, &[], None).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::PUT, path, &[], Some(to_body(body)?))
            .await
    }

    /// DELETE, discarding whatever body the server sends back (some
    /// endpoints return 204, others a confirmation message).
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::DELETE, path, &[], None).await?;
        Ok(())
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let params: Vec<(String, String)> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let text = self.execute(method, path, &params, body.as_ref()).await?;
        parse_body(&text)
    }

    /// The recovery state machine. `retried` is the one-shot flag: a 401 on
    /// the first attempt moves to the refresh state; a 401 on the replayed
    /// request surfaces as-is.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        params: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<String, ApiError> {
        let mut bearer = self.tokens.access_token();
        let mut retried = false;

        loop {
            let result = self
                .dispatch(&method, path, params, body, bearer.as_deref())
                .await;

            match result {
                Err(ApiError::Status { status, .. })
                    if status == StatusCode::UNAUTHORIZED && !retried =>
                {
                    debug!(path, "access token rejected, attempting refresh");
                    retried = true;
                    match self.refresh_access_token().await {
                        Ok(access) => bearer = Some(access),
                        Err(cause) => {
                            warn!(path, error = %cause, "token refresh failed, clearing session");
                            self.tokens.clear();
                            self.events.on_auth_failure();
                            return Err(ApiError::RefreshFailed(Box::new(cause)));
                        }
                    }
                }
                other => return other,
            }
        }
    }

    /// Exchange the stored refresh token for a new access token.
    ///
    /// Issued as a bare dispatch: no bearer header, and a 401 from the
    /// refresh endpoint itself is a terminal failure, not a retry trigger.
    async fn refresh_access_token(&self) -> Result<String, ApiError> {
        let refresh = self
            .tokens
            .refresh_token()
            .ok_or(ApiError::MissingRefreshToken)?;

        let body = serde_json::json!({ "refresh": refresh });
        let text = self
            .dispatch(&Method::POST, REFRESH_PATH, &[], Some(&body), None)
            .await?;
        let response: RefreshResponse = parse_body(&text)?;

        self.tokens.rotate_access(&response.access);
        debug!("access token refreshed");
        Ok(response.access)
    }

    /// Single HTTP round trip: no token handling beyond attaching the given
    /// bearer, no retry. Non-2xx becomes `ApiError::Status`.
    async fn dispatch(
        &self,
        method: &Method,
        path: &str,
        params: &[(String, String)],
        body: Option<&Value>,
        bearer: Option<&str>,
    ) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method.clone(), &url);
        if !params.is_empty() {
            request = request.query(params);
        }
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(%method, url = %url, "sending request");
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(%method, url = %url, %status, "received response");

        if status.is_success() {
            Ok(text)
        } else {
            Err(ApiError::from_status(status, &text))
        }
    }
}

fn to_body<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|err| ApiError::InvalidRequest(err.to_string()))
}

/// Parse a response body, treating an empty body (204 No Content) as JSON
/// null so unit and Option targets deserialize cleanly.
fn parse_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let trimmed = text.trim();
    let source = if trimmed.is_empty() { "null" } else { trimmed };
    serde_json::from_str(source).map_err(|err| ApiError::InvalidResponse(err.to_string()))
}
