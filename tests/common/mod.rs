#![allow(dead_code)]

use std::sync::Arc;

use opsdesk::auth::MemoryTokenStore;
use opsdesk::{ApiClient, Config, TokenSet, TokenStore};
use wiremock::MockServer;

/// Build a client against a mock server with an empty token store.
pub fn anonymous_client(server: &MockServer) -> (ApiClient, Arc<MemoryTokenStore>) {
    let store = Arc::new(MemoryTokenStore::new());
    let client =
        ApiClient::new(&Config::new(server.uri()), store.clone()).expect("failed to build client");
    (client, store)
}

/// Build a client with tokens A1/R1 already stored, as after a login.
pub fn logged_in_client(server: &MockServer) -> (ApiClient, Arc<MemoryTokenStore>) {
    let (client, store) = anonymous_client(server);
    store.store(&TokenSet::new("A1", "R1"));
    (client, store)
}
