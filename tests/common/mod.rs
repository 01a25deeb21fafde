#![allow(dead_code)]

use axum_test::TestServer;
use server::core::AppState;
use server::entities::UserSummary;
use server::repositories::MemoryStore;
use std::sync::Arc;

pub const JWT_SECRET: &str = "ilmiobellissimosegretochevaassolutamentecambiato";

/// Utenti presenti in ogni store di test
pub fn test_users() -> Vec<UserSummary> {
    [("alice", "Alice", "Rossi"), ("bob", "Bob", "Bianchi"), ("charlie", "Charlie", "Verdi")]
        .into_iter()
        .map(|(username, first_name, last_name)| UserSummary {
            username: username.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            phone: "+39 333 0000000".to_string(),
        })
        .collect()
}

/// Crea un AppState per i test sopra un `MemoryStore`
///
/// # Returns
/// Lo stato e lo store, per ispezionare le righe salvate
pub fn create_test_state() -> (Arc<AppState>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::with_users(test_users()));
    let state = AppState::with_stores(store.clone(), store.clone(), JWT_SECRET.to_string());
    (Arc::new(state), store)
}

/// Crea un TestServer per i test
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = server::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Genera un JWT token per testing
///
/// # Returns
/// Token JWT valido per 24 ore
pub fn create_test_jwt(username: &str, jwt_secret: &str) -> String {
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};
    use server::core::Claims;

    let now = Utc::now();
    let expiration = now
        .checked_add_signed(Duration::hours(24))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        username: username.to_string(),
        exp: expiration,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .expect("Failed to create JWT token")
}

/// Valore dell'header Authorization per `username`
pub fn bearer(username: &str) -> String {
    format!("Bearer {}", create_test_jwt(username, JWT_SECRET))
}
