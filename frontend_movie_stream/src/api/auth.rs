// frontend_movie_stream/src/api/auth.rs
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::api::client::PublicClient;
use crate::api::error::ApiError;

const LOGIN_PATH: &str = "/login";
const REGISTER_PATH: &str = "/register";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// The signed-in user as returned by `/login`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct AuthSession {
    pub token: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// In-memory holder of the current session. Clones share the same slot.
#[derive(Clone, Default)]
pub struct AuthStore {
    session: Rc<RefCell<Option<AuthSession>>>,
}

impl AuthStore {
    pub fn get_session(&self) -> Option<AuthSession> {
        self.session.borrow().clone()
    }

    pub fn set_session(&self, session: AuthSession) {
        *self.session.borrow_mut() = Some(session);
    }

    pub fn clear_session(&self) {
        self.session.borrow_mut().take();
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.borrow().is_some()
    }
}

impl PartialEq for AuthStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session)
    }
}

impl fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

/// Log in with email and password. Does not touch the store; the caller decides.
pub async fn login(client: &PublicClient, credentials: &LoginRequest) -> Result<AuthSession, ApiError> {
    let session: AuthSession = client.post_json(LOGIN_PATH, credentials).await?;
    validate_session(session)
}

pub async fn register(client: &PublicClient, request: &RegisterRequest) -> Result<(), ApiError> {
    client.post_action(REGISTER_PATH, request).await
}

fn validate_session(session: AuthSession) -> Result<AuthSession, ApiError> {
    if session.token.trim().is_empty() {
        return Err(ApiError::MissingToken);
    }
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(token: &str) -> AuthSession {
        AuthSession {
            token: token.to_owned(),
            first_name: "Ada".to_owned(),
            ..AuthSession::default()
        }
    }

    #[test]
    fn store_starts_empty() {
        let store = AuthStore::default();
        assert_eq!(store.get_session(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn set_session_is_visible_through_every_clone() {
        let store = AuthStore::default();
        let reader = store.clone();

        store.set_session(session("abc"));

        assert_eq!(reader.get_session().map(|s| s.token), Some("abc".to_owned()));
        assert_eq!(reader, store);
    }

    #[test]
    fn repeated_reads_return_the_same_session() {
        let store = AuthStore::default();
        store.set_session(session("abc"));
        assert_eq!(store.get_session(), store.get_session());
    }

    #[test]
    fn new_session_replaces_the_old_one() {
        let store = AuthStore::default();
        store.set_session(session("first"));
        store.set_session(session("second"));
        assert_eq!(store.get_session().map(|s| s.token), Some("second".to_owned()));
    }

    #[test]
    fn clear_session_logs_out() {
        let store = AuthStore::default();
        store.set_session(session("abc"));
        store.clear_session();
        assert_eq!(store.get_session(), None);
    }

    #[test]
    fn separate_stores_are_not_equal() {
        assert_ne!(AuthStore::default(), AuthStore::default());
    }

    #[test]
    fn decodes_login_response_with_extra_fields() {
        let json = r#"{
            "user_id": "u-1",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "role": "USER",
            "token": "abc",
            "refresh_token": "ignored",
            "favourite_genres": []
        }"#;
        let session: AuthSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.token, "abc");
        assert_eq!(session.first_name, "Ada");
        assert_eq!(session.user_id.as_deref(), Some("u-1"));
    }

    #[test]
    fn empty_token_is_rejected() {
        assert_eq!(validate_session(session("  ")), Err(ApiError::MissingToken));
        assert!(validate_session(session("abc")).is_ok());
    }

    #[test]
    fn login_request_uses_wire_field_names() {
        let body = serde_json::to_value(LoginRequest {
            email: "ada@example.com".into(),
            password: "secret".into(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "email": "ada@example.com", "password": "secret" }));
    }
}
