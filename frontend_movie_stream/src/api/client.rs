// frontend_movie_stream/src/api/client.rs
use gloo::net::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::api::auth::{AuthSession, AuthStore};
use crate::api::error::ApiError;

pub const AUTHORIZATION: &str = "Authorization";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request described as plain data, turned into a browser request only at dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post_json<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        let path = path.into();
        let body = serde_json::to_string(body).map_err(|e| ApiError::Encode {
            operation: path.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            method: Method::Post,
            path,
            headers: vec![("Content-Type".to_owned(), "application/json".to_owned())],
            body: Some(body),
        })
    }

    /// Sets a header, replacing any existing value (names compare case-insensitively).
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value.into()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn url(&self, base_url: &str) -> String {
        join_url(base_url, &self.path)
    }
}

/// Adds `Authorization: Bearer <token>` when a session exists, otherwise leaves the request alone.
pub fn attach_auth(request: ApiRequest, session: Option<&AuthSession>) -> ApiRequest {
    match session {
        Some(session) => request.with_header(AUTHORIZATION, format!("Bearer {}", session.token)),
        None => request,
    }
}

pub fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Client for endpoints that never carry credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicClient {
    base_url: String,
}

impl PublicClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = dispatch(&self.base_url, ApiRequest::get(path)).await?;
        decode_json(response, path).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = dispatch(&self.base_url, ApiRequest::post_json(path, body)?).await?;
        decode_json(response, path).await
    }

    /// POST where only the status matters.
    pub async fn post_action<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        dispatch(&self.base_url, ApiRequest::post_json(path, body)?).await?;
        Ok(())
    }
}

/// Client that consults the auth store on every request it sends.
#[derive(Debug, Clone, PartialEq)]
pub struct PrivateClient {
    base_url: String,
    auth: AuthStore,
}

impl PrivateClient {
    pub fn new(base_url: impl Into<String>, auth: AuthStore) -> Self {
        Self {
            base_url: base_url.into(),
            auth,
        }
    }

    /// Runs right before dispatch, so a session set after construction is still picked up.
    pub fn prepare(&self, request: ApiRequest) -> ApiRequest {
        attach_auth(request, self.auth.get_session().as_ref())
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.prepare(ApiRequest::get(path));
        let response = dispatch(&self.base_url, request).await?;
        decode_json(response, path).await
    }
}

async fn dispatch(base_url: &str, request: ApiRequest) -> Result<Response, ApiError> {
    let url = request.url(base_url);
    let operation = request.path.clone();

    let mut builder = match request.method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
    };
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }

    let sent = match request.body {
        Some(body) => {
            let req = builder.body(body).map_err(|e| ApiError::Request {
                operation: operation.clone(),
                reason: e.to_string(),
            })?;
            req.send().await
        }
        None => builder.send().await,
    };

    let response = sent.map_err(|e| ApiError::Request {
        operation: operation.clone(),
        reason: e.to_string(),
    })?;

    if !response.ok() {
        return Err(ApiError::Status {
            operation,
            status: response.status(),
        });
    }

    Ok(response)
}

async fn decode_json<T: DeserializeOwned>(response: Response, operation: &str) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| ApiError::Decode {
        operation: operation.to_owned(),
        reason: e.to_string(),
    })
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
    fn attaches_bearer_token_when_session_present() {
        let request = attach_auth(ApiRequest::get("/recommendedmovies"), Some(&session("abc")));
        assert_eq!(request.header(AUTHORIZATION), Some("Bearer abc"));
    }

    #[test]
    fn leaves_request_untouched_without_session() {
        let original = ApiRequest::get("/recommendedmovies");
        let request = attach_auth(original.clone(), None);
        assert_eq!(request, original);
        assert_eq!(request.header(AUTHORIZATION), None);
    }

    #[test]
    fn replaces_existing_authorization_header() {
        let request = ApiRequest::get("/recommendedmovies").with_header("authorization", "Bearer stale");
        let request = attach_auth(request, Some(&session("fresh")));

        let auth_headers: Vec<_> = request
            .headers
            .iter()
            .filter(|(n, _)| n.eq_ignore_ascii_case(AUTHORIZATION))
            .collect();
        assert_eq!(auth_headers.len(), 1);
        assert_eq!(request.header(AUTHORIZATION), Some("Bearer fresh"));
    }

    #[test]
    fn private_client_reads_session_at_request_time() {
        let store = AuthStore::default();
        let client = PrivateClient::new("http://api.test", store.clone());

        let before = client.prepare(ApiRequest::get("/recommendedmovies"));
        assert_eq!(before.header(AUTHORIZATION), None);

        store.set_session(session("abc"));
        let after = client.prepare(ApiRequest::get("/recommendedmovies"));
        assert_eq!(after.header(AUTHORIZATION), Some("Bearer abc"));

        store.clear_session();
        let cleared = client.prepare(ApiRequest::get("/recommendedmovies"));
        assert_eq!(cleared.header(AUTHORIZATION), None);
    }

    #[test]
    fn post_json_sets_body_and_content_type() {
        let request = ApiRequest::post_json("/login", &serde_json::json!({ "email": "a@b.c" })).unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.body.as_deref(), Some(r#"{"email":"a@b.c"}"#));
    }

    #[test]
    fn joins_base_and_path_with_single_slash() {
        assert_eq!(join_url("http://api.test/", "/movies"), "http://api.test/movies");
        assert_eq!(join_url("http://api.test", "movies"), "http://api.test/movies");
        assert_eq!(ApiRequest::get("/movies").url("http://api.test/v1"), "http://api.test/v1/movies");
    }
}
