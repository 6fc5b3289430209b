//! Bearer-attaching HTTP client

use std::sync::Arc;

use serde::Serialize;

use super::error::{ApiError, ApiResult};
use super::transport::{HttpRequest, HttpResponse, HttpTransport, Method};
use crate::session::SessionStore;

/// Outbound adapter shared by all gateways.
///
/// The token is read from the session right before each send and attached to
/// every request when present. No retries, no token refresh.
#[derive(Clone)]
pub struct HttpClient {
    transport: Arc<dyn HttpTransport>,
    session: SessionStore,
}

impl HttpClient {
    pub fn new(transport: Arc<dyn HttpTransport>, session: SessionStore) -> Self {
        Self { transport, session }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub async fn get(&self, path: &str) -> ApiResult<HttpResponse> {
        self.send(Method::Get, path, None).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<HttpResponse> {
        let body = encode(body)?;
        self.send(Method::Post, path, Some(body)).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<HttpResponse> {
        let body = encode(body)?;
        self.send(Method::Put, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> ApiResult<HttpResponse> {
        self.send(Method::Delete, path, None).await
    }

    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> ApiResult<HttpResponse> {
        let request = self.prepare(method, path, body);
        log::debug!("http: {} {}", method, path);

        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("http: {} {} failed: {}", method, path, e);
            e
        })?;

        if response.is_success() {
            Ok(response)
        } else {
            log::warn!("http: {} {} -> {}", method, path, response.status);
            Err(ApiError::from_response(&response))
        }
    }

    /// Pre-send hook: headers plus the blanket bearer credential
    fn prepare(&self, method: Method, path: &str, body: Option<serde_json::Value>) -> HttpRequest {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        HttpRequest {
            method,
            path: path.to_string(),
            headers,
            body,
        }
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> ApiResult<serde_json::Value> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBackend;
    use serde_json::json;

    fn client_with(backend: &Arc<FakeBackend>) -> HttpClient {
        HttpClient::new(backend.clone(), SessionStore::in_memory())
    }

    #[tokio::test]
    async fn test_bearer_attached_when_token_present() {
        let backend = Arc::new(FakeBackend::new());
        let http = client_with(&backend);
        http.session().set_token("T");

        let _ = http.get("/clients/all").await;

        let sent = backend.last_request().expect("request recorded");
        assert_eq!(sent.header("authorization"), Some("Bearer T"));
    }

    #[tokio::test]
    async fn test_bearer_attached_even_to_public_endpoints() {
        let backend = Arc::new(FakeBackend::new());
        let http = client_with(&backend);
        http.session().set_token("T");

        let _ = http.post("/auth/login", &json!({"email": "a@b.com", "password": "x"})).await;

        let sent = backend.last_request().expect("request recorded");
        assert_eq!(sent.header("Authorization"), Some("Bearer T"));
        assert_eq!(sent.header("Content-Type"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_no_header_without_token() {
        let backend = Arc::new(FakeBackend::new());
        let http = client_with(&backend);

        let _ = http.get("/user/me").await;

        let sent = backend.last_request().expect("request recorded");
        assert_eq!(sent.header("Authorization"), None);
    }

    #[tokio::test]
    async fn test_non_success_becomes_error() {
        let backend = Arc::new(FakeBackend::new());
        let http = client_with(&backend);

        let err = http.get("/user/me").await.unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_offline_is_network_error() {
        let backend = Arc::new(FakeBackend::new());
        backend.set_offline(true);
        let http = client_with(&backend);

        let err = http.get("/clients/all").await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
