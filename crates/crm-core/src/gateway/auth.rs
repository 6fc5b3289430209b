//! Auth Gateway
//!
//! Login and register are the only calls that write the session.

use serde::{Deserialize, Serialize};

use crate::domain::{TokenResponse, User};
use crate::http::{ApiError, ApiResult, HttpClient};
use crate::session::SessionStore;

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterArgs<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct RegisterReply {
    #[serde(default)]
    access_token: Option<String>,
}

#[derive(Clone)]
pub struct AuthGateway {
    http: HttpClient,
}

impl AuthGateway {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn session(&self) -> &SessionStore {
        self.http.session()
    }

    /// `POST /auth/login`; persists the returned token
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<()> {
        let response = self.http.post("/auth/login", &LoginArgs { email, password }).await?;
        let token: TokenResponse = response.json()?;
        if token.access_token.is_empty() {
            return Err(ApiError::Decode("empty access_token".to_string()));
        }
        self.session().set_token(&token.access_token);
        Ok(())
    }

    /// `POST /auth/register`.
    ///
    /// Returns `true` when the server also issued a token (the session is
    /// then started); otherwise the user still has to log in.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> ApiResult<bool> {
        let response = self
            .http
            .post("/auth/register", &RegisterArgs { username, email, password })
            .await?;
        let reply = response.json::<RegisterReply>().unwrap_or_default();
        match reply.access_token.filter(|t| !t.is_empty()) {
            Some(token) => {
                self.session().set_token(&token);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// `GET /user/me`
    pub async fn me(&self) -> ApiResult<User> {
        self.http.get("/user/me").await?.json()
    }

    /// Drop the session. Safe to call when already logged out.
    pub fn logout(&self) {
        self.session().clear_token();
    }
}
