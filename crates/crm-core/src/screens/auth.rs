//! Login and registration screens

use std::sync::Arc;

use super::state::StateCell;
use crate::gateway::AuthGateway;
use crate::http::ApiError;
use crate::messages;
use crate::router::{Navigator, Route};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub loading: bool,
    pub error: Option<String>,
    /// Informational banner (e.g. right after sign-up)
    pub notice: Option<String>,
}

#[derive(Clone)]
pub struct LoginScreen<C> {
    auth: AuthGateway,
    state: C,
    navigator: Arc<dyn Navigator>,
}

impl<C: StateCell<LoginState>> LoginScreen<C> {
    pub fn new(auth: AuthGateway, state: C, navigator: Arc<dyn Navigator>, registered: bool) -> Self {
        state.write(|s| s.notice = registered.then(|| messages::REGISTERED.to_string()));
        Self { auth, state, navigator }
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    pub fn set_email(&self, email: String) {
        self.state.write(|s| s.email = email);
    }

    pub fn set_password(&self, password: String) {
        self.state.write(|s| s.password = password);
    }

    pub async fn submit(&self) -> Result<(), ApiError> {
        let (email, password) = self.state.read(|s| (s.email.clone(), s.password.clone()));
        self.state.write(|s| {
            s.error = None;
            s.loading = true;
        });

        let result = self.auth.login(&email, &password).await;
        match result {
            Ok(()) => {
                self.state.write(|s| {
                    s.loading = false;
                    s.password.clear();
                });
                self.navigator.navigate(Route::Dashboard);
                Ok(())
            }
            Err(err) => {
                log::warn!("login: rejected: {}", err);
                self.state.write(|s| {
                    s.loading = false;
                    s.error = Some(messages::login_error(&err));
                });
                Err(err)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterState {
    pub username: String,
    pub email: String,
    pub password: String,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct RegisterScreen<C> {
    auth: AuthGateway,
    state: C,
    navigator: Arc<dyn Navigator>,
}

impl<C: StateCell<RegisterState>> RegisterScreen<C> {
    pub fn new(auth: AuthGateway, state: C, navigator: Arc<dyn Navigator>) -> Self {
        Self { auth, state, navigator }
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    pub fn edit(&self, f: impl FnOnce(&mut RegisterState)) {
        self.state.write(f);
    }

    pub async fn submit(&self) -> Result<(), ApiError> {
        let (username, email, password) =
            self.state.read(|s| (s.username.clone(), s.email.clone(), s.password.clone()));
        self.state.write(|s| {
            s.error = None;
            s.loading = true;
        });

        let result = self.auth.register(&username, &email, &password).await;
        self.state.write(|s| s.loading = false);
        match result {
            Ok(true) => {
                self.navigator.navigate(Route::Dashboard);
                Ok(())
            }
            Ok(false) => {
                self.navigator.navigate(Route::Login { registered: true });
                Ok(())
            }
            Err(err) => {
                log::warn!("register: rejected: {}", err);
                self.state.write(|s| s.error = Some(messages::register_error(&err)));
                Err(err)
            }
        }
    }
}
