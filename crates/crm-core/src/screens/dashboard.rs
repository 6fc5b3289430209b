//! Dashboard: "who am I" plus logout

use std::sync::Arc;

use super::state::StateCell;
use crate::domain::User;
use crate::gateway::AuthGateway;
use crate::http::ApiError;
use crate::router::{Navigator, Route};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub user: Option<User>,
}

#[derive(Clone)]
pub struct DashboardScreen<C> {
    auth: AuthGateway,
    state: C,
    navigator: Arc<dyn Navigator>,
}

impl<C: StateCell<DashboardState>> DashboardScreen<C> {
    pub fn new(auth: AuthGateway, state: C, navigator: Arc<dyn Navigator>) -> Self {
        Self { auth, state, navigator }
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    /// Any failure here is fatal to the session
    pub async fn load(&self) -> Result<(), ApiError> {
        match self.auth.me().await {
            Ok(user) => {
                self.state.write(|s| s.user = Some(user));
                Ok(())
            }
            Err(err) => {
                log::warn!("dashboard: /user/me failed, ending session: {}", err);
                self.state.write(|s| s.user = None);
                self.auth.logout();
                self.navigator.expire_session();
                Err(err)
            }
        }
    }

    pub fn logout(&self) {
        self.auth.logout();
        self.navigator.navigate(Route::login());
    }
}
