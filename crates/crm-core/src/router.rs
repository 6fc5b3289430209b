//! Routes and the session guard
//!
//! The guard is a two-state machine keyed on token presence. It is evaluated
//! on every navigation; nothing about the decision is cached.

use crate::screens::StateCell;
use crate::session::SessionStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `registered` shows the "account created" notice after sign-up
    Login { registered: bool },
    Register,
    Dashboard,
    Clients,
    Orders { client_id: i64 },
    Order { order_id: i64 },
    NotFound,
}

impl Route {
    pub fn login() -> Self {
        Route::Login { registered: false }
    }

    /// Map a URL path (query and fragment ignored) to a route
    pub fn parse(path: &str) -> Route {
        let path = path.split(&['?', '#'][..]).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Dashboard,
            ["auth", "login"] => Route::login(),
            ["auth", "register"] => Route::Register,
            ["clients"] => Route::Clients,
            ["orders", "all", id] => id
                .parse()
                .map(|client_id| Route::Orders { client_id })
                .unwrap_or(Route::NotFound),
            ["orders", "get", id] => id
                .parse()
                .map(|order_id| Route::Order { order_id })
                .unwrap_or(Route::NotFound),
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login { .. } => "/auth/login".to_string(),
            Route::Register => "/auth/register".to_string(),
            Route::Dashboard => "/".to_string(),
            Route::Clients => "/clients".to_string(),
            Route::Orders { client_id } => format!("/orders/all/{}", client_id),
            Route::Order { order_id } => format!("/orders/get/{}", order_id),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Routes that need a session to render
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Route::Dashboard | Route::Clients | Route::Orders { .. } | Route::Order { .. }
        )
    }
}

/// Resolve the route that may actually render right now
pub fn guard(route: Route, session: &SessionStore) -> Route {
    if route.is_protected() && !session.is_authenticated() {
        Route::login()
    } else {
        route
    }
}

/// What screens use to move the user around
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);

    /// Evict the token and force the login screen
    fn expire_session(&self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterState {
    pub current: Route,
    /// Set when the route came from browser history, so the URL must not be pushed again
    pub from_history: bool,
    /// Set when the guard swapped the requested route for login; the URL
    /// should replace the rejected entry instead of stacking on top of it
    pub redirected: bool,
}

impl Default for RouterState {
    fn default() -> Self {
        Self {
            current: Route::login(),
            from_history: true,
            redirected: false,
        }
    }
}

#[derive(Clone)]
pub struct Router<C> {
    session: SessionStore,
    state: C,
}

impl<C: StateCell<RouterState>> Router<C> {
    pub fn new(session: SessionStore, state: C) -> Self {
        Self { session, state }
    }

    pub fn current(&self) -> Route {
        self.state.read(|s| s.current.clone())
    }

    /// Forward navigation initiated by the app
    pub fn navigate_to(&self, route: Route) -> Route {
        self.apply(route, false)
    }

    /// Navigation that came from the address bar or history (back/forward)
    pub fn restore(&self, route: Route) -> Route {
        self.apply(route, true)
    }

    fn apply(&self, requested: Route, from_history: bool) -> Route {
        let resolved = guard(requested.clone(), &self.session);
        let redirected = resolved != requested;
        if redirected {
            log::info!("router: {} requires a session, redirecting to login", requested.path());
        }
        self.state.write(|s| {
            s.current = resolved.clone();
            s.from_history = from_history && !redirected;
            s.redirected = redirected;
        });
        resolved
    }
}

impl<C: StateCell<RouterState> + Send + Sync> Navigator for Router<C> {
    fn navigate(&self, route: Route) {
        self.navigate_to(route);
    }

    fn expire_session(&self) {
        self.session.clear_token();
        self.navigate_to(Route::login());
    }
}
