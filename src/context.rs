//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crm_core::screens::{ListScreen, ListStateOf};
use crm_core::{Api, ClientsGateway, Navigator, OrdersGateway, Route, Router, RouterState};

use crate::browser::SignalCell;

pub type AppRouter = Router<SignalCell<RouterState>>;

/// App-wide services provided via context
#[derive(Clone)]
pub struct AppContext {
    pub api: Api,
    pub router: Arc<AppRouter>,
    /// Currently rendered route, tracked
    pub route: Memo<Route>,
}

impl AppContext {
    pub fn new(api: Api, router: Arc<AppRouter>, route: Memo<Route>) -> Self {
        Self { api, router, route }
    }

    pub fn navigator(&self) -> Arc<dyn Navigator> {
        self.router.clone()
    }

    pub fn navigate(&self, route: Route) {
        self.router.navigate_to(route);
    }

    pub fn logout(&self) {
        self.api.auth.logout();
        self.router.navigate_to(Route::login());
    }
}

pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// Screen flavours backed by signals
pub type ClientsList = ListScreen<ClientsGateway, SignalCell<ListStateOf<ClientsGateway>>>;
pub type OrdersList = ListScreen<OrdersGateway, SignalCell<ListStateOf<OrdersGateway>>>;
