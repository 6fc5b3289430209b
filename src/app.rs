//! Freelance CRM Frontend App
//!
//! Wires the API, the guarded router and browser history, then renders the
//! page for the current route.

use std::sync::Arc;

use leptos::ev;
use leptos::prelude::*;

use crm_core::{Api, ApiConfig, Route, Router, RouterState};

use crate::browser::{self, LocalStorage, SignalCell};
use crate::components::AppLayout;
use crate::context::AppContext;
use crate::pages::{
    ClientsPage, DashboardPage, LoginPage, NotFoundPage, OrderPage, OrdersPage, RegisterPage,
};

#[component]
pub fn App() -> impl IntoView {
    let api = Api::from_config(ApiConfig::from_env(), Arc::new(LocalStorage));
    let router_state = SignalCell::new(RouterState::default());
    let router = Arc::new(Router::new(api.session.clone(), router_state.clone()));

    // The address bar is the source of the first route
    router.restore(Route::parse(&browser::current_path()));

    let current = router_state.signal();
    let route = Memo::new(move |_| current.with(|s| s.current.clone()));
    provide_context(AppContext::new(api, router.clone(), route));

    // Back/forward: re-run the guard for the URL the browser moved to
    let history = router.clone();
    let _ = window_event_listener(ev::popstate, move |_| {
        history.restore(Route::parse(&browser::current_path()));
    });

    // App-initiated navigation lands in the address bar; a guard redirect
    // replaces the rejected URL so Back does not bounce into it again
    Effect::new(move |_| {
        let (path, from_history, redirected) =
            router_state.with(|s| (s.current.path(), s.from_history, s.redirected));
        if redirected {
            log::debug!("router: replace with {}", path);
            browser::replace_path(&path);
        } else if !from_history {
            log::debug!("router: push {}", path);
            browser::push_path(&path);
        }
    });

    view! {
        {move || match route.get() {
            Route::Login { registered } => view! { <LoginPage registered=registered /> }.into_any(),
            Route::Register => view! { <RegisterPage /> }.into_any(),
            Route::Dashboard => view! {
                <AppLayout><DashboardPage /></AppLayout>
            }.into_any(),
            Route::Clients => view! {
                <AppLayout><ClientsPage /></AppLayout>
            }.into_any(),
            Route::Orders { client_id } => view! {
                <AppLayout><OrdersPage client_id=client_id /></AppLayout>
            }.into_any(),
            Route::Order { order_id } => view! {
                <AppLayout><OrderPage order_id=order_id /></AppLayout>
            }.into_any(),
            Route::NotFound => view! { <NotFoundPage /> }.into_any(),
        }}
    }
}
