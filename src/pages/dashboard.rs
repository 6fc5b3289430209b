//! Dashboard Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crm_core::screens::{DashboardScreen, DashboardState};
use crm_core::Route;

use crate::browser::SignalCell;
use crate::components::{Loader, NavLink};
use crate::context::use_app;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let app = use_app();
    let screen = DashboardScreen::new(
        app.api.auth.clone(),
        SignalCell::<DashboardState>::default(),
        app.navigator(),
    );
    let state = screen.state().clone();

    // Load the current user on mount
    let loader = screen.clone();
    Effect::new(move |_| {
        let screen = loader.clone();
        spawn_local(async move {
            let _ = screen.load().await;
        });
    });

    view! {
        <div class="dashboard">
            {move || match state.with(|s| s.user.clone()) {
                Some(user) => view! {
                    <div class="dashboard-card">
                        <h1>"Здравствуйте, " {user.display_name().to_string()}</h1>
                        <p class="muted">{user.email.clone()}</p>
                        <NavLink route=Route::Clients class="primary-btn">"Перейти к клиентам"</NavLink>
                    </div>
                }.into_any(),
                None => view! { <Loader /> }.into_any(),
            }}
            <button class="logout-btn" on:click=move |_| screen.logout()>
                "Выйти"
            </button>
        </div>
    }
}
