//! App Shell
//!
//! Sidebar navigation plus logout around every authenticated page.

use leptos::prelude::*;

use crm_core::Route;

use crate::components::NavLink;
use crate::context::use_app;

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let app = use_app();

    view! {
        <div class="app-layout">
            <aside class="sidebar">
                <div class="sidebar-title">"Freelance CRM"</div>
                <nav class="sidebar-nav">
                    <NavLink route=Route::Dashboard class="nav-item">"Главная"</NavLink>
                    <NavLink route=Route::Clients class="nav-item">"Клиенты"</NavLink>
                </nav>
                <button class="logout-btn" on:click=move |_| app.logout()>
                    "Выйти"
                </button>
            </aside>
            <main class="main-content">
                {children()}
            </main>
        </div>
    }
}
