//! In-app link that goes through the guarded router instead of a page load

use leptos::prelude::*;

use crm_core::Route;

use crate::context::use_app;

#[component]
pub fn NavLink(
    route: Route,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let base = class;
    let app = use_app();
    let href = route.path();
    let current = app.route;
    let target = route.clone();
    let class = move || {
        if current.get() == route {
            format!("{} active", base)
        } else {
            base.clone()
        }
    };

    view! {
        <a
            href=href
            class=class
            on:click=move |ev: web_sys::MouseEvent| {
                ev.prevent_default();
                app.navigate(target.clone());
            }
        >
            {children()}
        </a>
    }
}
