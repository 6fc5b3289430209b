use leptos::prelude::*;

use crm_core::{messages, Route};

use crate::components::NavLink;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>{messages::NOT_FOUND}</p>
            <NavLink route=Route::Dashboard>"На главную"</NavLink>
        </div>
    }
}
