use leptos::prelude::*;

use crate::browser;

/// History back; `popstate` then restores the previous route
#[component]
pub fn BackButton() -> impl IntoView {
    view! {
        <button class="back-btn" on:click=move |_| browser::go_back()>
            "← Назад"
        </button>
    }
}
