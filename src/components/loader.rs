use leptos::prelude::*;

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader">
            <div class="spinner"></div>
            <span>"Загрузка..."</span>
        </div>
    }
}
