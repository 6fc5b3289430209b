//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crm_core::screens::{LoginScreen, LoginState, StateCell};
use crm_core::Route;

use crate::browser::SignalCell;
use crate::components::NavLink;
use crate::context::use_app;

#[component]
pub fn LoginPage(registered: bool) -> impl IntoView {
    let app = use_app();
    let screen = LoginScreen::new(
        app.api.auth.clone(),
        SignalCell::<LoginState>::default(),
        app.navigator(),
        registered,
    );
    let state = screen.state().clone();

    let on_submit = {
        let screen = screen.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            if screen.state().read(|s| s.loading) {
                return;
            }
            let screen = screen.clone();
            spawn_local(async move {
                let _ = screen.submit().await;
            });
        }
    };
    let email_screen = screen.clone();
    let password_screen = screen;

    let (email, password, notice, error, loading) =
        (state.clone(), state.clone(), state.clone(), state.clone(), state);

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Вход"</h1>
                {move || notice.with(|s| s.notice.clone()).map(|n| view! {
                    <p class="form-notice">{n}</p>
                })}
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.with(|s| s.email.clone())
                    on:input=move |ev| email_screen.set_email(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Пароль"
                    prop:value=move || password.with(|s| s.password.clone())
                    on:input=move |ev| password_screen.set_password(event_target_value(&ev))
                />
                {move || error.with(|s| s.error.clone()).map(|e| view! {
                    <p class="form-error">{e}</p>
                })}
                <button type="submit" disabled=move || loading.with(|s| s.loading)>
                    "Войти"
                </button>
                <p class="auth-switch">
                    "Нет аккаунта? "
                    <NavLink route=Route::Register>"Зарегистрироваться"</NavLink>
                </p>
            </form>
        </div>
    }
}
