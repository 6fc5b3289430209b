//! Register Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crm_core::screens::{RegisterScreen, RegisterState, StateCell};
use crm_core::Route;

use crate::browser::SignalCell;
use crate::components::NavLink;
use crate::context::use_app;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let app = use_app();
    let screen = RegisterScreen::new(
        app.api.auth.clone(),
        SignalCell::<RegisterState>::default(),
        app.navigator(),
    );
    let state = screen.state().clone();

    let field = {
        let state = state.clone();
        move |get: fn(&RegisterState) -> String| {
            let state = state.clone();
            move || state.with(|s| get(s))
        }
    };
    let setter = {
        let screen = screen.clone();
        move |set: fn(&mut RegisterState, String)| {
            let screen = screen.clone();
            move |ev: web_sys::Event| {
                let value = event_target_value(&ev);
                screen.edit(|s| set(s, value));
            }
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if screen.state().read(|s| s.loading) {
            return;
        }
        let screen = screen.clone();
        spawn_local(async move {
            let _ = screen.submit().await;
        });
    };
    let (error, loading) = (state.clone(), state);

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Регистрация"</h1>
                <input
                    type="text"
                    placeholder="Имя пользователя"
                    prop:value=field(|s| s.username.clone())
                    on:input=setter(|s, v| s.username = v)
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=field(|s| s.email.clone())
                    on:input=setter(|s, v| s.email = v)
                />
                <input
                    type="password"
                    placeholder="Пароль"
                    prop:value=field(|s| s.password.clone())
                    on:input=setter(|s, v| s.password = v)
                />
                {move || error.with(|s| s.error.clone()).map(|e| view! {
                    <p class="form-error">{e}</p>
                })}
                <button type="submit" disabled=move || loading.with(|s| s.loading)>
                    "Создать аккаунт"
                </button>
                <p class="auth-switch">
                    "Уже есть аккаунт? "
                    <NavLink route=Route::login()>"Войти"</NavLink>
                </p>
            </form>
        </div>
    }
}
