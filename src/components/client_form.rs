//! Client Form Component
//!
//! Add/edit form bound to the clients screen's draft.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crm_core::domain::ClientDraft;

use crate::context::ClientsList;

#[component]
pub fn ClientForm(screen: ClientsList) -> impl IntoView {
    let state = screen.state().clone();

    let value = {
        let state = state.clone();
        move |get: fn(&ClientDraft) -> String| {
            let state = state.clone();
            move || state.with(|s| get(&s.form))
        }
    };
    let setter = {
        let screen = screen.clone();
        move |set: fn(&mut ClientDraft, String)| {
            let screen = screen.clone();
            move |ev: web_sys::Event| screen.edit_form(|f| set(f, event_target_value(&ev)))
        }
    };

    let error_state = state.clone();
    let saving_state = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let screen = screen.clone();
        spawn_local(async move {
            let _ = screen.submit().await;
        });
    };

    view! {
        <form class="entity-form" on:submit=on_submit>
            <label>
                "Имя"
                <input
                    type="text"
                    prop:value=value(|d| d.name.clone())
                    on:input=setter(|d, v| d.name = v)
                />
            </label>
            <label>
                "Контакт"
                <input
                    type="text"
                    placeholder="Телефон, email, Telegram..."
                    prop:value=value(|d| d.contact.clone())
                    on:input=setter(|d, v| d.contact = v)
                />
            </label>
            <label>
                "Заметки"
                <textarea
                    prop:value=value(|d| d.notes.clone())
                    on:input=setter(|d, v| d.notes = v)
                ></textarea>
            </label>
            {move || error_state.with(|s| s.form_error.clone()).map(|e| view! {
                <p class="form-error">{e}</p>
            })}
            <button type="submit" disabled=move || saving_state.with(|s| s.saving)>
                "Сохранить"
            </button>
        </form>
    }
}
