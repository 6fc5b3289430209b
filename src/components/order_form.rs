//! Order Form Component
//!
//! Add/edit form bound to the orders screen's draft. Price is sent as
//! typed; the server decides whether it is acceptable.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crm_core::domain::{OrderDraft, OrderStatus};

use crate::context::OrdersList;

#[component]
pub fn OrderForm(screen: OrdersList) -> impl IntoView {
    let state = screen.state().clone();

    let value = {
        let state = state.clone();
        move |get: fn(&OrderDraft) -> String| {
            let state = state.clone();
            move || state.with(|s| get(&s.form))
        }
    };
    let setter = {
        let screen = screen.clone();
        move |set: fn(&mut OrderDraft, String)| {
            let screen = screen.clone();
            move |ev: web_sys::Event| screen.edit_form(|f| set(f, event_target_value(&ev)))
        }
    };

    let status_state = state.clone();
    let paid_state = state.clone();
    let paid_screen = screen.clone();
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
                "Название"
                <input
                    type="text"
                    prop:value=value(|d| d.title.clone())
                    on:input=setter(|d, v| d.title = v)
                />
            </label>
            <label>
                "Описание"
                <textarea
                    prop:value=value(|d| d.description.clone())
                    on:input=setter(|d, v| d.description = v)
                ></textarea>
            </label>
            // Text input: a number input reports "" for a lone "-"
            <label>
                "Цена"
                <input
                    type="text"
                    inputmode="numeric"
                    prop:value=value(|d| d.price_input())
                    on:input=setter(|d, v| d.set_price_text(&v))
                />
            </label>
            <label>
                "Статус"
                <select on:change=setter(|d, v| {
                    if let Some(status) = OrderStatus::from_str(&v) {
                        d.status = status;
                    }
                })>
                    {OrderStatus::ALL.into_iter().map(|status| {
                        let state = status_state.clone();
                        view! {
                            <option
                                value=status.as_str()
                                selected=move || state.with(|s| s.form.status == status)
                            >
                                {status.label()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </label>
            <label class="checkbox-label">
                <input
                    type="checkbox"
                    prop:checked=move || paid_state.with(|s| s.form.is_paid)
                    on:change=move |ev| paid_screen.edit_form(|f| f.is_paid = event_target_checked(&ev))
                />
                "Оплачен"
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
