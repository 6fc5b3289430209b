//! Clients Page
//!
//! Client list with add/edit modal. Every mutation refetches the list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crm_core::domain::Client;
use crm_core::screens::ListScreen;

use crate::browser::{BrowserConfirm, SignalCell};
use crate::components::{ClientForm, Loader, Modal};
use crate::context::{use_app, ClientsList};

#[component]
pub fn ClientsPage() -> impl IntoView {
    let app = use_app();
    let screen: ClientsList =
        ListScreen::new(app.api.clients.clone(), (), SignalCell::default(), app.navigator());
    let state = screen.state().clone();

    let loader = screen.clone();
    Effect::new(move |_| {
        let screen = loader.clone();
        spawn_local(async move {
            let _ = screen.load().await;
        });
    });

    let add_screen = screen.clone();
    let rows_screen = screen.clone();
    let modal_screen = screen;
    // Form keystrokes touch the same state; memos keep the table from rebuilding
    let rows = {
        let state = state.clone();
        Memo::new(move |_| state.with(|s| (s.items.clone(), s.loaded)))
    };
    let error = {
        let state = state.clone();
        Memo::new(move |_| state.with(|s| s.error.clone()))
    };
    let modal_open = {
        let state = state.clone();
        Memo::new(move |_| state.with(|s| s.is_modal_open()))
    };
    let modal = state;

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Клиенты"</h1>
                <button class="primary-btn" on:click=move |_| add_screen.open_add()>
                    "+ Добавить клиента"
                </button>
            </div>

            {move || error.get().map(|e| view! {
                <p class="page-error">{e}</p>
            })}

            {move || {
                let (items, loaded) = rows.get();
                if !loaded {
                    view! { <Loader /> }.into_any()
                } else if items.is_empty() {
                    view! { <p class="empty">"Клиентов пока нет"</p> }.into_any()
                } else {
                    let screen = rows_screen.clone();
                    view! {
                        <table class="entity-table">
                            <thead>
                                <tr>
                                    <th>"Имя"</th>
                                    <th>"Контакт"</th>
                                    <th>"Заметки"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {items.into_iter().map(|client| client_row(screen.clone(), client)).collect_view()}
                            </tbody>
                        </table>
                    }.into_any()
                }
            }}

            <Show when=move || modal_open.get()>
                {
                    let screen = modal_screen.clone();
                    let state = modal.clone();
                    let close = screen.clone();
                    let title = Signal::derive(move || {
                        if state.with(|s| s.editing().is_some()) {
                            "Редактировать клиента".to_string()
                        } else {
                            "Новый клиент".to_string()
                        }
                    });
                    view! {
                        <Modal title=title on_close=move || close.close_modal()>
                            <ClientForm screen=screen />
                        </Modal>
                    }
                }
            </Show>
        </div>
    }
}

fn client_row(screen: ClientsList, client: Client) -> impl IntoView {
    let id = client.id;
    let (name, contact, notes) = (client.name.clone(), client.contact.clone(), client.notes.clone());
    let open = screen.clone();
    let edit = screen.clone();

    view! {
        <tr>
            <td>
                <a class="row-link" href="#" on:click=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    open.open_client(id);
                }>
                    {name}
                </a>
            </td>
            <td>{contact}</td>
            <td class="muted">{notes}</td>
            <td class="row-actions">
                <button on:click=move |_| edit.open_edit(&client)>"Изменить"</button>
                <button class="danger-btn" on:click=move |_| {
                    let screen = screen.clone();
                    spawn_local(async move {
                        let _ = screen.delete(id, &BrowserConfirm).await;
                    });
                }>
                    "Удалить"
                </button>
            </td>
        </tr>
    }
}
