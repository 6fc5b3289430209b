//! Orders Page
//!
//! One client's header and order list. The client id comes from the route.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crm_core::domain::{Client, Order};
use crm_core::screens::{DetailState, ListStateOf, OrdersScreen};
use crm_core::OrdersGateway;

use crate::browser::{BrowserConfirm, SignalCell};
use crate::components::{BackButton, Loader, Modal, OrderForm};
use crate::context::{use_app, OrdersList};

type OrdersView = OrdersScreen<SignalCell<ListStateOf<OrdersGateway>>, SignalCell<DetailState<Client>>>;

#[component]
pub fn OrdersPage(client_id: i64) -> impl IntoView {
    let app = use_app();
    let screen: OrdersView = OrdersScreen::new(
        &app.api,
        client_id,
        SignalCell::default(),
        SignalCell::new(DetailState { loading: true, ..Default::default() }),
        app.navigator(),
    );
    let header = screen.client.state().clone();
    let state = screen.orders.state().clone();

    let loader = screen.clone();
    Effect::new(move |_| {
        let screen = loader.clone();
        spawn_local(async move {
            screen.load().await;
        });
    });

    let add_screen = screen.orders.clone();
    let modal_screen = screen.orders.clone();
    let rows_screen = screen;
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
            <BackButton />
            <div class="page-header">
                {move || {
                    let (client, loading, not_found) =
                        header.with(|s| (s.item.clone(), s.loading, s.not_found));
                    match client {
                        Some(client) => view! {
                            <div>
                                <h1>{client.name}</h1>
                                <p class="muted">{client.contact}</p>
                            </div>
                        }.into_any(),
                        None if not_found => view! { <h1>"Клиент не найден"</h1> }.into_any(),
                        None if loading => view! { <Loader /> }.into_any(),
                        None => view! { <h1>"Заказы"</h1> }.into_any(),
                    }
                }}
                <button class="primary-btn" on:click=move |_| add_screen.open_add()>
                    "+ Добавить заказ"
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
                    view! { <p class="empty">"Заказов пока нет"</p> }.into_any()
                } else {
                    let screen = rows_screen.clone();
                    view! {
                        <table class="entity-table">
                            <thead>
                                <tr>
                                    <th>"Название"</th>
                                    <th>"Цена"</th>
                                    <th>"Статус"</th>
                                    <th>"Оплата"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {items.into_iter().map(|order| order_row(&screen, order)).collect_view()}
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
                            "Редактировать заказ".to_string()
                        } else {
                            "Новый заказ".to_string()
                        }
                    });
                    view! {
                        <Modal title=title on_close=move || close.close_modal()>
                            <OrderForm screen=screen />
                        </Modal>
                    }
                }
            </Show>
        </div>
    }
}

fn order_row(screen: &OrdersView, order: Order) -> impl IntoView {
    let id = order.id;
    let title = order.title.clone();
    let price = order.price.to_string();
    let status = order.status.label();
    let paid = if order.is_paid { "Оплачен" } else { "Не оплачен" };
    let navigate = screen.clone();
    let edit: OrdersList = screen.orders.clone();
    let remove: OrdersList = screen.orders.clone();

    view! {
        <tr>
            <td>
                <a class="row-link" href="#" on:click=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    navigate.open_order(id);
                }>
                    {title}
                </a>
            </td>
            <td>{price}</td>
            <td><span class="status-badge">{status}</span></td>
            <td>{paid}</td>
            <td class="row-actions">
                <button on:click=move |_| edit.open_edit(&order)>"Изменить"</button>
                <button class="danger-btn" on:click=move |_| {
                    let screen = remove.clone();
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
