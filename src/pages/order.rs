//! Order Page
//!
//! Read-only view of one order.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crm_core::domain::Order;
use crm_core::screens::{DetailScreen, DetailState, OrderScreen};

use crate::browser::SignalCell;
use crate::components::{BackButton, Loader};
use crate::context::use_app;

#[component]
pub fn OrderPage(order_id: i64) -> impl IntoView {
    let app = use_app();
    let screen: OrderScreen<SignalCell<DetailState<Order>>> = DetailScreen::new(
        app.api.orders.clone(),
        order_id,
        SignalCell::new(DetailState { loading: true, ..Default::default() }),
        app.navigator(),
    );
    let state = screen.state().clone();

    Effect::new(move |_| {
        let screen = screen.clone();
        spawn_local(async move {
            screen.load().await;
        });
    });

    view! {
        <div class="page">
            <BackButton />
            {move || {
                let (order, loading) = state.with(|s| (s.item.clone(), s.loading));
                match order {
                    Some(order) => order_card(order).into_any(),
                    None if loading => view! { <Loader /> }.into_any(),
                    None => view! { <p class="empty">"Заказ не найден"</p> }.into_any(),
                }
            }}
        </div>
    }
}

fn order_card(order: Order) -> impl IntoView {
    view! {
        <div class="detail-card">
            <h1>{order.title}</h1>
            <dl>
                <dt>"Описание"</dt>
                <dd>{order.description}</dd>
                <dt>"Цена"</dt>
                <dd>{order.price.to_string()}</dd>
                <dt>"Статус"</dt>
                <dd>{order.status.label()}</dd>
                <dt>"Оплата"</dt>
                <dd>{if order.is_paid { "Оплачен" } else { "Не оплачен" }}</dd>
                <dt>"Заметки"</dt>
                <dd>{order.notes}</dd>
            </dl>
        </div>
    }
}
