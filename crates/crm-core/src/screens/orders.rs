//! Orders of one client, and the single order page

use std::sync::Arc;

use super::detail::{DetailScreen, DetailState};
use super::list::{ListScreen, ListStateOf};
use super::state::StateCell;
use crate::domain::Client;
use crate::gateway::{Api, ClientsGateway, OrdersGateway};
use crate::router::{Navigator, Route};

pub type OrderScreen<C> = DetailScreen<OrdersGateway, C>;

/// Client header plus that client's order list
#[derive(Clone)]
pub struct OrdersScreen<L, D> {
    pub client: DetailScreen<ClientsGateway, D>,
    pub orders: ListScreen<OrdersGateway, L>,
}

impl<L, D> OrdersScreen<L, D>
where
    L: StateCell<ListStateOf<OrdersGateway>>,
    D: StateCell<DetailState<Client>>,
{
    pub fn new(
        api: &Api,
        client_id: i64,
        orders_state: L,
        client_state: D,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            client: DetailScreen::new(api.clients.clone(), client_id, client_state, navigator.clone()),
            orders: ListScreen::new(api.orders.clone(), client_id, orders_state, navigator),
        }
    }

    pub fn client_id(&self) -> i64 {
        *self.orders.scope()
    }

    /// Fetch the header and the list side by side
    pub async fn load(&self) {
        let ((), orders) = futures::join!(self.client.load(), self.orders.load());
        if let Err(err) = orders {
            log::warn!("orders: list for client {} failed: {}", self.client_id(), err);
        }
    }

    pub fn open_order(&self, order_id: i64) {
        self.orders.navigate(Route::Order { order_id });
    }
}
