//! Clients screen

use super::list::{ListScreen, ListStateOf};
use super::state::StateCell;
use crate::gateway::ClientsGateway;
use crate::router::Route;

pub type ClientsScreen<C> = ListScreen<ClientsGateway, C>;

impl<C: StateCell<ListStateOf<ClientsGateway>>> ListScreen<ClientsGateway, C> {
    /// Open the client's orders; the id travels in the route
    pub fn open_client(&self, client_id: i64) {
        self.navigate(Route::Orders { client_id });
    }
}
