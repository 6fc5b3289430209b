//! Display-only single entity screen
//!
//! Load failures are deliberately not surfaced: the entity just does not
//! populate and the view shows "not found". A rejected session still expires.

use std::sync::Arc;

use super::state::StateCell;
use crate::domain::Entity;
use crate::gateway::ResourceGateway;
use crate::router::Navigator;

#[derive(Debug, Clone, PartialEq)]
pub struct DetailState<E> {
    pub item: Option<E>,
    pub loading: bool,
    pub not_found: bool,
}

impl<E> Default for DetailState<E> {
    fn default() -> Self {
        Self {
            item: None,
            loading: false,
            not_found: false,
        }
    }
}

#[derive(Clone)]
pub struct DetailScreen<G: ResourceGateway, C> {
    gateway: G,
    id: <G::Entity as Entity>::Id,
    state: C,
    navigator: Arc<dyn Navigator>,
}

impl<G: ResourceGateway, C: StateCell<DetailState<G::Entity>>> DetailScreen<G, C> {
    pub fn new(
        gateway: G,
        id: <G::Entity as Entity>::Id,
        state: C,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            gateway,
            id,
            state,
            navigator,
        }
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    pub async fn load(&self) {
        self.state.write(|s| {
            s.loading = true;
            s.not_found = false;
        });
        let result = self.gateway.get(self.id).await;
        match result {
            Ok(item) => self.state.write(|s| {
                s.item = Some(item);
                s.loading = false;
            }),
            Err(err) => {
                log::debug!("detail: {} did not load: {}", self.id, err);
                self.state.write(|s| {
                    s.item = None;
                    s.loading = false;
                    s.not_found = true;
                });
                if err.is_unauthorized() {
                    self.navigator.expire_session();
                }
            }
        }
    }
}
