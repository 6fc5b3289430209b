//! Refresh-after-mutation list screen
//!
//! Create: validate, send, reset the form, refetch, close the modal.
//! Update: validate, send, refetch, clear the edit selection.
//! Delete: confirm (declined means no request), send, refetch.
//!
//! Nothing changes locally before the server confirms. A failed mutation
//! leaves the modal open with the form as the user left it.

use std::sync::Arc;

use super::state::StateCell;
use super::{Confirm, ScreenError};
use crate::domain::Entity;
use crate::gateway::ResourceGateway;
use crate::http::ApiError;
use crate::messages;
use crate::router::{Navigator, Route};

/// Which form, if any, is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal<Id> {
    Closed,
    Adding,
    Editing(Id),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<E: Entity, D> {
    pub items: Vec<E>,
    /// A list request is in flight
    pub loading: bool,
    /// At least one list request has finished
    pub loaded: bool,
    /// A create/update request is in flight
    pub saving: bool,
    pub form: D,
    pub modal: Modal<E::Id>,
    /// Load/delete failure shown above the list
    pub error: Option<String>,
    /// Create/update failure shown inside the modal
    pub form_error: Option<String>,
}

impl<E: Entity, D: Default> Default for ListState<E, D> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            loaded: false,
            saving: false,
            form: D::default(),
            modal: Modal::Closed,
            error: None,
            form_error: None,
        }
    }
}

impl<E: Entity, D> ListState<E, D> {
    pub fn is_modal_open(&self) -> bool {
        self.modal != Modal::Closed
    }

    pub fn editing(&self) -> Option<E::Id> {
        match self.modal {
            Modal::Editing(id) => Some(id),
            _ => None,
        }
    }
}

/// List state for a gateway's entity and draft
pub type ListStateOf<G> = ListState<<G as ResourceGateway>::Entity, <G as ResourceGateway>::Draft>;

#[derive(Clone)]
pub struct ListScreen<G: ResourceGateway, C> {
    gateway: G,
    scope: G::Scope,
    state: C,
    navigator: Arc<dyn Navigator>,
}

impl<G: ResourceGateway, C: StateCell<ListStateOf<G>>> ListScreen<G, C> {
    pub fn new(gateway: G, scope: G::Scope, state: C, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            gateway,
            scope,
            state,
            navigator,
        }
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    pub fn scope(&self) -> &G::Scope {
        &self.scope
    }

    pub fn navigate(&self, route: Route) {
        self.navigator.navigate(route);
    }

    /// Fetch the full list, replacing whatever is held
    pub async fn load(&self) -> Result<(), ApiError> {
        self.state.write(|s| s.loading = true);
        match self.gateway.list(&self.scope).await {
            Ok(items) => {
                log::debug!("list: loaded {} items", items.len());
                self.state.write(|s| {
                    s.items = items;
                    s.loading = false;
                    s.loaded = true;
                    s.error = None;
                });
                Ok(())
            }
            Err(err) => {
                self.state.write(|s| {
                    s.loading = false;
                    s.loaded = true;
                    s.error = Some(messages::action_error(&err));
                });
                self.check_session(&err);
                Err(err)
            }
        }
    }

    pub fn open_add(&self) {
        self.state.write(|s| {
            s.form = G::Draft::default();
            s.modal = Modal::Adding;
            s.form_error = None;
        });
    }

    pub fn open_edit(&self, entity: &G::Entity) {
        let draft = G::draft_of(entity);
        let id = entity.id();
        self.state.write(|s| {
            s.form = draft;
            s.modal = Modal::Editing(id);
            s.form_error = None;
        });
    }

    pub fn close_modal(&self) {
        self.state.write(|s| {
            s.modal = Modal::Closed;
            s.form_error = None;
        });
    }

    pub fn edit_form(&self, f: impl FnOnce(&mut G::Draft)) {
        self.state.write(|s| f(&mut s.form));
    }

    /// Submit the open form: create when adding, update when editing
    pub async fn submit(&self) -> Result<(), ScreenError> {
        let (modal, draft) = self.state.read(|s| (s.modal, s.form.clone()));
        match modal {
            Modal::Closed => Ok(()),
            Modal::Adding => self.create(draft).await,
            Modal::Editing(id) => self.update(id, draft).await,
        }
    }

    pub async fn create(&self, draft: G::Draft) -> Result<(), ScreenError> {
        self.validate(&draft)?;
        self.state.write(|s| {
            s.saving = true;
            s.form_error = None;
        });
        if let Err(err) = self.gateway.create(&self.scope, &draft).await {
            return Err(self.fail_mutation(err));
        }

        self.state.write(|s| {
            s.saving = false;
            s.form = G::Draft::default();
        });
        self.refetch().await;
        self.state.write(|s| s.modal = Modal::Closed);
        Ok(())
    }

    pub async fn update(
        &self,
        id: <G::Entity as Entity>::Id,
        draft: G::Draft,
    ) -> Result<(), ScreenError> {
        self.validate(&draft)?;
        self.state.write(|s| {
            s.saving = true;
            s.form_error = None;
        });
        if let Err(err) = self.gateway.update(id, &self.scope, &draft).await {
            return Err(self.fail_mutation(err));
        }

        self.refetch().await;
        self.state.write(|s| {
            s.saving = false;
            s.form = G::Draft::default();
            if s.modal == Modal::Editing(id) {
                s.modal = Modal::Closed;
            }
        });
        Ok(())
    }

    /// Returns `Ok(false)` when the user declined and nothing was sent
    pub async fn delete(
        &self,
        id: <G::Entity as Entity>::Id,
        confirm: &dyn Confirm,
    ) -> Result<bool, ScreenError> {
        if !confirm.confirm(G::DELETE_PROMPT) {
            log::debug!("list: delete of {} declined", id);
            return Ok(false);
        }
        if let Err(err) = self.gateway.delete(id).await {
            self.state.write(|s| s.error = Some(messages::action_error(&err)));
            self.check_session(&err);
            return Err(err.into());
        }

        self.refetch().await;
        Ok(true)
    }

    /// Unconditional full reload after a confirmed mutation
    async fn refetch(&self) {
        if let Err(err) = self.load().await {
            log::warn!("list: refetch after mutation failed: {}", err);
        }
    }

    fn validate(&self, draft: &G::Draft) -> Result<(), ScreenError> {
        G::validate(draft).map_err(|err| {
            self.state.write(|s| s.form_error = Some(messages::invalid_input(&err)));
            ScreenError::from(err)
        })
    }

    fn fail_mutation(&self, err: ApiError) -> ScreenError {
        log::warn!("list: mutation failed: {}", err);
        self.state.write(|s| {
            s.saving = false;
            s.form_error = Some(messages::action_error(&err));
        });
        self.check_session(&err);
        ScreenError::Api(err)
    }

    fn check_session(&self, err: &ApiError) {
        if err.is_unauthorized() {
            self.navigator.expire_session();
        }
    }
}
