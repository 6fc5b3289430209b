//! Screen View-Models
//!
//! Each screen owns its in-memory copy of what it displays, kept in a
//! `StateCell` so the browser app can back it with a reactive signal.
//! After every successful mutation the owning list is refetched in full.

mod state;
mod list;
mod detail;
mod clients;
mod orders;
mod auth;
mod dashboard;


use thiserror::Error;

use crate::domain::DomainError;
use crate::http::ApiError;

pub use state::StateCell;
pub use list::{ListScreen, ListState, ListStateOf, Modal};
pub use detail::{DetailScreen, DetailState};
pub use clients::ClientsScreen;
pub use orders::{OrderScreen, OrdersScreen};
pub use auth::{LoginScreen, LoginState, RegisterScreen, RegisterState};
pub use dashboard::{DashboardScreen, DashboardState};

/// Blocking yes/no prompt shown before destructive actions
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Failure of a screen action
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScreenError {
    /// Rejected before any request was sent
    #[error(transparent)]
    Invalid(#[from] DomainError),

    #[error(transparent)]
    Api(#[from] ApiError),
}
