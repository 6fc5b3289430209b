//! Domain Layer
//!
//! Entities as the REST API returns them, plus the drafts the forms edit.
//! This layer has NO dependencies beyond serde.

mod entity;
mod client;
mod order;
mod user;

pub use entity::{Entity, DomainError, DomainResult};
pub use client::{Client, ClientDraft};
pub use order::{Order, OrderDraft, OrderStatus};
pub use user::{User, TokenResponse};
