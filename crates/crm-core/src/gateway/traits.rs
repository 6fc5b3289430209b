//! Gateway Layer - Core Traits
//!
//! CRUD contract shared by the list-holding screens. The scope is whatever
//! the list endpoint is keyed by: nothing for clients, the client id for
//! orders.

use async_trait::async_trait;

use crate::domain::{DomainResult, Entity};
use crate::http::ApiResult;

/// Core gateway trait for CRUD resources
///
/// Each method maps to exactly one HTTP call.
#[async_trait(?Send)]
pub trait ResourceGateway: Clone + Send + Sync + 'static {
    type Entity: Entity;
    /// Form-editable fields of the entity
    type Draft: Clone + Default + PartialEq + Send + Sync + 'static;
    type Scope: Clone + Send + Sync + 'static;

    /// Text of the blocking confirmation shown before a delete
    const DELETE_PROMPT: &'static str;

    /// Fetch the full list for a scope
    async fn list(&self, scope: &Self::Scope) -> ApiResult<Vec<Self::Entity>>;

    /// Fetch one entity by ID
    async fn get(&self, id: <Self::Entity as Entity>::Id) -> ApiResult<Self::Entity>;

    /// Create a new entity from a draft
    async fn create(&self, scope: &Self::Scope, draft: &Self::Draft) -> ApiResult<()>;

    /// Replace all editable fields of an existing entity
    async fn update(
        &self,
        id: <Self::Entity as Entity>::Id,
        scope: &Self::Scope,
        draft: &Self::Draft,
    ) -> ApiResult<()>;

    /// Delete entity by ID
    async fn delete(&self, id: <Self::Entity as Entity>::Id) -> ApiResult<()>;

    /// Form contents for editing an existing entity
    fn draft_of(entity: &Self::Entity) -> Self::Draft;

    /// Client-side checks run before create/update
    fn validate(draft: &Self::Draft) -> DomainResult<()>;
}
