//! Freelance CRM Client Core
//!
//! Platform-neutral layers shared by the browser app:
//! - config: API base URL resolution
//! - session: credential token persistence
//! - http: transport seam + bearer-attaching adapter
//! - domain: entities and drafts
//! - gateway: typed REST calls
//! - router: routes and the session guard
//! - screens: view-models implementing refresh-after-mutation

pub mod config;
pub mod session;
pub mod http;
pub mod domain;
pub mod gateway;
pub mod router;
pub mod screens;
pub mod messages;

#[cfg(test)]
mod testing;

pub use config::ApiConfig;
pub use session::{SessionStore, TokenStorage, MemoryStorage};
pub use http::{ApiError, ApiResult, ErrorKind, HttpClient, HttpTransport, ReqwestTransport};
pub use gateway::{Api, AuthGateway, ClientsGateway, OrdersGateway, ResourceGateway};
pub use router::{guard, Navigator, Route, Router, RouterState};
