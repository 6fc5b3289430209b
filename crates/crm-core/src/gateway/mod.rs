//! Resource Gateways
//!
//! One typed function per REST call, organized by domain. Gateways add no
//! retries, caching or error translation on top of `HttpClient`.

mod traits;
mod auth;
mod clients;
mod orders;

use std::sync::Arc;

pub use traits::ResourceGateway;
pub use auth::AuthGateway;
pub use clients::ClientsGateway;
pub use orders::OrdersGateway;

use crate::config::ApiConfig;
use crate::http::{HttpClient, HttpTransport, ReqwestTransport};
use crate::session::{SessionStore, TokenStorage};

/// All gateways over one adapter and one session
#[derive(Clone)]
pub struct Api {
    pub session: SessionStore,
    pub auth: AuthGateway,
    pub clients: ClientsGateway,
    pub orders: OrdersGateway,
}

impl Api {
    pub fn new(transport: Arc<dyn HttpTransport>, storage: Arc<dyn TokenStorage>) -> Self {
        let session = SessionStore::new(storage);
        let http = HttpClient::new(transport, session.clone());
        Self {
            session,
            auth: AuthGateway::new(http.clone()),
            clients: ClientsGateway::new(http.clone()),
            orders: OrdersGateway::new(http),
        }
    }

    /// Production wiring: reqwest transport against `config.base_url`
    pub fn from_config(config: ApiConfig, storage: Arc<dyn TokenStorage>) -> Self {
        log::info!("api: using backend at {}", config.base_url);
        Self::new(Arc::new(ReqwestTransport::new(config)), storage)
    }
}
