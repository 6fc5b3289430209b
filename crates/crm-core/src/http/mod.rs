//! HTTP Adapter
//!
//! Every outbound call funnels through `HttpClient`, which attaches the
//! bearer credential and turns non-2xx responses into `ApiError`.

mod error;
mod transport;
mod client;
mod reqwest_transport;

pub use error::{ApiError, ApiResult, ErrorDetail, ErrorKind};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method};
pub use client::HttpClient;
pub use reqwest_transport::ReqwestTransport;
