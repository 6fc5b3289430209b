//! Structured API errors
//!
//! Classification happens once, at the adapter boundary: transport failures
//! and HTTP status codes map onto a closed `ErrorKind` that screens match on.

use serde::Deserialize;
use thiserror::Error;

use super::transport::HttpResponse;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (unreachable host, CORS, aborted fetch)
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with status {status}")]
    Status {
        status: u16,
        detail: Option<ErrorDetail>,
    },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("failed to encode request body: {0}")]
    Encode(String),
}

/// Closed classification of `ApiError`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Unauthorized,
    NotFound,
    Validation,
    Server,
    Decode,
}

impl ApiError {
    /// Build the error for a non-2xx response, keeping the server's `detail`
    pub fn from_response(response: &HttpResponse) -> Self {
        let detail = serde_json::from_str::<DetailBody>(&response.body)
            .ok()
            .and_then(|body| body.detail);
        ApiError::Status {
            status: response.status,
            detail,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Network(_) => ErrorKind::Network,
            ApiError::Decode(_) | ApiError::Encode(_) => ErrorKind::Decode,
            ApiError::Status { status, .. } => match *status {
                401 | 403 => ErrorKind::Unauthorized,
                404 => ErrorKind::NotFound,
                400..=499 => ErrorKind::Validation,
                _ => ErrorKind::Server,
            },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind() == ErrorKind::Unauthorized
    }

    /// Human-readable text the server attached to the failure, if any
    pub fn detail_message(&self) -> Option<String> {
        match self {
            ApiError::Status { detail: Some(detail), .. } => detail.message(),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DetailBody {
    #[serde(default)]
    detail: Option<ErrorDetail>,
}

/// The `detail` field of an error body: a plain message, or a list of
/// field-level validation items each carrying a `msg`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Items(Vec<DetailItem>),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetailItem {
    #[serde(default)]
    pub msg: Option<String>,
}

impl ErrorDetail {
    pub fn message(&self) -> Option<String> {
        let text = match self {
            ErrorDetail::Message(msg) => msg.trim().to_string(),
            ErrorDetail::Items(items) => items
                .iter()
                .filter_map(|item| item.msg.as_deref())
                .map(str::trim)
                .filter(|msg| !msg.is_empty())
                .collect::<Vec<_>>()
                .join(". "),
        };
        (!text.is_empty()).then_some(text)
    }
}
