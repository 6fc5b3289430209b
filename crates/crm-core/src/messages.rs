//! User-facing text
//!
//! Screens switch on `ErrorKind`; the server's `detail` wins where it exists.

use crate::domain::DomainError;
use crate::http::{ApiError, ErrorKind};

pub const INVALID_CREDENTIALS: &str = "Неверный email или пароль";
pub const REGISTER_FAILED: &str = "Не удалось зарегистрироваться";
pub const ACTION_FAILED: &str = "Не удалось выполнить действие";
pub const NOT_FOUND: &str = "Не найдено";
pub const SESSION_EXPIRED: &str = "Сессия истекла, войдите снова";
pub const SERVER_UNREACHABLE: &str =
    "Нет связи с сервером. Проверьте CRM_API_URL и CORS_ORIGINS.";
pub const REGISTERED: &str = "Аккаунт создан. Теперь войдите.";

/// Error text for the login form
pub fn login_error(err: &ApiError) -> String {
    match err.kind() {
        ErrorKind::Network => SERVER_UNREACHABLE.to_string(),
        ErrorKind::Unauthorized => INVALID_CREDENTIALS.to_string(),
        _ => err
            .detail_message()
            .unwrap_or_else(|| INVALID_CREDENTIALS.to_string()),
    }
}

/// Error text for the registration form
pub fn register_error(err: &ApiError) -> String {
    match err.kind() {
        ErrorKind::Network => SERVER_UNREACHABLE.to_string(),
        _ => err
            .detail_message()
            .unwrap_or_else(|| REGISTER_FAILED.to_string()),
    }
}

/// Error text for list loads and create/update/delete
pub fn action_error(err: &ApiError) -> String {
    match err.kind() {
        ErrorKind::Network => SERVER_UNREACHABLE.to_string(),
        ErrorKind::Unauthorized => SESSION_EXPIRED.to_string(),
        ErrorKind::NotFound => err.detail_message().unwrap_or_else(|| NOT_FOUND.to_string()),
        _ => err
            .detail_message()
            .unwrap_or_else(|| ACTION_FAILED.to_string()),
    }
}

pub fn invalid_input(err: &DomainError) -> String {
    match err {
        DomainError::MissingField(field) => format!("Заполните поле «{}»", field_label(field)),
        DomainError::InvalidInput(msg) => msg.clone(),
    }
}

fn field_label(field: &str) -> &str {
    match field {
        "name" => "Имя",
        "title" => "Название",
        "email" => "Email",
        other => other,
    }
}
