//! Order Entity
//!
//! An order belongs to exactly one client. `status` is a closed set; the
//! server is the authority on what it accepts.

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    New,
    Active,
    Archived,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [OrderStatus::New, OrderStatus::Active, OrderStatus::Archived];

    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Active => "active",
            OrderStatus::Archived => "archived",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::New => "Новый",
            OrderStatus::Active => "Активный",
            OrderStatus::Archived => "Архив",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub client_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: i64,
    pub status: OrderStatus,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub is_paid: bool,
}

impl Entity for Order {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Editable order fields. The owning client comes from the route, not the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub title: String,
    pub description: String,
    /// Not range-checked: the server decides whether e.g. a negative price is valid
    pub price: i64,
    pub status: OrderStatus,
    pub notes: String,
    pub is_paid: bool,
    /// Price exactly as typed; `None` until the field is edited
    #[serde(skip)]
    pub price_text: Option<String>,
}

impl OrderDraft {
    pub fn validate(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::MissingField("title".to_string()));
        }
        if let Some(text) = &self.price_text {
            if text.trim().parse::<i64>().is_err() {
                return Err(DomainError::InvalidInput(
                    "Цена должна быть целым числом".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Price text for the form field
    pub fn price_input(&self) -> String {
        self.price_text
            .clone()
            .unwrap_or_else(|| self.price.to_string())
    }

    /// Store the typed text verbatim. Intermediate input such as "-" or ""
    /// leaves `price` alone until the text parses.
    pub fn set_price_text(&mut self, text: &str) {
        if let Ok(price) = text.trim().parse() {
            self.price = price;
        }
        self.price_text = Some(text.to_string());
    }
}

impl From<&Order> for OrderDraft {
    fn from(order: &Order) -> Self {
        Self {
            title: order.title.clone(),
            description: order.description.clone(),
            price: order.price,
            status: order.status,
            notes: order.notes.clone(),
            is_paid: order.is_paid,
            price_text: None,
        }
    }
}
