//! UI Components
//!
//! Reusable Leptos components.

mod app_layout;
mod nav_link;
mod back_button;
mod loader;
mod modal;
mod client_form;
mod order_form;

pub use app_layout::AppLayout;
pub use nav_link::NavLink;
pub use back_button::BackButton;
pub use loader::Loader;
pub use modal::Modal;
pub use client_form::ClientForm;
pub use order_form::OrderForm;
