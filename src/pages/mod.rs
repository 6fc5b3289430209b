//! Pages
//!
//! One component per route. Each page builds its screen over signal-backed
//! state and kicks off its initial load when mounted.

mod login;
mod register;
mod dashboard;
mod clients;
mod orders;
mod order;
mod not_found;

pub use login::LoginPage;
pub use register::RegisterPage;
pub use dashboard::DashboardPage;
pub use clients::ClientsPage;
pub use orders::OrdersPage;
pub use order::OrderPage;
pub use not_found::NotFoundPage;
