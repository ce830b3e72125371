//! Web layer for the bus schedule browser.
//!
//! Serves the stand picker, per-stand schedule pages (HTML or JSON) and the
//! raw dataset API.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
