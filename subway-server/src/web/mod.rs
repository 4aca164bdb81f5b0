//! Web layer for the subway line manager.
//!
//! Translates HTTP requests into store and path operations and serializes
//! the resulting station order.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
