//! Web layer for the MRT gateway.
//!
//! Read-only JSON endpoints over [`crate::stations::StationService`], each
//! wrapped in the `{code, message, data}` envelope.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
