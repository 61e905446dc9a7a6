//! HTTP API module for the travel subsidy engine.
//!
//! This module provides the REST endpoints a date-entry front end calls
//! after every input change to recompute the entitlement.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse, CalculationResponse};
pub use state::AppState;
