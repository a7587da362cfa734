//! HTTP API module for the Materials Engine.
//!
//! This module provides the REST API endpoints for calculating material
//! quantities and costs, and for estimating paver patio excavation depth.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ExcavationDepthRequest, MaterialCalculationRequest};
pub use response::{ApiError, MaterialCalculationResponse};
pub use state::AppState;
