//! HTTP API module for the Vacation-Pay Differential Claim Engine.
//!
//! This module provides the REST endpoints the host application calls on
//! every edit of the payroll grid and from the negotiation dashboard.

mod handlers;
mod request;
mod response;

pub use handlers::create_router;
pub use request::{ClaimRequest, NegotiationRequest};
pub use response::{ApiError, ClaimResponse};
