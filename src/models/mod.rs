//! Core data models for the Vacation-Pay Differential Claim Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod claim;
mod monthly_record;
mod negotiation;
mod result;

pub use claim::{ClaimConfiguration, EXTENDED_CAP_DAYS, STATUTORY_CAP_DAYS};
pub use monthly_record::MonthlyRecord;
pub use negotiation::{NegotiationOutcome, NegotiationScenario, DEFAULT_TAX_RATE};
pub use result::{AggregateResult, AnnualResult, ClaimResult};
