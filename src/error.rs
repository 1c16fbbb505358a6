//! Error types for the Vacation-Pay Differential Claim Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The engine deliberately has a very small error surface: every data-shape
//! anomaly (malformed numbers, missing years, unknown profiles) is absorbed
//! and surfaced as a data flag on the result, so only a violated
//! configuration contract is fatal to a call.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the claim engine.
///
/// # Example
///
/// ```
/// use ferie_engine::error::EngineError;
/// use rust_decimal::Decimal;
///
/// let error = EngineError::NonPositiveCap { cap: Decimal::ZERO };
/// assert_eq!(
///     error.to_string(),
///     "Vacation day cap must be positive, got 0"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The configured vacation day cap was zero or negative.
    ///
    /// A non-positive cap would make every month's eligible day count zero
    /// or negative, so the engine refuses to compute rather than silently
    /// produce a nonsensical claim.
    #[error("Vacation day cap must be positive, got {cap}")]
    NonPositiveCap {
        /// The rejected cap value.
        cap: Decimal,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
