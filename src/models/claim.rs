//! Claim configuration model.
//!
//! This module defines the [`ClaimConfiguration`] struct describing the
//! legally-scoped claim window and cap, plus the two cap values the host
//! application offers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The standard statutory minimum of payable vacation days.
pub const STATUTORY_CAP_DAYS: Decimal = Decimal::from_parts(28, 0, 0, false, 0);

/// The extended cap including additional leave categories.
pub const EXTENDED_CAP_DAYS: Decimal = Decimal::from_parts(32, 0, 0, false, 0);

/// Immutable configuration for one claim computation.
///
/// The cap is accepted as any positive decimal; the engine does not validate
/// its legal correctness. [`STATUTORY_CAP_DAYS`] and [`EXTENDED_CAP_DAYS`]
/// are the two values the host application presents to users.
///
/// # Example
///
/// ```
/// use ferie_engine::models::{ClaimConfiguration, STATUTORY_CAP_DAYS};
///
/// let config = ClaimConfiguration {
///     start_claim_year: 2020,
///     vacation_cap_days: STATUTORY_CAP_DAYS,
///     include_voucher_credit: true,
///     include_already_paid_deduction: true,
/// };
/// assert_eq!(config.reference_year(), 2019);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimConfiguration {
    /// First year for which a payable credit is claimed.
    pub start_claim_year: i32,
    /// Maximum number of vacation days eligible for the recalculated
    /// payment across the whole computed window.
    pub vacation_cap_days: Decimal,
    /// Whether the meal-voucher credit is included in the claim.
    pub include_voucher_credit: bool,
    /// Whether the already-paid deduction is shown to the user.
    ///
    /// Display-only: the deduction is always computed; presentation layers
    /// decide visibility based on this flag.
    #[serde(default = "default_true")]
    pub include_already_paid_deduction: bool,
}

fn default_true() -> bool {
    true
}

impl ClaimConfiguration {
    /// Returns the reference year, `start_claim_year - 1`.
    ///
    /// The reference year supplies a historical average but never
    /// contributes to the monetary total.
    pub fn reference_year(&self) -> i32 {
        self.start_claim_year - 1
    }
}
