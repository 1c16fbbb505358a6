//! Claim result models.
//!
//! This module contains the [`AnnualResult`], [`AggregateResult`] and
//! [`ClaimResult`] types that capture all outputs of a claim computation.
//!
//! `ClaimResult` is deliberately deterministic: it carries no timestamp or
//! random identifier, so two computations over identical inputs produce
//! bit-identical results. The HTTP layer wraps it in an envelope that adds
//! those bookkeeping fields.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The computed claim figures for one calendar year.
///
/// Reference years (years before the claim's start year) carry fully
/// computed amounts for transparency and audit, but are excluded from the
/// aggregate totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualResult {
    /// The calendar year.
    pub year: i32,
    /// True when this year precedes the claim's start year.
    ///
    /// Reference years supply a historical average only; their amounts
    /// never reach [`AggregateResult`].
    pub is_reference_year: bool,
    /// Sum of qualifying allowances across the year's months (informational).
    pub raw_allowance_total: Decimal,
    /// Sum of days worked across the year's months.
    pub days_worked_total: Decimal,
    /// The daily allowance average actually used for this year.
    ///
    /// Normally the prior year's average; the year's own average when the
    /// prior year is missing or has no usable average.
    pub applied_average: Decimal,
    /// True when the prior-year average was unusable and the year fell back
    /// to its own average.
    pub used_fallback_average: bool,
    /// True when neither the prior-year nor the same-year average was
    /// usable, so the applied average is zero.
    pub no_usable_average: bool,
    /// Vacation days of this year that remained payable under the cap.
    pub eligible_vacation_days: Decimal,
    /// Eligible days multiplied by the applied average.
    pub gross_amount: Decimal,
    /// Eligible days multiplied by the already-paid rate, summed per month.
    pub already_paid_amount: Decimal,
    /// Eligible days multiplied by the voucher rate, summed per month.
    ///
    /// Zero when the configuration disables the voucher credit.
    pub voucher_amount: Decimal,
    /// `gross_amount - already_paid_amount + voucher_amount`.
    pub net_amount: Decimal,
}

/// Grand totals over all non-reference years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Total gross amount.
    pub gross_amount: Decimal,
    /// Total already-paid deduction.
    pub already_paid_amount: Decimal,
    /// Total meal-voucher credit.
    pub voucher_amount: Decimal,
    /// Total net claim.
    pub net_amount: Decimal,
}

impl AggregateResult {
    /// An all-zero aggregate.
    pub fn zero() -> Self {
        Self {
            gross_amount: Decimal::ZERO,
            already_paid_amount: Decimal::ZERO,
            voucher_amount: Decimal::ZERO,
            net_amount: Decimal::ZERO,
        }
    }
}

/// The complete, deterministic result of one claim computation.
///
/// # Example
///
/// ```
/// use ferie_engine::models::{AggregateResult, ClaimResult};
///
/// let result = ClaimResult {
///     years: vec![],
///     totals: AggregateResult::zero(),
/// };
/// assert!(result.years.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimResult {
    /// One entry per year present in the claim window, ascending.
    pub years: Vec<AnnualResult>,
    /// Totals over non-reference years.
    pub totals: AggregateResult,
}
