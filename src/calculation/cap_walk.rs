//! Cap-saturation walk over chronological months.
//!
//! The payable claim is bounded by a configured number of vacation days.
//! This module walks the months in chronological order, maintaining one
//! running total of requested vacation days, and derives how many of each
//! month's days remain eligible before the cap saturates.
//!
//! The walk is modeled as an explicit fold: [`saturate_month`] is the step
//! function, [`walk_vacation_cap`] drives it over a sorted record sequence.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::MonthlyRecord;

/// The outcome of one fold step of the cap walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapStep {
    /// Vacation days of this month that fit under the cap.
    pub eligible_days: Decimal,
    /// The running total of requested days after this month.
    pub running_total_after: Decimal,
}

/// Per-month eligibility derived by the walk.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthEligibility {
    /// The calendar year of the month.
    pub year: i32,
    /// The zero-based month index.
    pub month_index: u32,
    /// Vacation days requested in this month.
    pub requested_days: Decimal,
    /// Vacation days that remained payable under the cap.
    pub eligible_days: Decimal,
    /// The running total of requested days after this month.
    pub running_total_after: Decimal,
}

/// Applies the cap to one month's requested vacation days.
///
/// `eligible = min(requested, max(0, cap − running_before))`; the running
/// total then advances by the *requested* days, not the eligible days, so
/// a month that overshoots the cap still consumes its full request.
///
/// # Examples
///
/// ```
/// use ferie_engine::calculation::saturate_month;
/// use rust_decimal::Decimal;
///
/// // 26 of 28 cap days already consumed, 5 requested: 2 remain eligible
/// let step = saturate_month(Decimal::from(26), Decimal::from(5), Decimal::from(28));
/// assert_eq!(step.eligible_days, Decimal::from(2));
/// assert_eq!(step.running_total_after, Decimal::from(31));
/// ```
pub fn saturate_month(
    running_before: Decimal,
    requested_days: Decimal,
    cap: Decimal,
) -> CapStep {
    let headroom = (cap - running_before).max(Decimal::ZERO);
    CapStep {
        eligible_days: requested_days.min(headroom),
        running_total_after: running_before + requested_days,
    }
}

/// Walks all records chronologically, applying the cap to each month.
///
/// Records are sorted by `(year, month_index)` internally; callers may
/// pass them in any order. The running total is never reset at a year
/// boundary: the cap is consumed once across the entire span fed to the
/// walk, including the reference year when present.
///
/// The walker reads only `days_vacation`; allowance values never influence
/// eligibility.
///
/// # Errors
///
/// Returns [`EngineError::NonPositiveCap`] when `cap <= 0`.
pub fn walk_vacation_cap(
    records: &[MonthlyRecord],
    cap: Decimal,
) -> EngineResult<Vec<MonthEligibility>> {
    if cap <= Decimal::ZERO {
        return Err(EngineError::NonPositiveCap { cap });
    }

    let mut ordered: Vec<&MonthlyRecord> = records.iter().collect();
    ordered.sort_by_key(|record| record.sort_key());

    let mut running = Decimal::ZERO;
    let mut eligibility = Vec::with_capacity(ordered.len());

    for record in ordered {
        let step = saturate_month(running, record.days_vacation, cap);
        running = step.running_total_after;
        eligibility.push(MonthEligibility {
            year: record.year,
            month_index: record.month_index,
            requested_days: record.days_vacation,
            eligible_days: step.eligible_days,
            running_total_after: step.running_total_after,
        });
    }

    Ok(eligibility)
}
