//! Canonical claim aggregation.
//!
//! [`calculate_claim`] is the single source of truth for the vacation-pay
//! differential: every presentation surface (tables, exports, dashboards)
//! must consume its output rather than recompute the figures. It combines
//! the yearly averages with the cap walk and produces per-year rows plus
//! grand totals, applying the reference-year exclusion rule.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::error::{EngineError, EngineResult};
use crate::models::{AggregateResult, AnnualResult, ClaimConfiguration, ClaimResult, MonthlyRecord};

use super::cap_walk::{walk_vacation_cap, MonthEligibility};
use super::profile::CompanyProfile;
use super::yearly_average::{calculate_yearly_averages, YearlyAverage};

/// Computes the complete vacation-pay differential claim.
///
/// The computation is a pure function of its inputs:
///
/// 1. Yearly allowance averages are derived over ALL supplied records, so
///    the reference year can draw on an earlier year's average when one
///    exists in the data.
/// 2. The working window is restricted to years from
///    `start_claim_year - 1` onward; earlier years are excluded from both
///    the per-year results and the cap walk.
/// 3. The cap walk runs once over the whole window: the cap is a lifetime
///    budget across all years walked, not an annual one.
/// 4. Each year's applied average is the prior year's average when that
///    year exists with a non-zero average, else the year's own average
///    (flagged as a fallback), else zero (additionally flagged as having
///    no usable average).
/// 5. Reference years (`year < start_claim_year`) carry fully computed
///    amounts but are excluded from the aggregate totals.
///
/// Records may be supplied in any order; sorting happens internally.
/// Calling this twice with identical inputs yields identical results.
///
/// # Errors
///
/// Returns [`EngineError::NonPositiveCap`] when the configured cap is zero
/// or negative. Data-shape anomalies never error: they surface as the
/// `used_fallback_average` / `no_usable_average` flags.
pub fn calculate_claim(
    records: &[MonthlyRecord],
    config: &ClaimConfiguration,
    profile: CompanyProfile,
) -> EngineResult<ClaimResult> {
    if config.vacation_cap_days <= Decimal::ZERO {
        return Err(EngineError::NonPositiveCap {
            cap: config.vacation_cap_days,
        });
    }

    let averages = calculate_yearly_averages(records, profile);

    let reference_year = config.reference_year();
    let window: Vec<MonthlyRecord> = records
        .iter()
        .filter(|record| record.year >= reference_year)
        .cloned()
        .collect();

    let eligibility = walk_vacation_cap(&window, config.vacation_cap_days)?;

    let mut eligibility_by_year: BTreeMap<i32, Vec<MonthEligibility>> = BTreeMap::new();
    for month in eligibility {
        eligibility_by_year.entry(month.year).or_default().push(month);
    }

    let mut rates: BTreeMap<(i32, u32), (Decimal, Decimal)> = BTreeMap::new();
    let mut raw_totals: BTreeMap<i32, (Decimal, Decimal)> = BTreeMap::new();
    for record in &window {
        rates.insert(
            record.sort_key(),
            (record.already_paid_rate, record.voucher_rate),
        );
        let (allowances, days) = raw_totals
            .entry(record.year)
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        *allowances += profile.qualifying_total(&record.allowances);
        *days += record.days_worked;
    }

    let mut years = Vec::with_capacity(eligibility_by_year.len());
    let mut totals = AggregateResult::zero();

    for (year, months) in &eligibility_by_year {
        let (applied_average, used_fallback_average, no_usable_average) =
            resolve_applied_average(&averages, *year);

        let mut eligible_vacation_days = Decimal::ZERO;
        let mut gross_amount = Decimal::ZERO;
        let mut already_paid_amount = Decimal::ZERO;
        let mut voucher_amount = Decimal::ZERO;

        for month in months {
            let (already_paid_rate, voucher_rate) = rates
                .get(&(month.year, month.month_index))
                .copied()
                .unwrap_or((Decimal::ZERO, Decimal::ZERO));

            eligible_vacation_days += month.eligible_days;
            gross_amount += month.eligible_days * applied_average;
            already_paid_amount += month.eligible_days * already_paid_rate;
            if config.include_voucher_credit {
                voucher_amount += month.eligible_days * voucher_rate;
            }
        }

        let net_amount = gross_amount - already_paid_amount + voucher_amount;
        let is_reference_year = *year < config.start_claim_year;

        if !is_reference_year {
            totals.gross_amount += gross_amount;
            totals.already_paid_amount += already_paid_amount;
            totals.voucher_amount += voucher_amount;
            totals.net_amount += net_amount;
        }

        let (raw_allowance_total, days_worked_total) = raw_totals
            .get(year)
            .copied()
            .unwrap_or((Decimal::ZERO, Decimal::ZERO));

        years.push(AnnualResult {
            year: *year,
            is_reference_year,
            raw_allowance_total,
            days_worked_total,
            applied_average,
            used_fallback_average,
            no_usable_average,
            eligible_vacation_days,
            gross_amount,
            already_paid_amount,
            voucher_amount,
            net_amount,
        });
    }

    Ok(ClaimResult { years, totals })
}

/// Picks the daily average actually used for a year.
///
/// Prior-year average when that year exists with a non-zero value, else
/// the year's own average. Returns `(average, used_fallback, no_usable)`.
fn resolve_applied_average(
    averages: &BTreeMap<i32, YearlyAverage>,
    year: i32,
) -> (Decimal, bool, bool) {
    let prior = averages
        .get(&(year - 1))
        .map(|average| average.average_daily_allowance)
        .filter(|value| !value.is_zero());

    match prior {
        Some(value) => (value, false, false),
        None => {
            let own = averages
                .get(&year)
                .map(|average| average.average_daily_allowance)
                .unwrap_or(Decimal::ZERO);
            let no_usable = own.is_zero();
            (own, true, no_usable)
        }
    }
}
