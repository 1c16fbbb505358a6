//! Yearly allowance average calculation.
//!
//! For each calendar year present in the data, derives one average daily
//! allowance value from the qualifying allowances and days worked of that
//! year's months.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::MonthlyRecord;

use super::profile::CompanyProfile;

/// The derived allowance average for one calendar year.
///
/// A zero [`YearlyAverage::average_daily_allowance`] means "no data", never
/// "free": a year whose divisor is zero produces exactly zero and callers
/// must fall back accordingly.
#[derive(Debug, Clone, PartialEq)]
pub struct YearlyAverage {
    /// The calendar year.
    pub year: i32,
    /// Qualifying allowances summed over months with positive days worked.
    pub allowance_sum: Decimal,
    /// Days worked summed over months with positive days worked.
    pub days_worked_sum: Decimal,
    /// `allowance_sum / days_worked_sum`, or exactly zero when the divisor
    /// is zero.
    pub average_daily_allowance: Decimal,
}

/// Derives one [`YearlyAverage`] per distinct year present in the records.
///
/// Only months with `days_worked > 0` contribute to either accumulator: a
/// month with payroll entries but no worked days cannot meaningfully
/// contribute to a daily rate, so its allowances are silently excluded.
/// Back-pay never reaches this function: it is a dedicated record field,
/// not an allowance-map entry.
///
/// Single O(n) pass; records may be supplied in any order.
///
/// # Example
///
/// ```
/// use ferie_engine::calculation::{calculate_yearly_averages, CompanyProfile};
/// use ferie_engine::models::MonthlyRecord;
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
///
/// let mut allowances = HashMap::new();
/// allowances.insert("night_work".to_string(), Decimal::from(1200));
///
/// let records = vec![MonthlyRecord {
///     year: 2019,
///     month_index: 0,
///     allowances,
///     days_worked: Decimal::from(220),
///     days_vacation: Decimal::ZERO,
///     already_paid_rate: Decimal::ZERO,
///     voucher_rate: Decimal::ZERO,
///     back_pay: Decimal::ZERO,
///     note: String::new(),
/// }];
///
/// let averages = calculate_yearly_averages(&records, CompanyProfile::Transit);
/// assert_eq!(averages[&2019].days_worked_sum, Decimal::from(220));
/// ```
pub fn calculate_yearly_averages(
    records: &[MonthlyRecord],
    profile: CompanyProfile,
) -> BTreeMap<i32, YearlyAverage> {
    let mut averages: BTreeMap<i32, YearlyAverage> = BTreeMap::new();

    for record in records {
        let entry = averages.entry(record.year).or_insert_with(|| YearlyAverage {
            year: record.year,
            allowance_sum: Decimal::ZERO,
            days_worked_sum: Decimal::ZERO,
            average_daily_allowance: Decimal::ZERO,
        });

        if record.days_worked > Decimal::ZERO {
            entry.allowance_sum += profile.qualifying_total(&record.allowances);
            entry.days_worked_sum += record.days_worked;
        }
    }

    for average in averages.values_mut() {
        if average.days_worked_sum > Decimal::ZERO {
            average.average_daily_allowance = average.allowance_sum / average.days_worked_sum;
        }
    }

    averages
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn record(year: i32, month_index: u32, night_work: &str, days_worked: &str) -> MonthlyRecord {
        let mut allowances = HashMap::new();
        allowances.insert("night_work".to_string(), dec(night_work));
        MonthlyRecord {
            year,
            month_index,
            allowances,
            days_worked: dec(days_worked),
            days_vacation: Decimal::ZERO,
            already_paid_rate: Decimal::ZERO,
            voucher_rate: Decimal::ZERO,
            back_pay: Decimal::ZERO,
            note: String::new(),
        }
    }

    // ==========================================================================
    // YA-001: single year, single month
    // ==========================================================================
    #[test]
    fn test_ya_001_single_month_average() {
        let records = vec![record(2019, 0, "1200", "220")];
        let averages = calculate_yearly_averages(&records, CompanyProfile::Transit);

        let year = &averages[&2019];
        assert_eq!(year.allowance_sum, dec("1200"));
        assert_eq!(year.days_worked_sum, dec("220"));
        assert_eq!(
            year.average_daily_allowance.round_dp(4),
            dec("5.4545")
        );
    }

    // ==========================================================================
    // YA-002: months accumulate within a year
    // ==========================================================================
    #[test]
    fn test_ya_002_months_accumulate() {
        let records = vec![
            record(2019, 0, "100", "20"),
            record(2019, 1, "200", "20"),
            record(2019, 2, "300", "20"),
        ];
        let averages = calculate_yearly_averages(&records, CompanyProfile::Transit);

        let year = &averages[&2019];
        assert_eq!(year.allowance_sum, dec("600"));
        assert_eq!(year.days_worked_sum, dec("60"));
        assert_eq!(year.average_daily_allowance, dec("10"));
    }

    // ==========================================================================
    // YA-003: zero-days-worked months contribute nothing
    // ==========================================================================
    #[test]
    fn test_ya_003_zero_days_worked_month_excluded() {
        let records = vec![
            record(2019, 0, "100", "20"),
            // allowances present but no worked days: excluded from both sums
            record(2019, 1, "500", "0"),
        ];
        let averages = calculate_yearly_averages(&records, CompanyProfile::Transit);

        let year = &averages[&2019];
        assert_eq!(year.allowance_sum, dec("100"));
        assert_eq!(year.days_worked_sum, dec("20"));
        assert_eq!(year.average_daily_allowance, dec("5"));
    }

    // ==========================================================================
    // YA-004: zero divisor produces exactly zero
    // ==========================================================================
    #[test]
    fn test_ya_004_zero_divisor_year_average_is_zero() {
        let records = vec![record(2019, 0, "500", "0"), record(2019, 1, "300", "0")];
        let averages = calculate_yearly_averages(&records, CompanyProfile::Transit);

        let year = &averages[&2019];
        assert_eq!(year.days_worked_sum, Decimal::ZERO);
        assert_eq!(year.average_daily_allowance, Decimal::ZERO);
    }

    // ==========================================================================
    // YA-005: years are independent
    // ==========================================================================
    #[test]
    fn test_ya_005_years_are_independent() {
        let records = vec![record(2019, 0, "1200", "220"), record(2020, 0, "900", "180")];
        let averages = calculate_yearly_averages(&records, CompanyProfile::Transit);

        assert_eq!(averages.len(), 2);
        assert_eq!(averages[&2019].allowance_sum, dec("1200"));
        assert_eq!(averages[&2020].allowance_sum, dec("900"));
        assert_eq!(averages[&2020].average_daily_allowance, dec("5"));
    }

    // ==========================================================================
    // YA-006: profile selects which codes are summed
    // ==========================================================================
    #[test]
    fn test_ya_006_profile_filters_allowance_codes() {
        let mut allowances = HashMap::new();
        allowances.insert("night_work".to_string(), dec("100"));
        allowances.insert("handling".to_string(), dec("50"));

        let records = vec![MonthlyRecord {
            year: 2019,
            month_index: 0,
            allowances,
            days_worked: dec("10"),
            days_vacation: Decimal::ZERO,
            already_paid_rate: Decimal::ZERO,
            voucher_rate: Decimal::ZERO,
            back_pay: Decimal::ZERO,
            note: String::new(),
        }];

        // transit does not know "handling"
        let transit = calculate_yearly_averages(&records, CompanyProfile::Transit);
        assert_eq!(transit[&2019].allowance_sum, dec("100"));

        // logistics does
        let logistics = calculate_yearly_averages(&records, CompanyProfile::Logistics);
        assert_eq!(logistics[&2019].allowance_sum, dec("150"));
    }

    // ==========================================================================
    // YA-007: input order is irrelevant
    // ==========================================================================
    #[test]
    fn test_ya_007_order_independent() {
        let forward = vec![record(2019, 0, "100", "20"), record(2019, 1, "200", "20")];
        let reversed: Vec<MonthlyRecord> = forward.iter().rev().cloned().collect();

        let a = calculate_yearly_averages(&forward, CompanyProfile::Transit);
        let b = calculate_yearly_averages(&reversed, CompanyProfile::Transit);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_input_yields_empty_map() {
        let averages = calculate_yearly_averages(&[], CompanyProfile::Transit);
        assert!(averages.is_empty());
    }
}
