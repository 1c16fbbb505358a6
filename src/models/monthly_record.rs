//! Monthly payroll record model.
//!
//! This module defines the [`MonthlyRecord`] struct, the engine's single
//! input fact sheet: one record per (year, month) pair of one employee.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One month of payroll facts for a single employee.
///
/// Records are keyed by `(year, month_index)`; the caller guarantees at most
/// one record per pair. Months absent from the input are treated as all-zero.
///
/// Monetary fields that are NOT qualifying allowances (the already-paid rate,
/// the voucher rate, and back-pay) are dedicated struct fields rather than
/// entries in the allowance map, so they can never leak into the allowance
/// average by construction.
///
/// # Example
///
/// ```
/// use ferie_engine::models::MonthlyRecord;
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
/// use std::str::FromStr;
///
/// let mut allowances = HashMap::new();
/// allowances.insert("night_work".to_string(), Decimal::from_str("120.50").unwrap());
///
/// let record = MonthlyRecord {
///     year: 2020,
///     month_index: 0,
///     allowances,
///     days_worked: Decimal::from(22),
///     days_vacation: Decimal::ZERO,
///     already_paid_rate: Decimal::ZERO,
///     voucher_rate: Decimal::ZERO,
///     back_pay: Decimal::ZERO,
///     note: String::new(),
/// };
/// assert_eq!(record.sort_key(), (2020, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// The calendar year of this record.
    pub year: i32,
    /// The zero-based month index (0 = January, 11 = December).
    pub month_index: u32,
    /// Variable allowances by code (e.g. "night_work", "standby").
    ///
    /// Which codes qualify for the vacation-pay average depends on the
    /// company profile; entries with codes the profile does not know are
    /// ignored by the classifier.
    #[serde(default)]
    pub allowances: HashMap<String, Decimal>,
    /// Days actually worked this month.
    pub days_worked: Decimal,
    /// Vacation days requested this month.
    pub days_vacation: Decimal,
    /// The rate per eligible vacation day the employer already paid.
    pub already_paid_rate: Decimal,
    /// The meal-voucher rate per eligible vacation day.
    pub voucher_rate: Decimal,
    /// Back-pay for this month.
    ///
    /// Excluded from the allowance average and from the payable total.
    #[serde(default)]
    pub back_pay: Decimal,
    /// Free-text note, informational only.
    #[serde(default)]
    pub note: String,
}

impl MonthlyRecord {
    /// Returns the chronological sort key `(year, month_index)`.
    pub fn sort_key(&self) -> (i32, u32) {
        (self.year, self.month_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn record(year: i32, month_index: u32) -> MonthlyRecord {
        MonthlyRecord {
            year,
            month_index,
            allowances: HashMap::new(),
            days_worked: Decimal::ZERO,
            days_vacation: Decimal::ZERO,
            already_paid_rate: Decimal::ZERO,
            voucher_rate: Decimal::ZERO,
            back_pay: Decimal::ZERO,
            note: String::new(),
        }
    }

    #[test]
    fn test_sort_key_orders_years_before_months() {
        let mut records = vec![record(2021, 0), record(2020, 11), record(2020, 3)];
        records.sort_by_key(MonthlyRecord::sort_key);

        let keys: Vec<(i32, u32)> = records.iter().map(MonthlyRecord::sort_key).collect();
        assert_eq!(keys, vec![(2020, 3), (2020, 11), (2021, 0)]);
    }

    #[test]
    fn test_deserialize_record_with_allowances() {
        let json = r#"{
            "year": 2020,
            "month_index": 5,
            "allowances": {
                "night_work": "120.50",
                "standby": "45.00"
            },
            "days_worked": "21",
            "days_vacation": "4",
            "already_paid_rate": "2.10",
            "voucher_rate": "5.29",
            "back_pay": "0",
            "note": "June payslip"
        }"#;

        let record: MonthlyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.year, 2020);
        assert_eq!(record.month_index, 5);
        assert_eq!(record.allowances["night_work"], dec("120.50"));
        assert_eq!(record.allowances["standby"], dec("45.00"));
        assert_eq!(record.days_worked, dec("21"));
        assert_eq!(record.days_vacation, dec("4"));
        assert_eq!(record.already_paid_rate, dec("2.10"));
        assert_eq!(record.voucher_rate, dec("5.29"));
        assert_eq!(record.note, "June payslip");
    }

    #[test]
    fn test_deserialize_record_with_defaults() {
        // allowances, back_pay and note are optional
        let json = r#"{
            "year": 2019,
            "month_index": 0,
            "days_worked": "22",
            "days_vacation": "0",
            "already_paid_rate": "0",
            "voucher_rate": "0"
        }"#;

        let record: MonthlyRecord = serde_json::from_str(json).unwrap();
        assert!(record.allowances.is_empty());
        assert_eq!(record.back_pay, Decimal::ZERO);
        assert_eq!(record.note, "");
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut original = record(2020, 7);
        original
            .allowances
            .insert("productivity".to_string(), dec("310.25"));
        original.days_worked = dec("20");
        original.days_vacation = dec("10");

        let json = serde_json::to_string(&original).unwrap();
        let restored: MonthlyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn test_decimal_fields_serialize_as_strings() {
        let mut r = record(2020, 0);
        r.days_worked = dec("22");
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"days_worked\":\"22\""));
    }
}
