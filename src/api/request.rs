//! Request types for the claim engine API.
//!
//! Monetary and day-count fields deserialize through
//! [`LenientDecimal`](crate::calculation::LenientDecimal): JSON numbers,
//! locale-formatted strings (`"1.234,56"`), null and missing values are all
//! accepted, with anything unparseable coerced to zero. The upstream
//! data-entry grid and the OCR merge routinely produce partial rows, so the
//! boundary absorbs them instead of rejecting the request.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::calculation::LenientDecimal;
use crate::models::{ClaimConfiguration, MonthlyRecord, NegotiationScenario, DEFAULT_TAX_RATE};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimRequest {
    /// Company-profile identifier (e.g. "transit").
    ///
    /// Unknown or missing identifiers resolve to the default profile.
    #[serde(default)]
    pub profile: String,
    /// The claim configuration.
    pub configuration: ClaimConfigurationRequest,
    /// The monthly payroll records, in any order.
    pub records: Vec<MonthlyRecordRequest>,
}

/// Claim configuration in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimConfigurationRequest {
    /// First year for which a payable credit is claimed.
    pub start_claim_year: i32,
    /// The vacation day cap for the whole window.
    pub vacation_cap_days: LenientDecimal,
    /// Whether the meal-voucher credit is included.
    pub include_voucher_credit: bool,
    /// Whether the already-paid deduction is shown (display-only).
    #[serde(default = "default_true")]
    pub include_already_paid_deduction: bool,
}

fn default_true() -> bool {
    true
}

/// One monthly record in a calculation request.
///
/// Every numeric field is optional and lenient; a missing month field is an
/// empty cell, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRecordRequest {
    /// The calendar year.
    pub year: i32,
    /// The zero-based month index (0 = January).
    pub month_index: u32,
    /// Variable allowances by code.
    #[serde(default)]
    pub allowances: HashMap<String, LenientDecimal>,
    /// Days actually worked.
    #[serde(default)]
    pub days_worked: LenientDecimal,
    /// Vacation days requested.
    #[serde(default)]
    pub days_vacation: LenientDecimal,
    /// Rate per eligible day the employer already paid.
    #[serde(default)]
    pub already_paid_rate: LenientDecimal,
    /// Meal-voucher rate per eligible day.
    #[serde(default)]
    pub voucher_rate: LenientDecimal,
    /// Back-pay, excluded from the average and the payable total.
    #[serde(default)]
    pub back_pay: LenientDecimal,
    /// Free-text note.
    #[serde(default)]
    pub note: String,
}

/// Request body for the `/negotiate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NegotiationRequest {
    /// The gross claim under evaluation, typically the aggregate gross
    /// amount of a previous `/calculate` response.
    pub gross_claim: LenientDecimal,
    /// The negotiation assumptions.
    pub scenario: NegotiationScenarioRequest,
}

/// Negotiation scenario in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NegotiationScenarioRequest {
    /// Probability of winning, 0-100.
    pub win_probability: LenientDecimal,
    /// Estimated litigation cost.
    #[serde(default)]
    pub legal_costs: LenientDecimal,
    /// Expected litigation duration in years.
    pub years_duration: u32,
    /// Flat tax rate; defaults to the engine's 23% assumption.
    #[serde(default = "default_tax_rate")]
    pub tax_rate: LenientDecimal,
    /// Evaluate net of tax (`true`) or gross (`false`).
    #[serde(default)]
    pub net_mode: bool,
}

fn default_tax_rate() -> LenientDecimal {
    LenientDecimal(DEFAULT_TAX_RATE)
}

impl From<ClaimConfigurationRequest> for ClaimConfiguration {
    fn from(req: ClaimConfigurationRequest) -> Self {
        ClaimConfiguration {
            start_claim_year: req.start_claim_year,
            vacation_cap_days: req.vacation_cap_days.value(),
            include_voucher_credit: req.include_voucher_credit,
            include_already_paid_deduction: req.include_already_paid_deduction,
        }
    }
}

impl From<MonthlyRecordRequest> for MonthlyRecord {
    fn from(req: MonthlyRecordRequest) -> Self {
        MonthlyRecord {
            year: req.year,
            month_index: req.month_index,
            allowances: req
                .allowances
                .into_iter()
                .map(|(code, amount)| (code, amount.value()))
                .collect(),
            days_worked: req.days_worked.value(),
            days_vacation: req.days_vacation.value(),
            already_paid_rate: req.already_paid_rate.value(),
            voucher_rate: req.voucher_rate.value(),
            back_pay: req.back_pay.value(),
            note: req.note,
        }
    }
}

impl From<NegotiationScenarioRequest> for NegotiationScenario {
    fn from(req: NegotiationScenarioRequest) -> Self {
        NegotiationScenario {
            win_probability: req.win_probability.value(),
            legal_costs: req.legal_costs.value(),
            years_duration: req.years_duration,
            tax_rate: req.tax_rate.value(),
            net_mode: req.net_mode,
        }
    }
}
