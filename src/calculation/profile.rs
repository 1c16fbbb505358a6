//! Company profile classification.
//!
//! Each supported company profile carries a fixed set of allowance codes
//! that qualify for the vacation-pay average. The profile is a closed enum
//! resolved once per computation; every call site reads the same immutable
//! lookup table instead of repeating per-profile conditionals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Qualifying allowance codes for the transit profile.
const TRANSIT_CODES: &[&str] = &[
    "night_work",
    "standby",
    "productivity",
    "line_allowance",
    "shift_allowance",
    "sunday_service",
];

/// Qualifying allowance codes for the logistics profile.
const LOGISTICS_CODES: &[&str] = &[
    "night_work",
    "standby",
    "productivity",
    "handling",
    "cold_storage",
];

/// Qualifying allowance codes for the clinical profile.
const CLINICAL_CODES: &[&str] = &[
    "night_work",
    "standby",
    "productivity",
    "on_call",
    "holiday_service",
];

/// One of the three supported company profiles.
///
/// The profile only changes which allowance codes are summed into the
/// vacation-pay average; the shape of the computation and of its output is
/// identical across profiles. Structural record fields (days worked, days
/// vacation, rates, back-pay, note) are never part of any profile's code
/// set; they are dedicated fields on the record.
///
/// # Example
///
/// ```
/// use ferie_engine::calculation::CompanyProfile;
///
/// let profile = CompanyProfile::from_identifier("logistics");
/// assert_eq!(profile, CompanyProfile::Logistics);
/// assert!(profile.allowance_codes().contains(&"handling"));
///
/// // unknown identifiers fall back to the default profile
/// assert_eq!(CompanyProfile::from_identifier("acme"), CompanyProfile::Transit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyProfile {
    /// Urban and regional transit operators (the default profile).
    Transit,
    /// Warehouse and logistics operators.
    Logistics,
    /// Clinical and care facilities.
    Clinical,
}

impl CompanyProfile {
    /// Resolves a profile from its identifier, case-insensitively.
    ///
    /// Unknown identifiers deterministically fall back to the default
    /// ([`CompanyProfile::Transit`]) rather than fail: the profile only
    /// selects which columns are summed, not the shape of the output.
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier.trim().to_ascii_lowercase().as_str() {
            "logistics" => Self::Logistics,
            "clinical" => Self::Clinical,
            _ => Self::Transit,
        }
    }

    /// Returns the stable identifier of this profile.
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::Transit => "transit",
            Self::Logistics => "logistics",
            Self::Clinical => "clinical",
        }
    }

    /// Returns the allowance codes that qualify for the vacation-pay
    /// average under this profile.
    pub fn allowance_codes(&self) -> &'static [&'static str] {
        match self {
            Self::Transit => TRANSIT_CODES,
            Self::Logistics => LOGISTICS_CODES,
            Self::Clinical => CLINICAL_CODES,
        }
    }

    /// Sums the qualifying allowances out of a record's allowance map.
    ///
    /// Map entries whose code is not in this profile's set contribute
    /// nothing; codes missing from the map count as zero.
    pub fn qualifying_total(&self, allowances: &HashMap<String, Decimal>) -> Decimal {
        self.allowance_codes()
            .iter()
            .filter_map(|code| allowances.get(*code))
            .copied()
            .sum()
    }
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self::Transit
    }
}
