//! Negotiation scenario models.
//!
//! Input and output types for the negotiation expected-value model used to
//! compare a settlement offer against the expected outcome of litigation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The flat tax-rate assumption applied to the gross claim (23%).
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(23, 0, 0, false, 2);

/// The assumptions of one negotiation scenario.
///
/// `win_probability` is expressed on a 0–100 scale. The engine does not
/// constrain it to that range: it computes with whatever value is given, to
/// remain composable. Constraining input is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegotiationScenario {
    /// Probability of winning the case, 0–100 by caller contract.
    pub win_probability: Decimal,
    /// Estimated litigation cost.
    pub legal_costs: Decimal,
    /// Expected duration of litigation in years.
    pub years_duration: u32,
    /// Flat tax rate applied when evaluating on a net basis.
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,
    /// Evaluate on a net-of-tax basis (`true`) or gross (`false`).
    pub net_mode: bool,
}

fn default_tax_rate() -> Decimal {
    DEFAULT_TAX_RATE
}

/// The derived values of a negotiation scenario.
///
/// `expected_value` and `present_value` are stored unfloored; a negative
/// expected outcome is reported through [`NegotiationOutcome::negative_outcome`]
/// so the contract stays lossless. Zero-flooring is a display concern served
/// by the `*_floored` helpers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegotiationOutcome {
    /// The gross claim under evaluation.
    pub gross_claim: Decimal,
    /// The claim net of the flat tax assumption.
    pub net_claim: Decimal,
    /// The basis actually evaluated: net claim in net mode, gross otherwise.
    pub target: Decimal,
    /// `target × win_probability/100 − legal_costs`, unfloored.
    pub expected_value: Decimal,
    /// Expected value discounted at 3%/year over the litigation duration,
    /// unfloored.
    pub present_value: Decimal,
    /// True when the expected value is negative.
    pub negative_outcome: bool,
}

impl NegotiationOutcome {
    /// The expected value floored at zero, for display.
    pub fn expected_value_floored(&self) -> Decimal {
        self.expected_value.max(Decimal::ZERO)
    }

    /// The present value floored at zero, for display.
    pub fn present_value_floored(&self) -> Decimal {
        self.present_value.max(Decimal::ZERO)
    }
}
