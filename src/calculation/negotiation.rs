//! Negotiation expected-value model.
//!
//! Computes a risk-and-time-adjusted expected value of litigating the claim,
//! used to judge whether a settlement offer beats going to court.

use rust_decimal::Decimal;

use crate::models::{NegotiationOutcome, NegotiationScenario};

/// The fixed annual discount rate applied over the litigation duration (3%).
pub const DISCOUNT_RATE: Decimal = Decimal::from_parts(103, 0, 0, false, 2);

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Evaluates a negotiation scenario against a gross claim.
///
/// Derivations:
/// - `net_claim = gross_claim × (1 − tax_rate)`
/// - `target` is the net claim in net mode, the gross claim otherwise
/// - `expected_value = target × win_probability/100 − legal_costs`
/// - `present_value = expected_value / 1.03^years_duration`
///
/// The outcome keeps the unfloored values and reports a negative expected
/// value through its `negative_outcome` flag; zero-flooring for display is
/// left to callers. `win_probability` is used as given, including
/// out-of-range values; constraining it to 0-100 is the caller's job.
///
/// # Examples
///
/// ```
/// use ferie_engine::calculation::evaluate_scenario;
/// use ferie_engine::models::NegotiationScenario;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let scenario = NegotiationScenario {
///     win_probability: Decimal::from(90),
///     legal_costs: Decimal::from(1500),
///     years_duration: 3,
///     tax_rate: Decimal::from_str("0.23").unwrap(),
///     net_mode: false,
/// };
///
/// let outcome = evaluate_scenario(Decimal::from(10000), &scenario);
/// assert_eq!(outcome.expected_value, Decimal::from(7500));
/// ```
pub fn evaluate_scenario(
    gross_claim: Decimal,
    scenario: &NegotiationScenario,
) -> NegotiationOutcome {
    let net_claim = gross_claim * (Decimal::ONE - scenario.tax_rate);
    let target = if scenario.net_mode {
        net_claim
    } else {
        gross_claim
    };

    let expected_value = target * scenario.win_probability / ONE_HUNDRED - scenario.legal_costs;

    let mut discount = Decimal::ONE;
    for _ in 0..scenario.years_duration {
        discount *= DISCOUNT_RATE;
    }
    let present_value = expected_value / discount;

    NegotiationOutcome {
        gross_claim,
        net_claim,
        target,
        expected_value,
        present_value,
        negative_outcome: expected_value < Decimal::ZERO,
    }
}
