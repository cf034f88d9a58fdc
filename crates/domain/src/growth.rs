//! Growth lab: reverse-funnel math from a revenue goal back to leads.
//!
//! Works backwards: revenue gap → clients to close → sales calls to hold →
//! leads to generate. Every step rounds up, since a fraction of a client
//! still has to be a whole client.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Inputs to the reverse funnel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FunnelInput {
    pub revenue_goal: f64,
    #[serde(default)]
    pub current_revenue: f64,
    pub average_deal_value: f64,
    /// Share of calls that turn into clients, in `(0, 1]`.
    pub close_rate: f64,
    /// Share of leads that book a call, in `(0, 1]`.
    pub booking_rate: f64,
}

/// Result of [`plan`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FunnelPlan {
    pub revenue_gap: f64,
    pub clients_needed: u64,
    pub calls_needed: u64,
    pub leads_needed: u64,
}

/// Compute the reverse funnel for `input`.
///
/// # Errors
///
/// Returns [`ValidationError::OutOfRange`] when a rate is outside `(0, 1]`,
/// the deal value is not positive, or any amount is negative or not finite.
pub fn plan(input: &FunnelInput) -> Result<FunnelPlan, ValidationError> {
    check_amount("revenue_goal", input.revenue_goal)?;
    check_amount("current_revenue", input.current_revenue)?;
    if !input.average_deal_value.is_finite() || input.average_deal_value <= 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "average_deal_value",
            expected: "a positive number",
        });
    }
    check_rate("close_rate", input.close_rate)?;
    check_rate("booking_rate", input.booking_rate)?;

    let revenue_gap = (input.revenue_goal - input.current_revenue).max(0.0);
    let clients_needed = ceil_count(revenue_gap / input.average_deal_value);
    #[allow(clippy::cast_precision_loss)]
    let calls_needed = ceil_count(clients_needed as f64 / input.close_rate);
    #[allow(clippy::cast_precision_loss)]
    let leads_needed = ceil_count(calls_needed as f64 / input.booking_rate);

    Ok(FunnelPlan {
        revenue_gap,
        clients_needed,
        calls_needed,
        leads_needed,
    })
}

fn check_amount(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            expected: "a non-negative number",
        })
    }
}

fn check_rate(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            expected: "within (0, 1]",
        })
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn ceil_count(value: f64) -> u64 {
    // Guards against 2.0000000000000004 style noise from the division.
    let rounded = (value * 1e9).round() / 1e9;
    rounded.ceil() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> FunnelInput {
        FunnelInput {
            revenue_goal: 20_000.0,
            current_revenue: 5_000.0,
            average_deal_value: 2_500.0,
            close_rate: 0.25,
            booking_rate: 0.1,
        }
    }

    #[test]
    fn should_work_back_from_gap_to_leads() {
        let plan = plan(&input()).unwrap();
        assert!((plan.revenue_gap - 15_000.0).abs() < f64::EPSILON);
        assert_eq!(plan.clients_needed, 6);
        assert_eq!(plan.calls_needed, 24);
        assert_eq!(plan.leads_needed, 240);
    }

    #[test]
    fn should_round_partial_clients_up() {
        let plan = plan(&FunnelInput {
            revenue_goal: 10_000.0,
            current_revenue: 0.0,
            average_deal_value: 3_000.0,
            close_rate: 0.3,
            booking_rate: 0.5,
        })
        .unwrap();
        assert_eq!(plan.clients_needed, 4);
        assert_eq!(plan.calls_needed, 14);
        assert_eq!(plan.leads_needed, 28);
    }

    #[test]
    fn should_need_nothing_when_goal_already_met() {
        let plan = plan(&FunnelInput {
            current_revenue: 25_000.0,
            ..input()
        })
        .unwrap();
        assert!(plan.revenue_gap.abs() < f64::EPSILON);
        assert_eq!(plan.clients_needed, 0);
        assert_eq!(plan.calls_needed, 0);
        assert_eq!(plan.leads_needed, 0);
    }

    #[test]
    fn should_reject_zero_close_rate() {
        let err = plan(&FunnelInput {
            close_rate: 0.0,
            ..input()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange {
                field: "close_rate",
                ..
            }
        ));
    }

    #[test]
    fn should_reject_rate_above_one() {
        let err = plan(&FunnelInput {
            booking_rate: 1.5,
            ..input()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange {
                field: "booking_rate",
                ..
            }
        ));
    }

    #[test]
    fn should_reject_non_positive_deal_value() {
        let err = plan(&FunnelInput {
            average_deal_value: 0.0,
            ..input()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange {
                field: "average_deal_value",
                ..
            }
        ));
    }
}
