//! Discounted-cash-flow intrinsic value estimate.

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// DCF projection parameters as fractional rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DcfParams {
    /// Annual cash-flow growth rate (0.05 = 5%).
    pub growth_rate: f64,
    /// Annual discount rate (0.08 = 8%).
    pub discount_rate: f64,
    /// Number of projected years, at least 1.
    pub horizon_years: u32,
}

impl Default for DcfParams {
    /// 5% growth, 8% discount, 10-year horizon.
    fn default() -> Self {
        Self {
            growth_rate: 0.05,
            discount_rate: 0.08,
            horizon_years: 10,
        }
    }
}

/// Estimate present value of `horizon_years` projected cash flows.
///
/// Year index 0 is the base year: the first projected cash flow equals
/// the base free cash flow and is discounted at exponent 0, i.e. not at
/// all. This "today's run-rate" convention is deliberate and must be
/// preserved for reproducibility; most DCF models instead discount the
/// first projected year at exponent 1.
///
/// Negative free cash flow yields a negative valuation, not an error.
/// Pure function; identical inputs produce identical output.
pub fn estimate_intrinsic_value(
    free_cash_flow: f64,
    params: &DcfParams,
) -> Result<f64, ValidationError> {
    if !free_cash_flow.is_finite() {
        return Err(ValidationError::NonFiniteValue {
            field: "free_cash_flow",
        });
    }
    if !params.growth_rate.is_finite() {
        return Err(ValidationError::NonFiniteValue {
            field: "growth_rate",
        });
    }
    if !params.discount_rate.is_finite() {
        return Err(ValidationError::NonFiniteValue {
            field: "discount_rate",
        });
    }
    if params.discount_rate <= -1.0 {
        return Err(ValidationError::DiscountRateTooLow {
            value: params.discount_rate,
        });
    }
    if params.horizon_years < 1 {
        return Err(ValidationError::ZeroHorizon);
    }

    let mut present_value = 0.0;
    for year in 0..params.horizon_years {
        let projected = free_cash_flow * (1.0 + params.growth_rate).powi(year as i32);
        let discounted = projected / (1.0 + params.discount_rate).powi(year as i32);
        present_value += discounted;
    }

    Ok(present_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rates_sum_to_flat_cash_flows() {
        let params = DcfParams {
            growth_rate: 0.0,
            discount_rate: 0.0,
            horizon_years: 10,
        };
        let value = estimate_intrinsic_value(1000.0, &params).expect("must compute");
        assert!((value - 10_000.0).abs() < 1e-9);
    }

    #[test]
    fn default_params_match_reference_projection() {
        let value =
            estimate_intrinsic_value(1000.0, &DcfParams::default()).expect("must compute");

        let mut expected = 0.0;
        for i in 0..10 {
            expected += 1000.0 * 1.05_f64.powi(i) / 1.08_f64.powi(i);
        }
        assert!((value - expected).abs() < 1e-9);
        // Base year is undiscounted, so the sum exceeds nine discounted years
        // plus the bare base cash flow.
        assert!((value - 8838.2376).abs() < 1e-3);
    }

    #[test]
    fn base_year_is_undiscounted() {
        let params = DcfParams {
            growth_rate: 0.05,
            discount_rate: 0.08,
            horizon_years: 1,
        };
        let value = estimate_intrinsic_value(1234.5, &params).expect("must compute");
        assert!((value - 1234.5).abs() < 1e-9);
    }

    #[test]
    fn negative_cash_flow_is_not_an_error() {
        let value =
            estimate_intrinsic_value(-500.0, &DcfParams::default()).expect("must compute");
        assert!(value < 0.0);
    }

    #[test]
    fn rejects_discount_rate_at_or_below_negative_one() {
        let params = DcfParams {
            growth_rate: 0.05,
            discount_rate: -1.0,
            horizon_years: 10,
        };
        let err = estimate_intrinsic_value(1000.0, &params).expect_err("must fail");
        assert!(matches!(err, ValidationError::DiscountRateTooLow { .. }));
    }

    #[test]
    fn rejects_zero_horizon() {
        let params = DcfParams {
            horizon_years: 0,
            ..DcfParams::default()
        };
        let err = estimate_intrinsic_value(1000.0, &params).expect_err("must fail");
        assert!(matches!(err, ValidationError::ZeroHorizon));
    }

    #[test]
    fn identical_inputs_yield_identical_output() {
        let params = DcfParams::default();
        let first = estimate_intrinsic_value(777.7, &params).expect("must compute");
        let second = estimate_intrinsic_value(777.7, &params).expect("must compute");
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
