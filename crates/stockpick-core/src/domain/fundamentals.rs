use serde::{Deserialize, Serialize};

use crate::{Ticker, UtcDateTime, ValidationError};

/// Immutable fundamentals snapshot for one ticker at one point in time.
///
/// The derived ratios (return on equity, debt to equity) are computed once
/// by the constructor and cached on the record; a zero-equity statement is
/// rejected up front rather than producing NaN ratios downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundamentalsSnapshot {
    pub ticker: Ticker,
    pub as_of: UtcDateTime,
    pub revenue: f64,
    pub net_income: f64,
    pub shareholder_equity: f64,
    pub total_liabilities: f64,
    pub free_cash_flow: f64,
    pub trailing_pe: Option<f64>,
    return_on_equity: f64,
    debt_to_equity: f64,
}

impl FundamentalsSnapshot {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ticker: Ticker,
        as_of: UtcDateTime,
        revenue: f64,
        net_income: f64,
        shareholder_equity: f64,
        total_liabilities: f64,
        free_cash_flow: f64,
        trailing_pe: Option<f64>,
    ) -> Result<Self, ValidationError> {
        validate_finite("revenue", revenue)?;
        validate_finite("net_income", net_income)?;
        validate_finite("shareholder_equity", shareholder_equity)?;
        validate_finite("total_liabilities", total_liabilities)?;
        validate_finite("free_cash_flow", free_cash_flow)?;
        validate_optional_finite("trailing_pe", trailing_pe)?;

        if shareholder_equity == 0.0 {
            return Err(ValidationError::ZeroEquity);
        }

        Ok(Self {
            ticker,
            as_of,
            revenue,
            net_income,
            shareholder_equity,
            total_liabilities,
            free_cash_flow,
            trailing_pe,
            return_on_equity: net_income / shareholder_equity,
            debt_to_equity: total_liabilities / shareholder_equity,
        })
    }

    /// Net income over shareholder equity, cached at construction.
    pub const fn return_on_equity(&self) -> f64 {
        self.return_on_equity
    }

    /// Total liabilities over shareholder equity, cached at construction.
    pub const fn debt_to_equity(&self) -> f64 {
        self.debt_to_equity
    }
}

fn validate_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    Ok(())
}

fn validate_optional_finite(
    field: &'static str,
    value: Option<f64>,
) -> Result<(), ValidationError> {
    if let Some(value) = value {
        validate_finite(field, value)?;
    }
    Ok(())
}
