use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;

use crate::http_client::{HttpClient, HttpRequest, NoopHttpClient};
use crate::provider::{FundamentalsProvider, ProviderFault};
use crate::{FundamentalsSnapshot, Ticker, UtcDateTime, ValidationError};

/// Fundamentals provider backed by the Yahoo Finance quoteSummary API.
///
/// With a real transport it fetches and parses the latest annual income
/// statement, balance sheet, and cash-flow figures. With a mock transport
/// it derives deterministic line items from the ticker bytes so the CLI
/// and tests run offline with stable output.
#[derive(Clone)]
pub struct YahooFundamentals {
    http_client: Arc<dyn HttpClient>,
    timeout_ms: u64,
}

impl Default for YahooFundamentals {
    fn default() -> Self {
        Self {
            http_client: Arc::new(NoopHttpClient),
            timeout_ms: 10_000,
        }
    }
}

impl YahooFundamentals {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            ..Self::default()
        }
    }

    fn is_real_client(&self) -> bool {
        !self.http_client.is_mock()
    }

    async fn fetch_real(&self, ticker: &Ticker) -> Result<FundamentalsSnapshot, ProviderFault> {
        let modules = "incomeStatementHistory,balanceSheetHistory,financialData,summaryDetail";
        let endpoint = format!(
            "https://query1.finance.yahoo.com/v10/finance/quoteSummary/{}?modules={}",
            urlencoding::encode(ticker.as_str()),
            modules,
        );

        let request = HttpRequest::get(endpoint)
            .with_header("referer", "https://finance.yahoo.com/")
            .with_timeout_ms(self.timeout_ms);

        let response = self.http_client.execute(request).await.map_err(|error| {
            if error.is_timeout() {
                ProviderFault::timeout(format!("yahoo transport timeout: {}", error.message()))
            } else {
                ProviderFault::unavailable(format!("yahoo transport error: {}", error.message()))
            }
        })?;

        if response.status == 404 {
            return Err(ProviderFault::not_found(format!(
                "no fundamentals for '{ticker}'"
            )));
        }
        if response.status == 429 {
            return Err(ProviderFault::rate_limited("yahoo rate limit exceeded"));
        }
        if !response.is_success() {
            return Err(ProviderFault::unavailable(format!(
                "yahoo upstream returned status {}",
                response.status
            )));
        }

        parse_quote_summary(ticker, &response.body)
    }

    async fn fetch_fake(&self, ticker: &Ticker) -> Result<FundamentalsSnapshot, ProviderFault> {
        // Touch the transport so recording doubles observe the call.
        let request = HttpRequest::get(
            "https://query1.finance.yahoo.com/v10/finance/quoteSummary",
        )
        .with_timeout_ms(self.timeout_ms);
        self.http_client
            .execute(request)
            .await
            .map_err(|error| ProviderFault::unavailable(error.message().to_owned()))?;

        let seed = ticker_seed(ticker);
        let revenue = 50_000.0 + (seed % 400_000) as f64;
        let net_income = revenue * (0.08 + (seed % 17) as f64 / 100.0);
        let shareholder_equity = revenue * (0.30 + (seed % 11) as f64 / 50.0);
        let total_liabilities = revenue * (0.45 + (seed % 13) as f64 / 40.0);
        let free_cash_flow = net_income * (0.85 + (seed % 7) as f64 / 20.0);
        let trailing_pe = Some(12.0 + (seed % 240) as f64 / 10.0);

        FundamentalsSnapshot::new(
            ticker.clone(),
            UtcDateTime::now(),
            revenue,
            net_income,
            shareholder_equity,
            total_liabilities,
            free_cash_flow,
            trailing_pe,
        )
        .map_err(validation_to_fault)
    }
}

impl FundamentalsProvider for YahooFundamentals {
    fn fundamentals<'a>(
        &'a self,
        ticker: Ticker,
    ) -> Pin<Box<dyn Future<Output = Result<FundamentalsSnapshot, ProviderFault>> + Send + 'a>>
    {
        Box::pin(async move {
            if self.is_real_client() {
                self.fetch_real(&ticker).await
            } else {
                self.fetch_fake(&ticker).await
            }
        })
    }
}

fn parse_quote_summary(
    ticker: &Ticker,
    body: &str,
) -> Result<FundamentalsSnapshot, ProviderFault> {
    let parsed: QuoteSummaryResponse = serde_json::from_str(body).map_err(|error| {
        ProviderFault::internal(format!("failed to parse yahoo fundamentals: {error}"))
    })?;

    if let Some(error) = &parsed.quote_summary.error {
        if !error.is_empty() {
            return Err(ProviderFault::unavailable(format!(
                "yahoo API error: {error}"
            )));
        }
    }

    let result = parsed
        .quote_summary
        .result
        .into_iter()
        .next()
        .ok_or_else(|| ProviderFault::not_found(format!("no fundamentals for '{ticker}'")))?;

    let income = result
        .income_statement_history
        .and_then(|history| history.statements.into_iter().next())
        .ok_or_else(|| ProviderFault::not_found("missing income statement"))?;
    let balance = result
        .balance_sheet_history
        .and_then(|history| history.statements.into_iter().next())
        .ok_or_else(|| ProviderFault::not_found("missing balance sheet"))?;

    let revenue = raw(&income.total_revenue)
        .ok_or_else(|| ProviderFault::not_found("missing total revenue"))?;
    let net_income = raw(&income.net_income)
        .ok_or_else(|| ProviderFault::not_found("missing net income"))?;
    let shareholder_equity = raw(&balance.total_stockholder_equity)
        .ok_or_else(|| ProviderFault::not_found("missing shareholder equity"))?;
    let total_liabilities = raw(&balance.total_liabilities)
        .ok_or_else(|| ProviderFault::not_found("missing total liabilities"))?;
    let free_cash_flow = result
        .financial_data
        .as_ref()
        .and_then(|data| raw(&data.free_cash_flow))
        .ok_or_else(|| ProviderFault::not_found("missing free cash flow"))?;
    let trailing_pe = result
        .summary_detail
        .as_ref()
        .and_then(|detail| raw(&detail.trailing_pe));

    // Statement period end when present, fetch time otherwise.
    let as_of = raw(&income.end_date)
        .and_then(|secs| UtcDateTime::from_unix_timestamp(secs as i64).ok())
        .unwrap_or_else(UtcDateTime::now);

    FundamentalsSnapshot::new(
        ticker.clone(),
        as_of,
        revenue,
        net_income,
        shareholder_equity,
        total_liabilities,
        free_cash_flow,
        trailing_pe,
    )
    .map_err(validation_to_fault)
}

fn validation_to_fault(error: ValidationError) -> ProviderFault {
    ProviderFault::internal(error.to_string())
}

fn ticker_seed(ticker: &Ticker) -> u64 {
    ticker.as_str().bytes().fold(0_u64, |acc, byte| {
        acc.wrapping_mul(33).wrapping_add(byte as u64)
    })
}

// Yahoo wraps numeric values in objects with a `raw` field.
fn raw(value: &Option<RawValue>) -> Option<f64> {
    value
        .as_ref()
        .and_then(|wrapper| wrapper.raw)
        .filter(|v| v.is_finite())
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummaryData,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryData {
    #[serde(default)]
    result: Vec<QuoteSummaryResult>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryResult {
    #[serde(rename = "incomeStatementHistory", default)]
    income_statement_history: Option<IncomeStatementHistory>,
    #[serde(rename = "balanceSheetHistory", default)]
    balance_sheet_history: Option<BalanceSheetHistory>,
    #[serde(rename = "financialData", default)]
    financial_data: Option<FinancialData>,
    #[serde(rename = "summaryDetail", default)]
    summary_detail: Option<SummaryDetail>,
}

#[derive(Debug, Deserialize)]
struct IncomeStatementHistory {
    #[serde(rename = "incomeStatementHistory", default)]
    statements: Vec<IncomeStatement>,
}

#[derive(Debug, Deserialize)]
struct IncomeStatement {
    #[serde(rename = "endDate", default)]
    end_date: Option<RawValue>,
    #[serde(rename = "totalRevenue", default)]
    total_revenue: Option<RawValue>,
    #[serde(rename = "netIncome", default)]
    net_income: Option<RawValue>,
}

#[derive(Debug, Deserialize)]
struct BalanceSheetHistory {
    #[serde(rename = "balanceSheetStatements", default)]
    statements: Vec<BalanceSheet>,
}

#[derive(Debug, Deserialize)]
struct BalanceSheet {
    #[serde(rename = "totalStockholderEquity", default)]
    total_stockholder_equity: Option<RawValue>,
    #[serde(rename = "totalLiab", default)]
    total_liabilities: Option<RawValue>,
}

#[derive(Debug, Deserialize)]
struct FinancialData {
    #[serde(rename = "freeCashflow", default)]
    free_cash_flow: Option<RawValue>,
}

#[derive(Debug, Deserialize)]
struct SummaryDetail {
    #[serde(rename = "trailingPE", default)]
    trailing_pe: Option<RawValue>,
}

#[derive(Debug, Deserialize)]
struct RawValue {
    #[serde(default)]
    raw: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_BODY: &str = r#"{
        "quoteSummary": {
            "result": [{
                "incomeStatementHistory": {
                    "incomeStatementHistory": [
                        {"endDate": {"raw": 1696032000}, "totalRevenue": {"raw": 383285000000.0}, "netIncome": {"raw": 96995000000.0}}
                    ]
                },
                "balanceSheetHistory": {
                    "balanceSheetStatements": [
                        {"totalStockholderEquity": {"raw": 62146000000.0}, "totalLiab": {"raw": 290437000000.0}}
                    ]
                },
                "financialData": {"freeCashflow": {"raw": 99584000000.0}},
                "summaryDetail": {"trailingPE": {"raw": 29.1}}
            }],
            "error": null
        }
    }"#;

    #[test]
    fn parses_quote_summary_payload() {
        let ticker = Ticker::parse("AAPL").expect("valid ticker");
        let snapshot = parse_quote_summary(&ticker, SAMPLE_BODY).expect("must parse");

        assert_eq!(snapshot.ticker.as_str(), "AAPL");
        assert!((snapshot.revenue - 383_285_000_000.0).abs() < 1.0);
        assert!((snapshot.free_cash_flow - 99_584_000_000.0).abs() < 1.0);
        assert_eq!(snapshot.trailing_pe, Some(29.1));
        assert!(snapshot.return_on_equity() > 1.0);
        assert_eq!(snapshot.as_of.format_rfc3339(), "2023-09-30T00:00:00Z");
    }

    #[test]
    fn missing_end_date_falls_back_to_fetch_time() {
        let ticker = Ticker::parse("AAPL").expect("valid ticker");
        let body = SAMPLE_BODY.replace(r#""endDate": {"raw": 1696032000}, "#, "");
        let snapshot = parse_quote_summary(&ticker, &body).expect("must parse");
        assert!(snapshot.as_of <= UtcDateTime::now());
    }

    #[test]
    fn missing_line_item_maps_to_not_found() {
        let ticker = Ticker::parse("AAPL").expect("valid ticker");
        let body = r#"{"quoteSummary": {"result": [{}], "error": null}}"#;
        let fault = parse_quote_summary(&ticker, body).expect_err("must fail");
        assert_eq!(fault.kind(), crate::FaultKind::NotFound);
    }

    #[test]
    fn empty_result_maps_to_not_found() {
        let ticker = Ticker::parse("ZZZZZ").expect("valid ticker");
        let body = r#"{"quoteSummary": {"result": [], "error": null}}"#;
        let fault = parse_quote_summary(&ticker, body).expect_err("must fail");
        assert_eq!(fault.kind(), crate::FaultKind::NotFound);
        assert!(fault.message().contains("ZZZZZ"));
    }

    #[tokio::test]
    async fn fake_mode_is_deterministic_per_ticker() {
        let provider = YahooFundamentals::default();
        let ticker = Ticker::parse("MSFT").expect("valid ticker");

        let first = provider
            .fundamentals(ticker.clone())
            .await
            .expect("fake fetch succeeds");
        let second = provider
            .fundamentals(ticker)
            .await
            .expect("fake fetch succeeds");

        assert_eq!(first.revenue, second.revenue);
        assert_eq!(first.free_cash_flow, second.free_cash_flow);
        assert!(first.shareholder_equity > 0.0);
    }
}
