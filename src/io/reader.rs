use crate::common::{
    event::{PortfolioEvent, TransactTarget},
    money::Money,
};
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the scenario headers. Only the
/// columns an operation needs are filled; the rest stay empty.
struct CsvRow {
    op: String,
    // saving | checking, for deposit/withdrawal rows
    account: Option<String>,
    // amount for deposit/withdrawal, principal for open_cdt
    amount: Option<String>,
    months: Option<u32>,
    rate: Option<f64>,
    id: Option<String>,
}

/// Reads and validates scenario rows from a CSV reader.
///
/// Supported headers: `op,account,amount,months,rate,id`.
/// `deposit` and `withdrawal` need `account` and `amount`; `open_cdt` needs
/// `amount` (the principal), `months`, `rate`, and `id`; `close_cdt` needs
/// nothing else. Errors carry enough context to point at the bad row.
///
/// # Examples
///
/// ```
/// use portfolio_sim::io::reader::read_events;
/// use portfolio_sim::common::event::{PortfolioEvent, TransactTarget};
/// use csv::ReaderBuilder;
///
/// let data = "op,account,amount,months,rate,id\n\
/// deposit,saving,250000,,,\n\
/// close_cdt,,,,,\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let events: Vec<_> = read_events(&mut rdr).collect();
///
/// assert!(matches!(
///     events[0],
///     Ok(PortfolioEvent::Deposit { target: TransactTarget::Saving, .. })
/// ));
/// assert!(matches!(events[1], Ok(PortfolioEvent::CloseCdt)));
/// ```
pub fn read_events<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<PortfolioEvent, String>> + '_ {
    rdr.deserialize::<CsvRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let op = row.op.trim().to_ascii_lowercase();

        match op.as_str() {
            "deposit" => {
                let target = parse_target(&op, row.account)?;
                let amount = parse_amount(&op, row.amount)?;
                Ok(PortfolioEvent::Deposit { target, amount })
            }
            "withdrawal" => {
                let target = parse_target(&op, row.account)?;
                let amount = parse_amount(&op, row.amount)?;
                Ok(PortfolioEvent::Withdrawal { target, amount })
            }
            "open_cdt" => {
                let principal = parse_amount(&op, row.amount)?;
                let term_months = row
                    .months
                    .ok_or_else(|| "open_cdt missing months".to_string())?;
                let annual_rate = row.rate.ok_or_else(|| "open_cdt missing rate".to_string())?;
                let id = row.id.ok_or_else(|| "open_cdt missing id".to_string())?;
                Ok(PortfolioEvent::OpenCdt {
                    id,
                    term_months,
                    principal,
                    annual_rate,
                })
            }
            "close_cdt" => Ok(PortfolioEvent::CloseCdt),
            other => Err(format!("unknown operation: {other}")),
        }
    })
}

fn parse_target(op: &str, account: Option<String>) -> Result<TransactTarget, String> {
    let raw = account.ok_or_else(|| format!("{op} missing account"))?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "saving" => Ok(TransactTarget::Saving),
        "checking" => Ok(TransactTarget::Checking),
        other => Err(format!("{op} does not apply to account: {other}")),
    }
}

fn parse_amount(op: &str, amount: Option<String>) -> Result<Money, String> {
    let raw = amount.ok_or_else(|| format!("{op} missing amount"))?;
    Money::from_str(&raw).map_err(|e| format!("{op} amount: {e}"))
}
