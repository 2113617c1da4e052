use std::io::Write;

use crate::common::error::AppError;
use crate::domain::portfolio::Portfolio;
use crate::domain::projection::{self, ProjectionPoint};

#[derive(serde::Serialize)]
/// Internal CSV output row for one ledger record.
///
/// Headers written (in this order): `client,account,kind,balance`.
/// The balance is formatted to 4 decimal places as a string.
struct LedgerRow {
    client: String,
    account: String,
    kind: String,
    balance: String,
}

#[derive(serde::Serialize)]
/// Internal CSV output row for one projection month.
///
/// Headers written (in this order): `month,saving,checking,cdt,total,interest`.
struct ProjectionRow {
    month: u32,
    saving: String,
    checking: String,
    cdt: String,
    total: String,
    interest: String,
}

/// Writes the ledger mirror to a CSV writer, one row per record in ledger
/// order (cdt, saving, checking).
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use portfolio_sim::domain::{
///     cdt::Cdt, checking::CheckingAccount, client::Client, portfolio::Portfolio,
///     saving::SavingAccount,
/// };
/// use portfolio_sim::common::money::Money;
/// use portfolio_sim::io::writer::write_ledger;
///
/// let portfolio = Portfolio::new(
///     Client::new("John Doe", "CLIENT123"),
///     SavingAccount::new("SAVING789", Money::from_major(2_000_000), 0.006).unwrap(),
///     CheckingAccount::new("CHECKING321", Money::from_major(1_500_000)),
///     Cdt::open("CDT001", 12, Money::from_major(1_000_000), 0.05).unwrap(),
/// );
///
/// let mut out = Vec::new();
/// write_ledger(&mut out, &portfolio).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert!(s.starts_with("client,account,kind,balance\n"));
/// assert!(s.contains("CLIENT123,CDT001,cdt,1000000.0000"));
/// ```
pub fn write_ledger<W: Write>(writer: W, portfolio: &Portfolio) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for entry in portfolio.ledger() {
        let row = LedgerRow {
            client: entry.client_id.clone(),
            account: entry.account_id.clone(),
            kind: entry.kind.to_string(),
            balance: entry.balance().to_string_4dp(),
        };
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes a month-by-month projection table to a CSV writer, monetary columns
/// formatted with exactly 4 decimal places.
pub fn write_projection<W: Write>(
    writer: W,
    points: &[ProjectionPoint],
) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for point in points {
        let row = ProjectionRow {
            month: point.month,
            saving: point.saving.to_string_4dp(),
            checking: point.checking.to_string_4dp(),
            cdt: point.cdt.to_string_4dp(),
            total: point.total.to_string_4dp(),
            interest: point.interest.to_string_4dp(),
        };
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the full report: the ledger table, a blank line, then the projection
/// table for `months` months ahead.
pub fn write_report<W: Write>(
    mut writer: W,
    portfolio: &Portfolio,
    months: u32,
) -> Result<(), AppError> {
    write_ledger(&mut writer, portfolio)?;
    writer.write_all(b"\n")?;
    let points = projection::project(portfolio, months)?;
    write_projection(&mut writer, &points)?;
    Ok(())
}
