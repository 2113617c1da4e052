use std::io::{BufWriter, stdout};

use crate::{
    common::error::{AppError, PortfolioError},
    common::money::Money,
    domain::{
        cdt::Cdt, checking::CheckingAccount, client::Client, portfolio::Portfolio,
        saving::SavingAccount,
    },
    io::{reader, writer},
};

const DEFAULT_HORIZON_MONTHS: u32 = 12;

/// The portfolio every scenario starts from: John Doe holding a savings
/// account at 0.6% monthly, a checking account, and a one-year CDT at 5% annual.
pub fn demo_portfolio() -> Result<Portfolio, PortfolioError> {
    Ok(Portfolio::new(
        Client::new("John Doe", "CLIENT123"),
        SavingAccount::new("SAVING789", Money::from_major(2_000_000), 0.006)?,
        CheckingAccount::new("CHECKING321", Money::from_major(1_500_000)),
        Cdt::open("CDT001", 12, Money::from_major(1_000_000), 0.05)?,
    ))
}

/// Plays a scenario CSV against the demo portfolio and prints the report.
///
/// `args[1]` is the scenario path; `args[2]` optionally overrides the
/// projection horizon in months. Rejected operations are logged and skipped
/// (the ledger is only synced after a success); malformed rows stop the run.
pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    if args.len() < 2 {
        return Err(AppError::MissingArg);
    }
    let input_path = &args[1];
    let horizon = match args.get(2) {
        Some(raw) => raw
            .parse::<u32>()
            .map_err(|_| AppError::Horizon(raw.clone()))?,
        None => DEFAULT_HORIZON_MONTHS,
    };

    let file = std::fs::File::open(input_path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let mut portfolio = demo_portfolio()?;
    let mut processor = crate::worker::processor::Processor::new();

    for event in reader::read_events(&mut reader) {
        let event = event.map_err(AppError::Parse)?;
        // Rejections were already logged by the processor; the mirror only
        // moves after a successful mutation.
        if processor.process(&mut portfolio, event).is_ok() {
            portfolio.sync_ledger();
        }
    }

    // After playing the scenario, write the ledger and projection to stdout
    let stdout = stdout();
    let writer = BufWriter::new(stdout.lock());
    writer::write_report(writer, &portfolio, horizon)?;

    Ok(())
}
