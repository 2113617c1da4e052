use crate::common::money::Money;
use crate::domain::cdt;

/// Domain failure raised by entity operations and handlers.
///
/// Every variant is recoverable and caller-visible; a failed operation leaves
/// the portfolio exactly as it was.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PortfolioError {
    #[error("amount must be positive, got {0}")]
    InvalidAmount(Money),
    #[error("insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds { available: Money, requested: Money },
    #[error("term must be between 1 and {max} months, got {got}", max = cdt::MAX_TERM_MONTHS)]
    InvalidTerm { got: u32 },
    #[error("annual rate must be within (0, {max}], got {got}", max = cdt::MAX_ANNUAL_RATE)]
    InvalidRate { got: f64 },
    #[error("term deposit {0} is already closed")]
    AlreadyClosed(String),
    #[error("balance out of representable range: {0}")]
    InvalidBalance(f64),
    #[error("term deposit id must not be empty")]
    EmptyId,
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("missing input csv path. usage: cargo run -- <scenario.csv> [months]")]
    MissingArg,
    #[error("invalid projection horizon: {0}")]
    Horizon(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("operation rejected: {0}")]
    Domain(#[from] PortfolioError),
}
