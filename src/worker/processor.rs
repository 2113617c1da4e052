use tracing::{info, warn};

use crate::{
    common::{error::PortfolioError, event::PortfolioEvent, money::Money},
    domain::portfolio::Portfolio,
    worker::handlers::{close_cdt, deposit, open_cdt, withdrawal},
};

#[derive(Debug, Default)]
pub struct Processor {}

impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    /// Dispatches one event to its handler and returns the resulting balance
    /// (new account balance, fresh CDT principal, or matured payout).
    ///
    /// A rejected operation leaves the portfolio untouched; the caller decides
    /// whether to sync the ledger after a success.
    pub fn process(
        &mut self,
        portfolio: &mut Portfolio,
        event: PortfolioEvent,
    ) -> Result<Money, PortfolioError> {
        let (op, result) = match event {
            PortfolioEvent::Deposit { target, amount } => {
                ("deposit", deposit::handle(portfolio, target, amount))
            }
            PortfolioEvent::Withdrawal { target, amount } => {
                ("withdrawal", withdrawal::handle(portfolio, target, amount))
            }
            PortfolioEvent::OpenCdt {
                id,
                term_months,
                principal,
                annual_rate,
            } => (
                "open_cdt",
                open_cdt::handle(portfolio, &id, term_months, principal, annual_rate),
            ),
            PortfolioEvent::CloseCdt => ("close_cdt", close_cdt::handle(portfolio)),
        };

        match &result {
            Ok(balance) => info!(op = %op, balance = %balance, "operation applied"),
            Err(reason) => warn!(op = %op, reason = %reason, "operation rejected"),
        }

        result
    }
}
