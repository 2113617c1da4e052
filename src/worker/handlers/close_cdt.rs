use crate::{
    common::{error::PortfolioError, money::Money},
    domain::portfolio::Portfolio,
};

/// Closes the portfolio's CDT and returns the matured balance.
pub fn handle(portfolio: &mut Portfolio) -> Result<Money, PortfolioError> {
    portfolio.cdt_mut().close()
}
