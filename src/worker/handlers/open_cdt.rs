use crate::{
    common::{error::PortfolioError, money::Money},
    domain::{cdt::Cdt, portfolio::Portfolio},
};

/// Opens a CDT with the supplied raw terms and installs it in the portfolio,
/// returning its principal. Validation failures leave the current CDT in place.
pub fn handle(
    portfolio: &mut Portfolio,
    id: &str,
    term_months: u32,
    principal: Money,
    annual_rate: f64,
) -> Result<Money, PortfolioError> {
    let cdt = Cdt::open(id, term_months, principal, annual_rate)?;
    let principal = cdt.principal();
    portfolio.replace_cdt(cdt);
    Ok(principal)
}
