use crate::common::error::PortfolioError;
use crate::common::money::Money;
use crate::domain::portfolio::Portfolio;

/// One row of the month-by-month portfolio projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionPoint {
    pub month: u32,
    pub saving: Money,
    pub checking: Money,
    pub cdt: Money,
    pub total: Money,
    /// Interest accrued since month 0 across the whole portfolio.
    pub interest: Money,
}

/// Projects the portfolio month by month from now through `months`.
///
/// Per row: the savings balance compounds monthly, the checking balance stays
/// flat, and the CDT accrues linearly up to its term and is pinned at the
/// matured balance beyond it. A closed CDT stops accruing entirely and is
/// carried flat at its principal.
pub fn project(
    portfolio: &Portfolio,
    months: u32,
) -> Result<Vec<ProjectionPoint>, PortfolioError> {
    let initial_total = portfolio.total_balance();
    let mut points = Vec::with_capacity(months as usize + 1);
    for month in 0..=months {
        let saving = portfolio.saving().balance_with_interest(month)?;
        let checking = portfolio.checking().balance();
        let cdt = if portfolio.cdt().is_active() {
            portfolio.cdt().value_at_month(month)?
        } else {
            portfolio.cdt().principal()
        };
        let total = saving + checking + cdt;
        points.push(ProjectionPoint {
            month,
            saving,
            checking,
            cdt,
            total,
            interest: total - initial_total,
        });
    }
    Ok(points)
}
