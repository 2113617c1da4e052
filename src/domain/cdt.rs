use crate::common::error::PortfolioError;
use crate::common::money::Money;

/// Longest term a CDT can be opened for.
pub const MAX_TERM_MONTHS: u32 = 60;
/// Highest annual rate a CDT can be opened at.
pub const MAX_ANNUAL_RATE: f64 = 0.20;

/// Certificado de Depósito a Término: principal locked for a fixed term at a
/// fixed annual rate, paid out with simple (non-compounding) interest.
///
/// Lifecycle is one-way: opened active, closed once. Closing an already-closed
/// CDT is an error, and a closed CDT accepts no further mutation.
#[derive(Debug, Clone)]
pub struct Cdt {
    id: String,
    principal: Money,
    annual_rate: f64,
    term_months: u32,
    active: bool,
}

/// Payout of a CDT at the end of its term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Maturity {
    pub final_balance: Money,
    pub interest: Money,
}

impl Cdt {
    /// Opens a new CDT, validating the raw terms the caller supplies.
    pub fn open(
        id: impl Into<String>,
        term_months: u32,
        principal: Money,
        annual_rate: f64,
    ) -> Result<Self, PortfolioError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(PortfolioError::EmptyId);
        }
        if principal <= Money::zero() {
            return Err(PortfolioError::InvalidAmount(principal));
        }
        if term_months == 0 || term_months > MAX_TERM_MONTHS {
            return Err(PortfolioError::InvalidTerm { got: term_months });
        }
        if !annual_rate.is_finite() || annual_rate <= 0.0 || annual_rate > MAX_ANNUAL_RATE {
            return Err(PortfolioError::InvalidRate { got: annual_rate });
        }
        Ok(Self {
            id,
            principal,
            annual_rate,
            term_months,
            active: true,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn principal(&self) -> Money {
        self.principal
    }

    pub fn annual_rate(&self) -> f64 {
        self.annual_rate
    }

    pub fn term_months(&self) -> u32 {
        self.term_months
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Simple interest prorated by the term length in years:
    /// `principal * rate * (term / 12)`. Pure, and valid whether or not the
    /// CDT is still active.
    pub fn maturity(&self) -> Result<Maturity, PortfolioError> {
        let years = f64::from(self.term_months) / 12.0;
        let interest = Money::try_from_f64(self.principal.to_f64() * self.annual_rate * years)?;
        Ok(Maturity {
            final_balance: self.principal + interest,
            interest,
        })
    }

    /// Projected value at `month`: linear accrual `principal * (rate/12) * month`
    /// up to the term, pinned at the matured balance beyond it. The CDT does not
    /// keep accruing after its term ends.
    pub fn value_at_month(&self, month: u32) -> Result<Money, PortfolioError> {
        if month > self.term_months {
            return Ok(self.maturity()?.final_balance);
        }
        let monthly_rate = self.annual_rate / 12.0;
        let interest =
            Money::try_from_f64(self.principal.to_f64() * monthly_rate * f64::from(month))?;
        Ok(self.principal + interest)
    }

    /// Terminates the CDT and returns the matured balance.
    ///
    /// Closing before the term has elapsed still pays the full matured
    /// interest; there is no early-withdrawal penalty.
    pub fn close(&mut self) -> Result<Money, PortfolioError> {
        if !self.active {
            return Err(PortfolioError::AlreadyClosed(self.id.clone()));
        }
        let matured = self.maturity()?.final_balance;
        self.active = false;
        Ok(matured)
    }
}
