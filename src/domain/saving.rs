use crate::common::error::PortfolioError;
use crate::common::money::Money;

/// Savings account: a balance plus a monthly rate, compounded monthly.
///
/// The rate is a fraction (0.006 means 0.6% per month). The balance never goes
/// negative: withdrawals that would overdraw are rejected up front.
#[derive(Debug, Clone)]
pub struct SavingAccount {
    id: String,
    balance: Money,
    monthly_rate: f64,
}

impl SavingAccount {
    pub fn new(
        id: impl Into<String>,
        balance: Money,
        monthly_rate: f64,
    ) -> Result<Self, PortfolioError> {
        if !monthly_rate.is_finite() || monthly_rate < 0.0 {
            return Err(PortfolioError::InvalidRate { got: monthly_rate });
        }
        Ok(Self {
            id: id.into(),
            balance,
            monthly_rate,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn monthly_rate(&self) -> f64 {
        self.monthly_rate
    }

    /// Credits a positive amount and returns the new balance.
    pub fn deposit(&mut self, amount: Money) -> Result<Money, PortfolioError> {
        if amount <= Money::zero() {
            return Err(PortfolioError::InvalidAmount(amount));
        }
        self.balance += amount;
        Ok(self.balance)
    }

    /// Debits a positive amount, checking funds first, and returns the new balance.
    pub fn withdraw(&mut self, amount: Money) -> Result<Money, PortfolioError> {
        if amount <= Money::zero() {
            return Err(PortfolioError::InvalidAmount(amount));
        }
        if amount > self.balance {
            return Err(PortfolioError::InsufficientFunds {
                available: self.balance,
                requested: amount,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }

    /// Interest accrued after `months` months of monthly compounding,
    /// principal excluded: `balance * ((1 + rate)^months - 1)`.
    ///
    /// Pure; does not touch the balance.
    pub fn interest(&self, months: u32) -> Result<Money, PortfolioError> {
        if self.monthly_rate == 0.0 || self.balance == Money::zero() || months == 0 {
            return Ok(Money::zero());
        }
        let factor = (1.0 + self.monthly_rate).powf(f64::from(months)) - 1.0;
        Money::try_from_f64(self.balance.to_f64() * factor)
    }

    /// Balance plus accrued interest after `months` months.
    pub fn balance_with_interest(&self, months: u32) -> Result<Money, PortfolioError> {
        Ok(self.balance + self.interest(months)?)
    }
}
