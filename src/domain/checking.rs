use crate::common::error::PortfolioError;
use crate::common::money::Money;

/// Checking account: a balance with the same deposit/withdraw contract as the
/// savings account but no interest. Projections always report zero growth.
#[derive(Debug, Clone)]
pub struct CheckingAccount {
    id: String,
    balance: Money,
}

impl CheckingAccount {
    pub fn new(id: impl Into<String>, balance: Money) -> Self {
        Self {
            id: id.into(),
            balance,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn deposit(&mut self, amount: Money) -> Result<Money, PortfolioError> {
        if amount <= Money::zero() {
            return Err(PortfolioError::InvalidAmount(amount));
        }
        self.balance += amount;
        Ok(self.balance)
    }

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
}
