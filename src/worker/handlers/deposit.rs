use crate::{
    common::{error::PortfolioError, event::TransactTarget, money::Money},
    domain::portfolio::Portfolio,
};

/// Deposits into the targeted account and returns its new balance.
/// The entity re-validates the amount; a rejection leaves the portfolio untouched.
pub fn handle(
    portfolio: &mut Portfolio,
    target: TransactTarget,
    amount: Money,
) -> Result<Money, PortfolioError> {
    match target {
        TransactTarget::Saving => portfolio.saving_mut().deposit(amount),
        TransactTarget::Checking => portfolio.checking_mut().deposit(amount),
    }
}

#[cfg(test)]
mod tests {
    use super::handle;
    use crate::common::error::PortfolioError;
    use crate::common::event::TransactTarget;
    use crate::common::money::Money;
    use crate::domain::cdt::Cdt;
    use crate::domain::checking::CheckingAccount;
    use crate::domain::client::Client;
    use crate::domain::portfolio::Portfolio;
    use crate::domain::saving::SavingAccount;

    fn portfolio() -> Portfolio {
        Portfolio::new(
            Client::new("John Doe", "CLIENT123"),
            SavingAccount::new("SAVING789", Money::from_major(2_000_000), 0.006).unwrap(),
            CheckingAccount::new("CHECKING321", Money::from_major(1_500_000)),
            Cdt::open("CDT001", 12, Money::from_major(1_000_000), 0.05).unwrap(),
        )
    }

    #[test]
    fn deposit_credits_the_saving_account() {
        let mut portfolio = portfolio();

        let balance = handle(
            &mut portfolio,
            TransactTarget::Saving,
            Money::from_major(250_000),
        )
        .unwrap();

        assert_eq!(balance, Money::from_major(2_250_000));
        assert_eq!(portfolio.saving().balance(), Money::from_major(2_250_000));
        // The other instances are untouched.
        assert_eq!(portfolio.checking().balance(), Money::from_major(1_500_000));
        assert_eq!(portfolio.cdt().principal(), Money::from_major(1_000_000));
    }

    #[test]
    fn deposit_credits_the_checking_account() {
        let mut portfolio = portfolio();

        let balance = handle(
            &mut portfolio,
            TransactTarget::Checking,
            Money::from_major(100_000),
        )
        .unwrap();

        assert_eq!(balance, Money::from_major(1_600_000));
        assert_eq!(portfolio.saving().balance(), Money::from_major(2_000_000));
    }

    #[test]
    fn rejected_deposit_changes_nothing() {
        let mut portfolio = portfolio();

        let err = handle(&mut portfolio, TransactTarget::Saving, Money::zero()).unwrap_err();

        assert_eq!(err, PortfolioError::InvalidAmount(Money::zero()));
        assert_eq!(portfolio.saving().balance(), Money::from_major(2_000_000));
        assert_eq!(portfolio.total_balance(), Money::from_major(4_500_000));
    }
}
