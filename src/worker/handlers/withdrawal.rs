use crate::{
    common::{error::PortfolioError, event::TransactTarget, money::Money},
    domain::portfolio::Portfolio,
};

/// Withdraws from the targeted account and returns its new balance.
/// Amount positivity and fund sufficiency are checked by the entity itself.
pub fn handle(
    portfolio: &mut Portfolio,
    target: TransactTarget,
    amount: Money,
) -> Result<Money, PortfolioError> {
    match target {
        TransactTarget::Saving => portfolio.saving_mut().withdraw(amount),
        TransactTarget::Checking => portfolio.checking_mut().withdraw(amount),
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
    fn withdrawal_debits_when_funds_are_sufficient() {
        let mut portfolio = portfolio();

        let balance = handle(
            &mut portfolio,
            TransactTarget::Checking,
            Money::from_major(100_000),
        )
        .unwrap();

        assert_eq!(balance, Money::from_major(1_400_000));
        assert_eq!(portfolio.checking().balance(), Money::from_major(1_400_000));
    }

    #[test]
    fn overdraft_is_rejected_and_changes_nothing() {
        let mut portfolio = portfolio();

        let err = handle(
            &mut portfolio,
            TransactTarget::Saving,
            Money::from_major(5_000_000),
        )
        .unwrap_err();

        assert_eq!(
            err,
            PortfolioError::InsufficientFunds {
                available: Money::from_major(2_000_000),
                requested: Money::from_major(5_000_000),
            }
        );
        assert_eq!(portfolio.saving().balance(), Money::from_major(2_000_000));
    }

    #[test]
    fn failed_withdrawal_is_repeatable_with_identical_outcome() {
        let mut portfolio = portfolio();

        let first = handle(
            &mut portfolio,
            TransactTarget::Saving,
            Money::from_major(5_000_000),
        )
        .unwrap_err();
        let second = handle(
            &mut portfolio,
            TransactTarget::Saving,
            Money::from_major(5_000_000),
        )
        .unwrap_err();

        assert_eq!(first, second);
        assert_eq!(portfolio.saving().balance(), Money::from_major(2_000_000));
    }

    #[test]
    fn non_positive_amount_is_rejected() {
        let mut portfolio = portfolio();

        let err = handle(
            &mut portfolio,
            TransactTarget::Checking,
            Money::from_major(-10),
        )
        .unwrap_err();

        assert_eq!(err, PortfolioError::InvalidAmount(Money::from_major(-10)));
        assert_eq!(portfolio.checking().balance(), Money::from_major(1_500_000));
    }
}
