use std::fmt;

use crate::common::money::Money;

/// Discriminant carried by every ledger entry instead of inferring the account
/// flavor from which fields happen to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Saving,
    Checking,
    Cdt,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccountKind::Saving => "saving",
            AccountKind::Checking => "checking",
            AccountKind::Cdt => "cdt",
        };
        f.write_str(name)
    }
}

/// One entry of the ledger mirror: a bookkeeping record of a live account,
/// refreshed from its source instance on every sync.
#[derive(Debug, Clone)]
pub struct LedgerAccount {
    pub client_id: String,
    pub account_id: String,
    pub kind: AccountKind,
    balance: Money,
}

impl LedgerAccount {
    pub fn new(
        client_id: impl Into<String>,
        account_id: impl Into<String>,
        kind: AccountKind,
        balance: Money,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            account_id: account_id.into(),
            kind,
            balance,
        }
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    // Mirror entries only change through here, during a sync.
    pub fn set_balance(&mut self, balance: Money) {
        self.balance = balance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_identity_and_balance() {
        let entry = LedgerAccount::new(
            "CLIENT123",
            "SAVING789",
            AccountKind::Saving,
            Money::from_major(2_000_000),
        );
        assert_eq!(entry.client_id, "CLIENT123");
        assert_eq!(entry.account_id, "SAVING789");
        assert_eq!(entry.kind, AccountKind::Saving);
        assert_eq!(entry.balance(), Money::from_major(2_000_000));
    }

    #[test]
    fn set_balance_overwrites() {
        let mut entry =
            LedgerAccount::new("CLIENT123", "CHECKING321", AccountKind::Checking, Money::zero());
        entry.set_balance(Money::from_major(1_500_000));
        assert_eq!(entry.balance(), Money::from_major(1_500_000));
    }

    #[test]
    fn kind_displays_lowercase() {
        assert_eq!(AccountKind::Saving.to_string(), "saving");
        assert_eq!(AccountKind::Checking.to_string(), "checking");
        assert_eq!(AccountKind::Cdt.to_string(), "cdt");
    }
}
