use crate::common::money::Money;
use crate::domain::account::{AccountKind, LedgerAccount};
use crate::domain::cdt::Cdt;
use crate::domain::checking::CheckingAccount;
use crate::domain::client::Client;
use crate::domain::saving::SavingAccount;

/// The registry: one client, one account of each kind, and the client's ledger
/// mirror. Owned by the caller and passed by reference — no process-wide state.
///
/// The ledger holds independent records, not references. It goes stale the
/// moment an instance mutates and stays stale until [`Portfolio::sync_ledger`]
/// is called; callers must sync after every successful mutation.
#[derive(Debug)]
pub struct Portfolio {
    client: Client,
    saving: SavingAccount,
    checking: CheckingAccount,
    cdt: Cdt,
}

impl Portfolio {
    /// Assembles the portfolio and registers one ledger record per instance,
    /// in the fixed order cdt, saving, checking.
    pub fn new(
        mut client: Client,
        saving: SavingAccount,
        checking: CheckingAccount,
        cdt: Cdt,
    ) -> Self {
        let client_id = client.client_id.clone();
        client.create_account(LedgerAccount::new(
            client_id.clone(),
            cdt.id(),
            AccountKind::Cdt,
            cdt.principal(),
        ));
        client.create_account(LedgerAccount::new(
            client_id.clone(),
            saving.id(),
            AccountKind::Saving,
            saving.balance(),
        ));
        client.create_account(LedgerAccount::new(
            client_id,
            checking.id(),
            AccountKind::Checking,
            checking.balance(),
        ));
        Self {
            client,
            saving,
            checking,
            cdt,
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn saving(&self) -> &SavingAccount {
        &self.saving
    }

    pub fn saving_mut(&mut self) -> &mut SavingAccount {
        &mut self.saving
    }

    pub fn checking(&self) -> &CheckingAccount {
        &self.checking
    }

    pub fn checking_mut(&mut self) -> &mut CheckingAccount {
        &mut self.checking
    }

    pub fn cdt(&self) -> &Cdt {
        &self.cdt
    }

    pub fn cdt_mut(&mut self) -> &mut Cdt {
        &mut self.cdt
    }

    /// Swaps in a freshly opened CDT. The ledger keeps its record slot; the new
    /// id and principal land there on the next sync.
    pub fn replace_cdt(&mut self, cdt: Cdt) {
        self.cdt = cdt;
    }

    pub fn ledger(&self) -> &[LedgerAccount] {
        self.client.accounts()
    }

    /// Refreshes every ledger record from its source instance. Not automatic:
    /// callers invoke this after each successful mutation.
    pub fn sync_ledger(&mut self) {
        let saving = (self.saving.id().to_owned(), self.saving.balance());
        let checking = (self.checking.id().to_owned(), self.checking.balance());
        let cdt = (self.cdt.id().to_owned(), self.cdt.principal());
        for entry in self.client.accounts_mut() {
            let (account_id, balance) = match entry.kind {
                AccountKind::Saving => saving.clone(),
                AccountKind::Checking => checking.clone(),
                AccountKind::Cdt => cdt.clone(),
            };
            entry.account_id = account_id;
            entry.set_balance(balance);
        }
    }

    /// Sum of the three current balances (the CDT counts at its principal).
    pub fn total_balance(&self) -> Money {
        self.saving.balance() + self.checking.balance() + self.cdt.principal()
    }
}
