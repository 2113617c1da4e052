use crate::domain::account::LedgerAccount;

/// The portfolio owner: identity plus the append-only list of ledger records
/// for the accounts held in their name.
#[derive(Debug)]
pub struct Client {
    pub name: String,
    pub client_id: String,
    accounts: Vec<LedgerAccount>,
}

impl Client {
    pub fn new(name: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            client_id: client_id.into(),
            accounts: Vec::new(),
        }
    }

    /// Registers a new ledger record. Records are never removed.
    pub fn create_account(&mut self, account: LedgerAccount) {
        self.accounts.push(account);
    }

    pub fn accounts(&self) -> &[LedgerAccount] {
        &self.accounts
    }

    pub fn accounts_mut(&mut self) -> &mut [LedgerAccount] {
        &mut self.accounts
    }
}
