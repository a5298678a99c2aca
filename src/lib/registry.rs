use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{accounts, clients, config, transactions};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("client already exists: {0}")]
    DuplicateId(String),
    #[error("client not found: {0}")]
    ClientNotFound(String),
    #[error("client {0} has active accounts")]
    HasActiveAccounts(String),
    #[error("account not found: {0}")]
    AccountNotFound(u32),
    #[error("account {number} has a non-zero balance: {balance}")]
    NonZeroBalance { number: u32, balance: Decimal },
    #[error(transparent)]
    Transaction(#[from] accounts::TransactionError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountSummary {
    pub branch: String,
    pub number: u32,
    pub owner_name: String,
}

/// Owns every client and account known to the bank.
#[derive(Debug, Default)]
pub struct Registry {
    config: config::Config,
    clients: Vec<clients::Client>,
    accounts: Vec<accounts::Account>,
}

impl Registry {
    pub fn new(config: config::Config) -> Self {
        Self {
            config,
            clients: Vec::new(),
            accounts: Vec::new(),
        }
    }

    pub fn config(&self) -> &config::Config {
        &self.config
    }

    pub fn clients(&self) -> &[clients::Client] {
        &self.clients
    }

    pub fn accounts(&self) -> &[accounts::Account] {
        &self.accounts
    }

    pub fn find_client(&self, id: &str) -> Option<&clients::Client> {
        self.clients.iter().find(|client| client.id == id)
    }

    pub fn create_client(
        &mut self,
        id: &str,
        name: &str,
        birthdate: NaiveDate,
        address: &str,
    ) -> Result<&clients::Client, RegistryError> {
        if self.find_client(id).is_some() {
            tracing::debug!(id, "client already exists");
            return Err(RegistryError::DuplicateId(id.to_string()));
        }

        let index = self.clients.len();
        self.clients
            .push(clients::Client::new(id, name, birthdate, address));
        tracing::info!(id, name, "client created");
        Ok(&self.clients[index])
    }

    pub fn remove_client(&mut self, id: &str) -> Result<(), RegistryError> {
        let Some(index) = self.clients.iter().position(|client| client.id == id) else {
            tracing::debug!(id, "client to remove not found");
            return Err(RegistryError::ClientNotFound(id.to_string()));
        };

        if self.accounts.iter().any(|account| account.owner() == id) {
            tracing::debug!(id, "client still owns accounts");
            return Err(RegistryError::HasActiveAccounts(id.to_string()));
        }

        self.clients.remove(index);
        tracing::info!(id, "client removed");
        Ok(())
    }

    /// Accounts owned by the client, in the order they were opened.
    pub fn client_accounts(&self, id: &str) -> Result<Vec<&accounts::Account>, RegistryError> {
        let client = self
            .find_client(id)
            .ok_or_else(|| RegistryError::ClientNotFound(id.to_string()))?;
        Ok(client
            .accounts()
            .iter()
            .filter_map(|number| self.find_account(*number))
            .collect())
    }

    /// One past the highest account number in use, or 1 when there are none.
    pub fn next_account_number(&self) -> u32 {
        self.accounts
            .iter()
            .map(|account| account.number())
            .max()
            .map_or(1, |max| max + 1)
    }

    pub fn create_account(
        &mut self,
        branch: &str,
        client_id: &str,
    ) -> Result<&accounts::Account, RegistryError> {
        let number = self.next_account_number();
        let Some(client) = self.clients.iter_mut().find(|client| client.id == client_id) else {
            tracing::debug!(client_id, "account owner not found");
            return Err(RegistryError::ClientNotFound(client_id.to_string()));
        };
        client.add_account(number);

        let index = self.accounts.len();
        self.accounts
            .push(accounts::Account::new(number, branch, client_id, &self.config));
        tracing::info!(number, branch, client_id, "account created");
        Ok(&self.accounts[index])
    }

    pub fn close_account(&mut self, number: u32, branch: &str) -> Result<(), RegistryError> {
        let Some(index) = self
            .accounts
            .iter()
            .position(|account| account.number() == number && account.branch() == branch)
        else {
            tracing::debug!(number, branch, "account to close not found");
            return Err(RegistryError::AccountNotFound(number));
        };

        let balance = self.accounts[index].balance();
        if balance > Decimal::ZERO {
            tracing::debug!(number, %balance, "account still holds funds");
            return Err(RegistryError::NonZeroBalance { number, balance });
        }

        let account = self.accounts.remove(index);
        if let Some(owner) = self
            .clients
            .iter_mut()
            .find(|client| client.id == account.owner())
        {
            owner.remove_account(number);
        }
        tracing::info!(number, branch, "account closed");
        Ok(())
    }

    pub fn find_account(&self, number: u32) -> Option<&accounts::Account> {
        self.accounts.iter().find(|account| account.number() == number)
    }

    fn find_account_mut(&mut self, number: u32) -> Result<&mut accounts::Account, RegistryError> {
        self.accounts
            .iter_mut()
            .find(|account| account.number() == number)
            .ok_or(RegistryError::AccountNotFound(number))
    }

    pub fn deposit(
        &mut self,
        number: u32,
        amount: Decimal,
    ) -> Result<transactions::Transaction, RegistryError> {
        self.transact(number, transactions::Kind::Deposit, amount)
    }

    pub fn withdraw(
        &mut self,
        number: u32,
        amount: Decimal,
    ) -> Result<transactions::Transaction, RegistryError> {
        self.transact(number, transactions::Kind::Withdrawal, amount)
    }

    fn transact(
        &mut self,
        number: u32,
        kind: transactions::Kind,
        amount: Decimal,
    ) -> Result<transactions::Transaction, RegistryError> {
        let account = self.find_account_mut(number)?;
        match transactions::apply(kind, amount, account) {
            Ok(transaction) => {
                tracing::info!(number, %kind, %amount, balance = %account.balance(), "transaction applied");
                Ok(transaction)
            }
            Err(error) => {
                tracing::debug!(number, %kind, %amount, %error, "transaction rejected");
                Err(error.into())
            }
        }
    }

    pub fn statement(&self, number: u32) -> Result<String, RegistryError> {
        self.find_account(number)
            .map(accounts::statement::render_statement)
            .ok_or(RegistryError::AccountNotFound(number))
    }

    pub fn list_accounts(&self) -> Vec<AccountSummary> {
        self.accounts
            .iter()
            .map(|account| AccountSummary {
                branch: account.branch().to_string(),
                number: account.number(),
                owner_name: self
                    .find_client(account.owner())
                    .map(|client| client.name.clone())
                    .unwrap_or_default(),
            })
            .collect()
    }
}
