use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    /// National ID (CPF), unique across the registry
    pub id: String,
    pub name: String,
    pub birthdate: NaiveDate,
    pub address: String,
    accounts: Vec<u32>,
}

impl Client {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        birthdate: NaiveDate,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            birthdate,
            address: address.into(),
            accounts: Vec::new(),
        }
    }

    /// Numbers of the accounts this client owns, in the order they were opened.
    pub fn accounts(&self) -> &[u32] {
        &self.accounts
    }

    pub fn has_accounts(&self) -> bool {
        !self.accounts.is_empty()
    }

    pub(crate) fn add_account(&mut self, number: u32) {
        self.accounts.push(number);
    }

    pub(crate) fn remove_account(&mut self, number: u32) {
        self.accounts.retain(|owned| *owned != number);
    }
}
