use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::accounts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Deposit,
    Withdrawal,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Deposit => write!(f, "Deposit"),
            Kind::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

/// A transaction that was applied to an account. Rejected attempts never
/// become a `Transaction`.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub kind: Kind,
    /// Always positive, the kind carries the direction
    pub amount: Decimal,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, Default)]
pub struct History {
    transactions: Vec<Transaction>,
}

impl History {
    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn last(&self) -> Option<&Transaction> {
        self.transactions.last()
    }

    fn push(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Validates `amount` against the account and, if every check passes, mutates
/// the balance and appends the transaction to the account history.
pub fn apply(
    kind: Kind,
    amount: Decimal,
    account: &mut accounts::Account,
) -> Result<Transaction, accounts::TransactionError> {
    apply_at(kind, amount, account, chrono::Local::now().naive_local())
}

/// Same as [`apply`] with an explicit timestamp.
pub fn apply_at(
    kind: Kind,
    amount: Decimal,
    account: &mut accounts::Account,
    timestamp: NaiveDateTime,
) -> Result<Transaction, accounts::TransactionError> {
    account.validate(kind, amount)?;

    match kind {
        Kind::Deposit => {
            account.balance += amount;
        }
        Kind::Withdrawal => {
            account.balance -= amount;
            account.withdrawals += 1;
        }
    }

    let transaction = Transaction {
        kind,
        amount,
        timestamp,
    };
    account.history.push(transaction.clone());
    Ok(transaction)
}
