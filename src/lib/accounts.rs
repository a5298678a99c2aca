pub mod statement;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{config, transactions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransactionError {
    #[error("invalid amount: {0}")]
    InvalidAmount(Decimal),
    #[error("insufficient funds: balance is {balance}, requested {requested}")]
    InsufficientFunds { balance: Decimal, requested: Decimal },
    #[error("withdrawal limit exceeded: limit is {limit}, requested {requested}")]
    LimitExceeded { limit: Decimal, requested: Decimal },
    #[error("maximum number of withdrawals reached: {0}")]
    WithdrawalCountExceeded(u32),
    #[error("balance overflow: balance is {balance}, deposit {requested}")]
    BalanceOverflow { balance: Decimal, requested: Decimal },
}

/// Rounds to cents, halves away from zero, for display.
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[derive(Debug, Clone)]
pub struct Account {
    number: u32,
    branch: String,
    /// Identifier of the owning client
    owner: String,
    pub(crate) balance: Decimal,
    /// Successful withdrawals so far, never reset
    pub(crate) withdrawals: u32,
    withdrawal_limit: Decimal,
    max_withdrawals: u32,
    pub(crate) history: transactions::History,
}

impl Account {
    pub fn new(
        number: u32,
        branch: impl Into<String>,
        owner: impl Into<String>,
        config: &config::Config,
    ) -> Self {
        Self {
            number,
            branch: branch.into(),
            owner: owner.into(),
            balance: Decimal::ZERO,
            withdrawals: 0,
            withdrawal_limit: config.withdrawal_limit,
            max_withdrawals: config.max_withdrawals,
            history: transactions::History::default(),
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn withdrawals(&self) -> u32 {
        self.withdrawals
    }

    pub fn withdrawal_limit(&self) -> Decimal {
        self.withdrawal_limit
    }

    pub fn max_withdrawals(&self) -> u32 {
        self.max_withdrawals
    }

    pub fn history(&self) -> &transactions::History {
        &self.history
    }

    /// Checks whether a transaction of `kind` and `amount` could be applied,
    /// without touching the account.
    pub fn validate(&self, kind: transactions::Kind, amount: Decimal) -> Result<(), TransactionError> {
        match kind {
            transactions::Kind::Deposit => {
                if amount <= Decimal::ZERO {
                    return Err(TransactionError::InvalidAmount(amount));
                }
                if self.balance.checked_add(amount).is_none() {
                    return Err(TransactionError::BalanceOverflow {
                        balance: self.balance,
                        requested: amount,
                    });
                }
            }
            transactions::Kind::Withdrawal => {
                // Order matters: a non-positive amount is only reported as
                // invalid once every other check has passed.
                if amount > self.balance {
                    return Err(TransactionError::InsufficientFunds {
                        balance: self.balance,
                        requested: amount,
                    });
                }
                if amount > self.withdrawal_limit {
                    return Err(TransactionError::LimitExceeded {
                        limit: self.withdrawal_limit,
                        requested: amount,
                    });
                }
                if self.withdrawals >= self.max_withdrawals {
                    return Err(TransactionError::WithdrawalCountExceeded(
                        self.max_withdrawals,
                    ));
                }
                if amount <= Decimal::ZERO {
                    return Err(TransactionError::InvalidAmount(amount));
                }
            }
        }
        Ok(())
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<transactions::Transaction, TransactionError> {
        transactions::apply(transactions::Kind::Deposit, amount, self)
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<transactions::Transaction, TransactionError> {
        transactions::apply(transactions::Kind::Withdrawal, amount, self)
    }
}
