pub mod text;

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{accounts, registry};

const BIRTHDATE_FORMATS: [&str; 2] = ["%d/%m/%Y", "%d-%m-%Y"];

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CreateClient {
        id: String,
        name: String,
        birthdate: NaiveDate,
        address: String,
    },
    RemoveClient {
        id: String,
    },
    CreateAccount {
        client_id: String,
        /// Falls back to the registry's configured branch
        branch: Option<String>,
    },
    CloseAccount {
        number: u32,
        branch: String,
    },
    Deposit {
        number: u32,
        amount: Decimal,
    },
    Withdraw {
        number: u32,
        amount: Decimal,
    },
    Statement {
        number: u32,
    },
    ListAccounts,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("missing command")]
    MissingCommand,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("missing {0}")]
    MissingField(&'static str),
    #[error("invalid account number: {0}")]
    InvalidAccountNumber(String),
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("invalid birthdate: {0}")]
    InvalidBirthdate(String),
    #[error("unexpected input: {0}")]
    UnexpectedInput(String),
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The address is the last field of create_client and may contain commas.
        let mut parts = s.splitn(5, ',');
        let name = parts
            .next()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(ParseError::MissingCommand)?;

        let command = match name {
            "create_client" | "nu" => {
                let id = field(&mut parts, "client ID")?;
                let name = field(&mut parts, "name")?;
                let birthdate = parse_birthdate(field(&mut parts, "birthdate")?)?;
                let address = field(&mut parts, "address")?;
                Command::CreateClient {
                    id: id.to_string(),
                    name: name.to_string(),
                    birthdate,
                    address: address.to_string(),
                }
            }
            "remove_client" | "ru" => Command::RemoveClient {
                id: field(&mut parts, "client ID")?.to_string(),
            },
            "create_account" | "nc" => Command::CreateAccount {
                client_id: field(&mut parts, "client ID")?.to_string(),
                branch: parts
                    .next()
                    .map(str::trim)
                    .filter(|branch| !branch.is_empty())
                    .map(str::to_string),
            },
            "close_account" | "rc" => Command::CloseAccount {
                number: parse_number(field(&mut parts, "account number")?)?,
                branch: field(&mut parts, "branch")?.to_string(),
            },
            "deposit" | "d" => Command::Deposit {
                number: parse_number(field(&mut parts, "account number")?)?,
                amount: parse_amount(field(&mut parts, "amount")?)?,
            },
            "withdraw" | "s" => Command::Withdraw {
                number: parse_number(field(&mut parts, "account number")?)?,
                amount: parse_amount(field(&mut parts, "amount")?)?,
            },
            "statement" | "e" => Command::Statement {
                number: parse_number(field(&mut parts, "account number")?)?,
            },
            "list_accounts" | "lc" => Command::ListAccounts,
            _ => return Err(ParseError::UnknownCommand(name.to_string())),
        };

        match parts.next() {
            Some(rest) => Err(ParseError::UnexpectedInput(rest.trim().to_string())),
            None => Ok(command),
        }
    }
}

fn field<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<&'a str, ParseError> {
    parts
        .next()
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .ok_or(ParseError::MissingField(name))
}

fn parse_number(s: &str) -> Result<u32, ParseError> {
    s.parse()
        .map_err(|_| ParseError::InvalidAccountNumber(s.to_string()))
}

fn parse_amount(s: &str) -> Result<Decimal, ParseError> {
    s.parse()
        .map_err(|_| ParseError::InvalidAmount(s.to_string()))
}

fn parse_birthdate(s: &str) -> Result<NaiveDate, ParseError> {
    BIRTHDATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        .ok_or_else(|| ParseError::InvalidBirthdate(s.to_string()))
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    ClientCreated {
        id: String,
    },
    ClientRemoved {
        id: String,
    },
    AccountCreated {
        branch: String,
        number: u32,
    },
    AccountClosed {
        number: u32,
    },
    Deposited {
        number: u32,
        amount: Decimal,
        balance: Decimal,
    },
    Withdrew {
        number: u32,
        amount: Decimal,
        balance: Decimal,
    },
    Statement(String),
    Accounts(Vec<registry::AccountSummary>),
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::ClientCreated { id } => write!(f, "client {} created", id),
            Outcome::ClientRemoved { id } => write!(f, "client {} removed", id),
            Outcome::AccountCreated { branch, number } => {
                write!(f, "account created: branch {}, number {}", branch, number)
            }
            Outcome::AccountClosed { number } => write!(f, "account {} closed", number),
            Outcome::Deposited {
                number,
                amount,
                balance,
            } => write!(
                f,
                "deposited {:.2} into account {}, balance {:.2}",
                accounts::round_amount(*amount),
                number,
                accounts::round_amount(*balance)
            ),
            Outcome::Withdrew {
                number,
                amount,
                balance,
            } => write!(
                f,
                "withdrew {:.2} from account {}, balance {:.2}",
                accounts::round_amount(*amount),
                number,
                accounts::round_amount(*balance)
            ),
            Outcome::Statement(statement) => write!(f, "{}", statement),
            Outcome::Accounts(accounts) if accounts.is_empty() => write!(f, "no accounts"),
            Outcome::Accounts(accounts) => {
                for (i, account) in accounts.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    writeln!(f, "{}", "=".repeat(100))?;
                    writeln!(f, "Branch:\t{}", account.branch)?;
                    writeln!(f, "Number:\t{}", account.number)?;
                    write!(f, "Holder:\t{}", account.owner_name)?;
                }
                Ok(())
            }
        }
    }
}

/// Runs a single command against the registry. Failed commands leave the
/// registry untouched.
pub fn execute(
    registry: &mut registry::Registry,
    command: Command,
) -> Result<Outcome, registry::RegistryError> {
    match command {
        Command::CreateClient {
            id,
            name,
            birthdate,
            address,
        } => {
            registry.create_client(&id, &name, birthdate, &address)?;
            Ok(Outcome::ClientCreated { id })
        }
        Command::RemoveClient { id } => {
            registry.remove_client(&id)?;
            Ok(Outcome::ClientRemoved { id })
        }
        Command::CreateAccount { client_id, branch } => {
            let branch = branch.unwrap_or_else(|| registry.config().branch.clone());
            let account = registry.create_account(&branch, &client_id)?;
            Ok(Outcome::AccountCreated {
                branch: account.branch().to_string(),
                number: account.number(),
            })
        }
        Command::CloseAccount { number, branch } => {
            registry.close_account(number, &branch)?;
            Ok(Outcome::AccountClosed { number })
        }
        Command::Deposit { number, amount } => {
            registry.deposit(number, amount)?;
            Ok(Outcome::Deposited {
                number,
                amount,
                balance: balance_of(registry, number)?,
            })
        }
        Command::Withdraw { number, amount } => {
            registry.withdraw(number, amount)?;
            Ok(Outcome::Withdrew {
                number,
                amount,
                balance: balance_of(registry, number)?,
            })
        }
        Command::Statement { number } => registry.statement(number).map(Outcome::Statement),
        Command::ListAccounts => Ok(Outcome::Accounts(registry.list_accounts())),
    }
}

fn balance_of(registry: &registry::Registry, number: u32) -> Result<Decimal, registry::RegistryError> {
    registry
        .find_account(number)
        .map(|account| account.balance())
        .ok_or(registry::RegistryError::AccountNotFound(number))
}
