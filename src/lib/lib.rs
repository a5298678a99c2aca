//! In-memory bank: clients, accounts, deposits, withdrawals and statements.

pub mod accounts;
pub mod clients;
pub mod commands;
pub mod config;
pub mod registry;
pub mod transactions;
