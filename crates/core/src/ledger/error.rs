//! Ledger error types for validation failures.

use hearth_shared::types::{AccountId, HouseId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while recording a transaction.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Transaction has no entries at all.
    #[error("Transaction must have entries")]
    EmptyEntries,

    /// Transaction has fewer than two entries.
    #[error("Transaction must have at least 2 entries, got {0}")]
    InsufficientEntries(usize),

    /// Entry amount must be a positive magnitude.
    #[error("Entry amount must be positive, got {amount}")]
    NonPositiveAmount {
        /// The offending amount.
        amount: Decimal,
    },

    /// Entry references an account that does not exist.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// Entry references an account belonging to a different house.
    #[error("Account {account_id} belongs to house {found}, expected house {expected}")]
    CrossHouseAccount {
        /// The offending account.
        account_id: AccountId,
        /// The house the transaction is recorded against.
        expected: HouseId,
        /// The house the account actually belongs to.
        found: HouseId,
    },

    /// Debit and credit totals differ by more than the tolerated epsilon.
    #[error("Transaction is not balanced. Debits: {debits}, Credits: {credits}")]
    UnbalancedEntries {
        /// Total debit amount.
        debits: Decimal,
        /// Total credit amount.
        credits: Decimal,
    },
}
