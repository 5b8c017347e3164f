//! Double-entry bookkeeping logic.
//!
//! This module implements the core ledger functionality:
//! - Accounts, transactions, and transaction entries
//! - Balance calculations with the standard sign convention
//! - Business rule validation for recording transactions
//! - Error types for ledger operations

pub mod balance;
pub mod error;
pub mod service;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use balance::{TypeTotals, signed_change};
pub use error::LedgerError;
pub use service::{AccountRef, LedgerService};
pub use types::{
    Account, AccountType, EntryInput, EntryTotals, EntryType, RecordTransactionInput, Transaction,
    TransactionEntry, TransactionStatus,
};
pub use validation::entry_totals;
