//! Ledger domain types for transaction creation and validation.

use chrono::{DateTime, Utc};
use hearth_shared::types::{AccountId, EntryId, HouseId, TransactionId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account classification in the chart of accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Asset account (debit-normal).
    Asset,
    /// Liability account (credit-normal).
    Liability,
    /// Equity account (credit-normal).
    Equity,
    /// Revenue account (credit-normal).
    Revenue,
    /// Expense account (debit-normal).
    Expense,
}

impl AccountType {
    /// Returns true for accounts whose balance grows with debits.
    #[must_use]
    pub const fn is_debit_normal(self) -> bool {
        matches!(self, Self::Asset | Self::Expense)
    }

    /// Returns the string representation of the account type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asset => "asset",
            Self::Liability => "liability",
            Self::Equity => "equity",
            Self::Revenue => "revenue",
            Self::Expense => "expense",
        }
    }
}

/// Entry type: either Debit or Credit.
///
/// In double-entry bookkeeping:
/// - Debits increase asset/expense accounts, decrease liability/equity/revenue accounts
/// - Credits decrease asset/expense accounts, increase liability/equity/revenue accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Debit entry.
    Debit,
    /// Credit entry.
    Credit,
}

/// Transaction status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Transaction has been submitted but not yet approved.
    Pending,
    /// Transaction has been approved and counts toward balances.
    Completed,
    /// Transaction was rejected and is kept for the record only.
    Rejected,
}

impl TransactionStatus {
    /// Returns true if the transaction can no longer change.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Rejected)
    }
}

/// A chart of accounts entry owned by a house.
///
/// Accounts form a tree through `parent_id`; leaf accounts receive entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// The house that owns this account.
    pub house_id: HouseId,
    /// Account name.
    pub name: String,
    /// Account classification.
    pub account_type: AccountType,
    /// Optional parent account for sub-account trees.
    pub parent_id: Option<AccountId>,
}

/// A financial transaction consisting of balanced entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// The house this transaction belongs to.
    pub house_id: HouseId,
    /// Transaction description.
    pub description: String,
    /// Total amount (sum of debit entries).
    pub amount: Decimal,
    /// User who created the transaction.
    pub created_by: UserId,
    /// User who approved the transaction.
    pub approved_by: UserId,
    /// Current status.
    pub status: TransactionStatus,
    /// When the transaction was approved.
    pub approved_at: Option<DateTime<Utc>>,
    /// When the transaction was created.
    pub created_at: DateTime<Utc>,
}

/// A single double-entry line within a transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionEntry {
    /// Unique identifier.
    pub id: EntryId,
    /// The transaction this entry belongs to.
    pub transaction_id: TransactionId,
    /// The account affected by this entry.
    pub account_id: AccountId,
    /// Amount (positive magnitude).
    pub amount: Decimal,
    /// Whether this is a debit or credit.
    pub entry_type: EntryType,
    /// Optional description for this line item.
    pub description: Option<String>,
}

impl TransactionEntry {
    /// Returns the signed amount (positive for debit, negative for credit).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.entry_type {
            EntryType::Debit => self.amount,
            EntryType::Credit => -self.amount,
        }
    }
}

/// Input for a single entry line when recording a transaction.
#[derive(Debug, Clone)]
pub struct EntryInput {
    /// The account to post to.
    pub account_id: AccountId,
    /// The amount (must be positive).
    pub amount: Decimal,
    /// Whether this is a debit or credit entry.
    pub entry_type: EntryType,
    /// Optional description for this line item.
    pub description: Option<String>,
}

/// Input for recording a new transaction.
#[derive(Debug, Clone)]
pub struct RecordTransactionInput {
    /// The house this transaction belongs to.
    pub house_id: HouseId,
    /// Transaction description.
    pub description: String,
    /// User recording the transaction.
    pub created_by: UserId,
    /// User approving the transaction.
    pub approved_by: UserId,
    /// The entry lines (must have at least 2).
    pub entries: Vec<EntryInput>,
}

/// Debit and credit totals for a set of entries.
#[derive(Debug, Clone, Copy)]
pub struct EntryTotals {
    /// Total debit amount.
    pub debits: Decimal,
    /// Total credit amount.
    pub credits: Decimal,
}

impl EntryTotals {
    /// Creates totals from debit and credit sums.
    #[must_use]
    pub const fn new(debits: Decimal, credits: Decimal) -> Self {
        Self { debits, credits }
    }

    /// Returns the absolute difference between debits and credits.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        (self.debits - self.credits).abs()
    }

    /// Returns true if debits and credits agree within `epsilon`.
    #[must_use]
    pub fn is_balanced_within(&self, epsilon: Decimal) -> bool {
        self.difference() <= epsilon
    }
}
