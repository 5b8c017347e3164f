//! Account balance calculations.
//!
//! Balances follow the standard double-entry sign convention: debit entries
//! increase asset/expense accounts, credit entries increase
//! liability/equity/revenue accounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{AccountType, EntryType};

/// Returns the signed balance change an entry produces on an account.
#[must_use]
pub fn signed_change(account_type: AccountType, entry_type: EntryType, amount: Decimal) -> Decimal {
    let debit_increases = account_type.is_debit_normal();
    match entry_type {
        EntryType::Debit if debit_increases => amount,
        EntryType::Credit if !debit_increases => amount,
        _ => -amount,
    }
}

/// Ledger balance totals aggregated per account type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeTotals {
    /// Sum of asset account balances.
    pub assets: Decimal,
    /// Sum of liability account balances.
    pub liabilities: Decimal,
    /// Sum of equity account balances.
    pub equity: Decimal,
    /// Sum of revenue account balances.
    pub revenue: Decimal,
    /// Sum of expense account balances.
    pub expenses: Decimal,
}

impl TypeTotals {
    /// Folds one entry into the totals.
    pub fn add(&mut self, account_type: AccountType, entry_type: EntryType, amount: Decimal) {
        let change = signed_change(account_type, entry_type, amount);
        match account_type {
            AccountType::Asset => self.assets += change,
            AccountType::Liability => self.liabilities += change,
            AccountType::Equity => self.equity += change,
            AccountType::Revenue => self.revenue += change,
            AccountType::Expense => self.expenses += change,
        }
    }
}
