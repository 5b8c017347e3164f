//! Ledger service for transaction validation.
//!
//! Pure business logic with no storage dependencies: account resolution is
//! injected as a closure so the same checks run against any store.

use hearth_shared::types::AccountId;
use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::{EntryTotals, RecordTransactionInput};
use super::validation::{check_balanced, entry_totals, validate_entry_shape};

/// The account facts needed to validate an entry.
#[derive(Debug, Clone, Copy)]
pub struct AccountRef {
    /// The account ID.
    pub id: AccountId,
    /// The house the account belongs to.
    pub house_id: hearth_shared::types::HouseId,
    /// The account classification.
    pub account_type: super::types::AccountType,
}

/// Stateless service validating transactions before they are persisted.
pub struct LedgerService;

impl LedgerService {
    /// Validates a transaction input end to end.
    ///
    /// Steps, in order:
    /// 1. entry count (at least 2) and positive amounts
    /// 2. every account exists and belongs to the transaction's house
    /// 3. debit and credit totals agree within `epsilon`
    ///
    /// Returns the entry totals so the caller can derive the transaction
    /// amount without re-summing.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` if any validation step fails.
    pub fn validate<A>(
        input: &RecordTransactionInput,
        epsilon: Decimal,
        account_lookup: A,
    ) -> Result<EntryTotals, LedgerError>
    where
        A: Fn(AccountId) -> Option<AccountRef>,
    {
        validate_entry_shape(&input.entries)?;

        for entry in &input.entries {
            let account = account_lookup(entry.account_id)
                .ok_or(LedgerError::AccountNotFound(entry.account_id))?;
            if account.house_id != input.house_id {
                return Err(LedgerError::CrossHouseAccount {
                    account_id: entry.account_id,
                    expected: input.house_id,
                    found: account.house_id,
                });
            }
        }

        let totals = entry_totals(&input.entries);
        check_balanced(totals, epsilon)?;

        Ok(totals)
    }
}
