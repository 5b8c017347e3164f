//! Business rule validation for ledger entries.

use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::{EntryInput, EntryTotals, EntryType};

/// Sums the debit and credit sides of a set of entry inputs.
#[must_use]
pub fn entry_totals(entries: &[EntryInput]) -> EntryTotals {
    let mut debits = Decimal::ZERO;
    let mut credits = Decimal::ZERO;

    for entry in entries {
        match entry.entry_type {
            EntryType::Debit => debits += entry.amount,
            EntryType::Credit => credits += entry.amount,
        }
    }

    EntryTotals::new(debits, credits)
}

/// Validates the shape of a set of entry inputs.
///
/// Checks entry count and per-entry amounts; account ownership and balance
/// checks are performed by [`super::service::LedgerService`].
///
/// # Errors
///
/// Returns [`LedgerError::EmptyEntries`], [`LedgerError::InsufficientEntries`]
/// or [`LedgerError::NonPositiveAmount`].
pub fn validate_entry_shape(entries: &[EntryInput]) -> Result<(), LedgerError> {
    if entries.is_empty() {
        return Err(LedgerError::EmptyEntries);
    }
    if entries.len() < 2 {
        return Err(LedgerError::InsufficientEntries(entries.len()));
    }

    for entry in entries {
        if entry.amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount {
                amount: entry.amount,
            });
        }
    }

    Ok(())
}

/// Validates that entry totals balance within `epsilon`.
///
/// # Errors
///
/// Returns [`LedgerError::UnbalancedEntries`] when the totals differ by more
/// than `epsilon`.
pub fn check_balanced(totals: EntryTotals, epsilon: Decimal) -> Result<(), LedgerError> {
    if totals.is_balanced_within(epsilon) {
        Ok(())
    } else {
        Err(LedgerError::UnbalancedEntries {
            debits: totals.debits,
            credits: totals.credits,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_shared::types::AccountId;
    use rust_decimal_macros::dec;

    fn make_entry(entry_type: EntryType, amount: Decimal) -> EntryInput {
        EntryInput {
            account_id: AccountId::from_raw(1),
            amount,
            entry_type,
            description: None,
        }
    }

    #[test]
    fn test_totals() {
        let entries = vec![
            make_entry(EntryType::Debit, dec!(100)),
            make_entry(EntryType::Debit, dec!(50)),
            make_entry(EntryType::Credit, dec!(150)),
        ];
        let totals = entry_totals(&entries);
        assert_eq!(totals.debits, dec!(150));
        assert_eq!(totals.credits, dec!(150));
    }

    #[test]
    fn test_empty_entries() {
        assert!(matches!(
            validate_entry_shape(&[]),
            Err(LedgerError::EmptyEntries)
        ));
    }

    #[test]
    fn test_single_entry() {
        let entries = vec![make_entry(EntryType::Debit, dec!(100))];
        assert!(matches!(
            validate_entry_shape(&entries),
            Err(LedgerError::InsufficientEntries(1))
        ));
    }

    #[test]
    fn test_zero_amount() {
        let entries = vec![
            make_entry(EntryType::Debit, dec!(0)),
            make_entry(EntryType::Credit, dec!(100)),
        ];
        assert!(matches!(
            validate_entry_shape(&entries),
            Err(LedgerError::NonPositiveAmount { .. })
        ));
    }

    #[test]
    fn test_negative_amount() {
        let entries = vec![
            make_entry(EntryType::Debit, dec!(-5)),
            make_entry(EntryType::Credit, dec!(100)),
        ];
        assert!(matches!(
            validate_entry_shape(&entries),
            Err(LedgerError::NonPositiveAmount { .. })
        ));
    }

    #[test]
    fn test_check_balanced_exact() {
        let totals = EntryTotals::new(dec!(700), dec!(650));
        assert!(matches!(
            check_balanced(totals, Decimal::ZERO),
            Err(LedgerError::UnbalancedEntries { .. })
        ));
        assert!(check_balanced(EntryTotals::new(dec!(700), dec!(700)), Decimal::ZERO).is_ok());
    }
}
