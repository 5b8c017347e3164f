//! Property tests for ledger validation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::types::{EntryInput, EntryType};
use super::validation::{check_balanced, entry_totals, validate_entry_shape};
use hearth_shared::types::AccountId;

fn amount_strategy() -> impl Strategy<Value = Decimal> {
    // Positive magnitudes with two decimal places, like real money input.
    (1i64..10_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

fn entry(account: i64, entry_type: EntryType, amount: Decimal) -> EntryInput {
    EntryInput {
        account_id: AccountId::from_raw(account),
        amount,
        entry_type,
        description: None,
    }
}

/// Builds a balanced entry set: each generated amount appears once as a
/// debit and once as a credit.
fn balanced_entries_strategy() -> impl Strategy<Value = Vec<EntryInput>> {
    prop::collection::vec(amount_strategy(), 1..20).prop_map(|amounts| {
        let mut entries = Vec::with_capacity(amounts.len() * 2);
        for (i, amount) in amounts.iter().enumerate() {
            entries.push(entry(i as i64 * 2, EntryType::Debit, *amount));
            entries.push(entry(i as i64 * 2 + 1, EntryType::Credit, *amount));
        }
        entries
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any pairwise-balanced entry set validates and balances exactly.
    #[test]
    fn prop_balanced_sets_validate(entries in balanced_entries_strategy()) {
        prop_assert!(validate_entry_shape(&entries).is_ok());
        let totals = entry_totals(&entries);
        prop_assert_eq!(totals.debits, totals.credits);
        prop_assert!(check_balanced(totals, Decimal::ZERO).is_ok());
    }

    /// Skewing one side of a balanced set always breaks exact balance.
    #[test]
    fn prop_skewed_sets_fail(
        entries in balanced_entries_strategy(),
        skew in 1i64..1_000_000i64,
    ) {
        let mut entries = entries;
        entries.push(entry(i64::MAX, EntryType::Debit, Decimal::new(skew, 2)));
        let totals = entry_totals(&entries);
        prop_assert!(check_balanced(totals, Decimal::ZERO).is_err());
    }

    /// Totals are insensitive to entry order.
    #[test]
    fn prop_totals_order_independent(entries in balanced_entries_strategy()) {
        let forward = entry_totals(&entries);
        let mut reversed = entries;
        reversed.reverse();
        let backward = entry_totals(&reversed);
        prop_assert_eq!(forward.debits, backward.debits);
        prop_assert_eq!(forward.credits, backward.credits);
    }
}
