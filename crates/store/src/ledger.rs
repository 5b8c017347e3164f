//! Chart of accounts and transaction recording.

use chrono::Utc;
use hearth_core::audit::{AuditEventKind, AuditTargetType};
use hearth_core::ledger::{
    Account, AccountRef, AccountType, LedgerService, RecordTransactionInput, Transaction,
    TransactionEntry, TransactionStatus, TypeTotals, signed_change,
};
use hearth_shared::types::{AccountId, EntryId, HouseId, TransactionId};
use rust_decimal::Decimal;
use serde_json::json;

use crate::{Store, StoreError, StoreResult};

/// Input for creating a chart of accounts entry.
#[derive(Debug, Clone)]
pub struct CreateAccountInput {
    /// The owning house.
    pub house_id: HouseId,
    /// Account name.
    pub name: String,
    /// Account classification.
    pub account_type: AccountType,
    /// Optional parent account in the same house.
    pub parent_id: Option<AccountId>,
}

impl Store {
    /// Creates a chart of accounts entry.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown house or parent, and
    /// `ParentAccountMismatch` when the parent belongs to another house.
    pub fn create_account(&mut self, input: CreateAccountInput) -> StoreResult<Account> {
        self.require_active_house(input.house_id)?;
        if let Some(parent) = input.parent_id {
            let parent_account = self.accounts.get(&parent).ok_or(StoreError::NotFound {
                entity: "account",
                id: parent.into_inner(),
            })?;
            if parent_account.house_id != input.house_id {
                return Err(StoreError::ParentAccountMismatch {
                    parent,
                    house: input.house_id,
                });
            }
        }

        let id = AccountId::from_raw(self.next_id());
        let account = Account {
            id,
            house_id: input.house_id,
            name: input.name,
            account_type: input.account_type,
            parent_id: input.parent_id,
        };
        tracing::info!(account_id = %id, house_id = %input.house_id, "created account");
        self.accounts.insert(id, account.clone());
        Ok(account)
    }

    /// Records a balanced transaction and its entries atomically.
    ///
    /// Validation runs before any write; on failure nothing is persisted.
    /// On success the transaction is stored with status `completed`, an
    /// approval timestamp, and one `transaction_created` audit entry.
    ///
    /// # Errors
    ///
    /// Returns the `LedgerError` variants for empty/insufficient entries,
    /// non-positive amounts, unknown or cross-house accounts, and
    /// unbalanced totals.
    pub fn record_transaction(
        &mut self,
        input: RecordTransactionInput,
    ) -> StoreResult<Transaction> {
        self.require_active_house(input.house_id)?;
        self.require_user(input.created_by)?;
        self.require_user(input.approved_by)?;

        let epsilon = self.config.ledger.balance_epsilon;
        let accounts = &self.accounts;
        let totals = LedgerService::validate(&input, epsilon, |id| {
            accounts.get(&id).map(|a| AccountRef {
                id: a.id,
                house_id: a.house_id,
                account_type: a.account_type,
            })
        })?;

        // Validation passed; all writes below are infallible.
        let now = Utc::now();
        let id = TransactionId::from_raw(self.next_id());
        let transaction = Transaction {
            id,
            house_id: input.house_id,
            description: input.description,
            amount: totals.debits,
            created_by: input.created_by,
            approved_by: input.approved_by,
            status: TransactionStatus::Completed,
            approved_at: Some(now),
            created_at: now,
        };

        for entry in input.entries {
            let entry_id = EntryId::from_raw(self.next_id());
            self.entries.insert(
                entry_id,
                TransactionEntry {
                    id: entry_id,
                    transaction_id: id,
                    account_id: entry.account_id,
                    amount: entry.amount,
                    entry_type: entry.entry_type,
                    description: entry.description,
                },
            );
        }

        tracing::info!(
            transaction_id = %id,
            house_id = %transaction.house_id,
            amount = %transaction.amount,
            "recorded transaction"
        );
        self.record_audit(
            AuditEventKind::TransactionCreated,
            transaction.created_by,
            transaction.house_id,
            AuditTargetType::Transaction,
            id.into_inner(),
            json!({
                "description": transaction.description.clone(),
                "amount": transaction.amount,
            }),
        );
        self.transactions.insert(id, transaction.clone());
        Ok(transaction)
    }

    /// The signed balance of one account under the standard sign convention.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown account.
    pub fn account_balance(&self, account: AccountId) -> StoreResult<Decimal> {
        let account = self.accounts.get(&account).ok_or(StoreError::NotFound {
            entity: "account",
            id: account.into_inner(),
        })?;
        Ok(self
            .entries
            .values()
            .filter(|e| e.account_id == account.id)
            .map(|e| signed_change(account.account_type, e.entry_type, e.amount))
            .sum())
    }

    /// Ledger balance totals per account type for a house's accounts.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown house.
    pub fn balances_by_type(&self, house: HouseId) -> StoreResult<TypeTotals> {
        self.require_house(house)?;
        let mut totals = TypeTotals::default();
        for entry in self.entries.values() {
            if let Some(account) = self.accounts.get(&entry.account_id)
                && account.house_id == house
            {
                totals.add(account.account_type, entry.entry_type, entry.amount);
            }
        }
        Ok(totals)
    }

    /// An account by id.
    #[must_use]
    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    /// A house's accounts, ordered by id.
    #[must_use]
    pub fn accounts_for(&self, house: HouseId) -> Vec<&Account> {
        self.accounts
            .values()
            .filter(|a| a.house_id == house)
            .collect()
    }

    /// A house's transactions, ordered by id.
    #[must_use]
    pub fn transactions_for(&self, house: HouseId) -> Vec<&Transaction> {
        self.transactions
            .values()
            .filter(|t| t.house_id == house)
            .collect()
    }

    /// The entries belonging to a transaction, ordered by id.
    #[must_use]
    pub fn entries_for(&self, transaction: TransactionId) -> Vec<&TransactionEntry> {
        self.entries
            .values()
            .filter(|e| e.transaction_id == transaction)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::houses::{CreateHouseInput, CreateUserInput};
    use hearth_core::ledger::{EntryInput, EntryType, LedgerError};
    use hearth_shared::types::UserId;
    use rust_decimal_macros::dec;

    struct Fixture {
        store: Store,
        house: HouseId,
        founder: UserId,
        cash: AccountId,
        salary: AccountId,
    }

    fn fixture() -> Fixture {
        let mut store = Store::default();
        let founder = store
            .create_user(CreateUserInput {
                username: "john_founder".to_string(),
                email: "john@example.com".to_string(),
                full_name: "John Anderson".to_string(),
            })
            .unwrap()
            .id;
        let house = store
            .create_house(CreateHouseInput {
                name: "Anderson Dynasty".to_string(),
                description: None,
                motto: None,
                rules: None,
                founder,
            })
            .unwrap()
            .id;
        let cash = store
            .create_account(CreateAccountInput {
                house_id: house,
                name: "Cash & Bank".to_string(),
                account_type: AccountType::Asset,
                parent_id: None,
            })
            .unwrap()
            .id;
        let salary = store
            .create_account(CreateAccountInput {
                house_id: house,
                name: "Salary Income".to_string(),
                account_type: AccountType::Revenue,
                parent_id: None,
            })
            .unwrap()
            .id;
        Fixture {
            store,
            house,
            founder,
            cash,
            salary,
        }
    }

    fn salary_input(f: &Fixture, debit: Decimal, credit: Decimal) -> RecordTransactionInput {
        RecordTransactionInput {
            house_id: f.house,
            description: "Monthly Salary".to_string(),
            created_by: f.founder,
            approved_by: f.founder,
            entries: vec![
                EntryInput {
                    account_id: f.cash,
                    amount: debit,
                    entry_type: EntryType::Debit,
                    description: Some("Cash received".to_string()),
                },
                EntryInput {
                    account_id: f.salary,
                    amount: credit,
                    entry_type: EntryType::Credit,
                    description: Some("Salary income".to_string()),
                },
            ],
        }
    }

    #[test]
    fn test_record_transaction_completes() {
        let mut f = fixture();
        let tx = f
            .store
            .record_transaction(salary_input(&f, dec!(15000), dec!(15000)))
            .unwrap();
        assert_eq!(tx.status, TransactionStatus::Completed);
        assert!(tx.approved_at.is_some());
        assert_eq!(tx.amount, dec!(15000));
        assert_eq!(f.store.entries_for(tx.id).len(), 2);
        assert_eq!(f.store.account_balance(f.cash).unwrap(), dec!(15000));
        assert_eq!(f.store.account_balance(f.salary).unwrap(), dec!(15000));
    }

    #[test]
    fn test_unbalanced_transaction_persists_nothing() {
        let mut f = fixture();
        let audit_before = f.store.audit_len();

        let result = f
            .store
            .record_transaction(salary_input(&f, dec!(700), dec!(650)));
        assert!(matches!(
            result,
            Err(StoreError::Ledger(LedgerError::UnbalancedEntries { .. }))
        ));

        assert!(f.store.transactions_for(f.house).is_empty());
        assert_eq!(f.store.account_balance(f.cash).unwrap(), Decimal::ZERO);
        assert_eq!(f.store.audit_len(), audit_before);
    }

    #[test]
    fn test_cross_house_account_rejected() {
        let mut f = fixture();
        let other_founder = f
            .store
            .create_user(CreateUserInput {
                username: "mary_president".to_string(),
                email: "mary@example.com".to_string(),
                full_name: "Mary Anderson".to_string(),
            })
            .unwrap()
            .id;
        let other_house = f
            .store
            .create_house(CreateHouseInput {
                name: "Smith Heritage".to_string(),
                description: None,
                motto: None,
                rules: None,
                founder: other_founder,
            })
            .unwrap()
            .id;
        let foreign_cash = f
            .store
            .create_account(CreateAccountInput {
                house_id: other_house,
                name: "Cash".to_string(),
                account_type: AccountType::Asset,
                parent_id: None,
            })
            .unwrap()
            .id;

        let mut input = salary_input(&f, dec!(100), dec!(100));
        input.entries[0].account_id = foreign_cash;
        assert!(matches!(
            f.store.record_transaction(input),
            Err(StoreError::Ledger(LedgerError::CrossHouseAccount { .. }))
        ));
    }

    #[test]
    fn test_parent_account_must_share_house() {
        let mut f = fixture();
        let other_founder = f
            .store
            .create_user(CreateUserInput {
                username: "mary_president".to_string(),
                email: "mary@example.com".to_string(),
                full_name: "Mary Anderson".to_string(),
            })
            .unwrap()
            .id;
        let other_house = f
            .store
            .create_house(CreateHouseInput {
                name: "Smith Heritage".to_string(),
                description: None,
                motto: None,
                rules: None,
                founder: other_founder,
            })
            .unwrap()
            .id;

        let result = f.store.create_account(CreateAccountInput {
            house_id: other_house,
            name: "Petty Cash".to_string(),
            account_type: AccountType::Asset,
            parent_id: Some(f.cash),
        });
        assert!(matches!(
            result,
            Err(StoreError::ParentAccountMismatch { .. })
        ));
    }

    #[test]
    fn test_balances_by_type_signed() {
        let mut f = fixture();
        let mortgage = f
            .store
            .create_account(CreateAccountInput {
                house_id: f.house,
                name: "Mortgages".to_string(),
                account_type: AccountType::Liability,
                parent_id: None,
            })
            .unwrap()
            .id;

        f.store
            .record_transaction(salary_input(&f, dec!(15000), dec!(15000)))
            .unwrap();
        // Mortgage payment: debit Mortgages / credit Cash.
        f.store
            .record_transaction(RecordTransactionInput {
                house_id: f.house,
                description: "Mortgage Payment".to_string(),
                created_by: f.founder,
                approved_by: f.founder,
                entries: vec![
                    EntryInput {
                        account_id: mortgage,
                        amount: dec!(3500),
                        entry_type: EntryType::Debit,
                        description: None,
                    },
                    EntryInput {
                        account_id: f.cash,
                        amount: dec!(3500),
                        entry_type: EntryType::Credit,
                        description: None,
                    },
                ],
            })
            .unwrap();

        let totals = f.store.balances_by_type(f.house).unwrap();
        assert_eq!(totals.assets, dec!(11500));
        assert_eq!(totals.liabilities, dec!(-3500));
        assert_eq!(totals.revenue, dec!(15000));
    }
}
