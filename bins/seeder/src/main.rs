//! Demo data seeder for Hearth development and testing.
//!
//! Builds an in-memory store with two demo households, a small chart of
//! accounts, a month of transactions and a handful of assets, then prints
//! the resulting system statistics.
//!
//! Usage: cargo run --bin seeder

use chrono::NaiveDate;
use hearth_core::assets::{AssetType, RegisterAssetInput};
use hearth_core::ledger::{AccountType, EntryInput, EntryType, RecordTransactionInput};
use hearth_core::membership::MemberRole;
use hearth_shared::config::EngineConfig;
use hearth_shared::types::{AccountId, HouseId, UserId};
use hearth_store::{CreateAccountInput, CreateHouseInput, CreateUserInput, Store, StoreError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn main() -> Result<(), StoreError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = EngineConfig::load().unwrap_or_default();
    let mut store = Store::new(config);

    println!("Seeding demo users...");
    let john = seed_user(&mut store, "john_founder", "John Anderson")?;
    let jane = seed_user(&mut store, "jane_president", "Jane Anderson")?;
    let bob = seed_user(&mut store, "bob_member", "Bob Anderson")?;
    let sarah = seed_user(&mut store, "sarah_founder", "Sarah Smith")?;
    let mike = seed_user(&mut store, "mike_member", "Mike Smith")?;

    println!("Seeding demo houses...");
    let anderson = store
        .create_house(CreateHouseInput {
            name: "Anderson Dynasty".to_string(),
            description: Some("A family focused on building generational wealth".to_string()),
            motto: Some("Fortune favors the prepared".to_string()),
            rules: Some("1. Save 20% of income\n2. Family votes on major purchases".to_string()),
            founder: john,
        })?
        .id;
    store.join_house(anderson, jane, MemberRole::President)?;
    store.join_house(anderson, bob, MemberRole::Member)?;

    let smith = store
        .create_house(CreateHouseInput {
            name: "Smith Heritage".to_string(),
            description: Some("Preserving wealth across generations".to_string()),
            motto: Some("Steady hands build lasting wealth".to_string()),
            rules: None,
            founder: sarah,
        })?
        .id;
    store.join_house(smith, mike, MemberRole::Member)?;

    println!("Seeding charts of accounts...");
    let a_cash = seed_account(&mut store, anderson, "Cash", AccountType::Asset)?;
    let a_salary = seed_account(&mut store, anderson, "Salary Income", AccountType::Revenue)?;
    let a_mortgage = seed_account(&mut store, anderson, "Mortgage", AccountType::Liability)?;
    let a_groceries = seed_account(&mut store, anderson, "Groceries", AccountType::Expense)?;
    let s_cash = seed_account(&mut store, smith, "Cash", AccountType::Asset)?;
    let s_salary = seed_account(&mut store, smith, "Salary Income", AccountType::Revenue)?;

    println!("Seeding transactions...");
    seed_transfer(&mut store, anderson, john, "Monthly salary", a_cash, a_salary, dec!(8500))?;
    seed_transfer(&mut store, anderson, jane, "Consulting income", a_cash, a_salary, dec!(3000))?;
    seed_transfer(&mut store, anderson, jane, "Weekly groceries", a_groceries, a_cash, dec!(350))?;
    seed_transfer(&mut store, anderson, john, "Mortgage drawdown", a_cash, a_mortgage, dec!(3500))?;
    seed_transfer(&mut store, smith, sarah, "Monthly salary", s_cash, s_salary, dec!(6200))?;

    println!("Seeding assets...");
    seed_asset(&mut store, anderson, john, "Family Estate", AssetType::Property, dec!(850000), (2010, 6, 15), true)?;
    seed_asset(&mut store, anderson, john, "Investment Portfolio", AssetType::Investment, dec!(320000), (2012, 9, 1), false)?;
    seed_asset(&mut store, smith, sarah, "Smith Residence", AssetType::Property, dec!(450000), (2015, 3, 1), false)?;

    let stats = store.system_stats();
    println!("Seeding complete!");
    println!(
        "  {} houses, {} users, {} active members, {} assets, {} transactions",
        stats.houses, stats.users, stats.active_members, stats.assets, stats.transactions
    );
    println!("  Total asset value: {}", stats.total_asset_value);
    for (position, row) in stats.rankings.iter().enumerate() {
        println!("  #{} {} — net worth {}", position + 1, row.name, row.net_worth);
    }
    for house in [anderson, smith] {
        let runway = store.runway(house, None)?;
        println!("  House {house}: runway {} days", runway.round_dp(1));
    }
    Ok(())
}

fn seed_user(store: &mut Store, username: &str, full_name: &str) -> Result<UserId, StoreError> {
    let user = store.create_user(CreateUserInput {
        username: username.to_string(),
        email: format!("{username}@hearth.dev"),
        full_name: full_name.to_string(),
    })?;
    println!("  Created user: {username}");
    Ok(user.id)
}

fn seed_account(
    store: &mut Store,
    house: HouseId,
    name: &str,
    account_type: AccountType,
) -> Result<AccountId, StoreError> {
    Ok(store
        .create_account(CreateAccountInput {
            house_id: house,
            name: name.to_string(),
            account_type,
            parent_id: None,
        })?
        .id)
}

fn seed_transfer(
    store: &mut Store,
    house: HouseId,
    actor: UserId,
    description: &str,
    debit_account: AccountId,
    credit_account: AccountId,
    amount: Decimal,
) -> Result<(), StoreError> {
    store.record_transaction(RecordTransactionInput {
        house_id: house,
        description: description.to_string(),
        created_by: actor,
        approved_by: actor,
        entries: vec![
            EntryInput {
                account_id: debit_account,
                amount,
                entry_type: EntryType::Debit,
                description: None,
            },
            EntryInput {
                account_id: credit_account,
                amount,
                entry_type: EntryType::Credit,
                description: None,
            },
        ],
    })?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn seed_asset(
    store: &mut Store,
    house: HouseId,
    actor: UserId,
    name: &str,
    asset_type: AssetType,
    value: Decimal,
    acquired: (i32, u32, u32),
    is_shared: bool,
) -> Result<(), StoreError> {
    let (year, month, day) = acquired;
    let acquisition_date = NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default();
    store.register_asset(
        RegisterAssetInput {
            name: name.to_string(),
            description: None,
            asset_type,
            current_value: value,
            acquisition_date,
            owner_house: Some(house),
            owner_user: None,
            is_shared,
        },
        actor,
    )?;
    Ok(())
}
