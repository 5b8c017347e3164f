//! Net worth and runway reads.

use hearth_core::assets::Asset;
use hearth_core::networth::{self, NetWorthBreakdown};
use hearth_shared::types::HouseId;
use rust_decimal::Decimal;

use crate::{Store, StoreResult};

impl Store {
    /// A house's net worth: registered asset values plus ledger asset
    /// balances minus ledger liabilities.
    ///
    /// Recomputed on demand from committed state; deterministic and
    /// insensitive to insertion order.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown house.
    pub fn net_worth(&self, house: HouseId) -> StoreResult<Decimal> {
        Ok(self.net_worth_breakdown(house)?.net_worth())
    }

    /// The intermediate figures behind a house's net worth.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown house.
    pub fn net_worth_breakdown(&self, house: HouseId) -> StoreResult<NetWorthBreakdown> {
        self.require_house(house)?;
        let ledger = self.balances_by_type(house)?;
        let assets: Vec<Asset> = self.assets.values().cloned().collect();
        Ok(networth::breakdown(house, &assets, &ledger))
    }

    /// Days the house can sustain itself on its net worth.
    ///
    /// Uses the configured daily expense estimate when `estimate` is
    /// `None`; returns zero for a non-positive estimate.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown house.
    pub fn runway(&self, house: HouseId, estimate: Option<Decimal>) -> StoreResult<Decimal> {
        let daily = estimate.unwrap_or(self.config.runway.daily_expense_estimate);
        Ok(networth::runway(self.net_worth(house)?, daily))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::houses::{CreateHouseInput, CreateUserInput};
    use chrono::NaiveDate;
    use hearth_core::assets::{AssetType, RegisterAssetInput};
    use hearth_shared::types::UserId;
    use rust_decimal_macros::dec;

    fn fixture() -> (Store, HouseId, UserId) {
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
        (store, house, founder)
    }

    #[test]
    fn test_net_worth_of_empty_house_is_zero() {
        let (store, house, _) = fixture();
        assert_eq!(store.net_worth(house).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_net_worth_includes_registered_assets() {
        let (mut store, house, founder) = fixture();
        store
            .register_asset(
                RegisterAssetInput {
                    name: "Investment Portfolio".to_string(),
                    description: None,
                    asset_type: AssetType::Investment,
                    current_value: dec!(320000),
                    acquisition_date: NaiveDate::from_ymd_opt(2012, 9, 1).unwrap(),
                    owner_house: Some(house),
                    owner_user: None,
                    is_shared: true,
                },
                founder,
            )
            .unwrap();
        assert_eq!(store.net_worth(house).unwrap(), dec!(320000));
    }

    #[test]
    fn test_runway_uses_configured_default() {
        let (mut store, house, founder) = fixture();
        store
            .register_asset(
                RegisterAssetInput {
                    name: "Portfolio".to_string(),
                    description: None,
                    asset_type: AssetType::Investment,
                    current_value: dec!(100000),
                    acquisition_date: NaiveDate::from_ymd_opt(2012, 9, 1).unwrap(),
                    owner_house: Some(house),
                    owner_user: None,
                    is_shared: false,
                },
                founder,
            )
            .unwrap();

        // Default estimate: 200/day.
        assert_eq!(store.runway(house, None).unwrap(), dec!(500));
        assert_eq!(store.runway(house, Some(dec!(1000))).unwrap(), dec!(100));
        assert_eq!(store.runway(house, Some(Decimal::ZERO)).unwrap(), Decimal::ZERO);
    }
}
