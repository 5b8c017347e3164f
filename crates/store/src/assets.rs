//! Asset registry operations.

use hearth_core::assets::{
    Asset, AssetOwner, AssetTypeSummary, RegisterAssetInput, asset_totals_by_type, resolve_owner,
    validate_value,
};
use hearth_core::audit::{AuditEventKind, AuditTargetType};
use hearth_shared::types::{AssetId, HouseId, UserId};
use serde_json::json;

use crate::{Store, StoreResult};

impl Store {
    /// Registers an asset.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::InvalidOwnership` unless exactly one owner is
    /// set, `AssetError::NegativeValue` for a negative valuation, and
    /// `NotFound` for an unknown owner.
    pub fn register_asset(
        &mut self,
        input: RegisterAssetInput,
        acting_user: UserId,
    ) -> StoreResult<Asset> {
        validate_value(input.current_value)?;
        let owner = resolve_owner(&input)?;
        let audit_house = match owner {
            AssetOwner::House(house) => {
                self.require_house(house)?;
                Some(house)
            }
            AssetOwner::User(user) => {
                self.require_user(user)?;
                None
            }
        };

        let id = AssetId::from_raw(self.next_id());
        let asset = Asset {
            id,
            name: input.name,
            description: input.description,
            asset_type: input.asset_type,
            current_value: input.current_value,
            acquisition_date: input.acquisition_date,
            owner,
            is_shared: input.is_shared,
        };
        tracing::info!(asset_id = %id, value = %asset.current_value, "registered asset");
        self.assets.insert(id, asset.clone());

        // Personally-owned assets have no house scope to audit under.
        if let Some(house) = audit_house {
            self.record_audit(
                AuditEventKind::AssetRegistered,
                acting_user,
                house,
                AuditTargetType::Asset,
                id.into_inner(),
                json!({
                    "name": asset.name.clone(),
                    "asset_type": asset.asset_type.as_str(),
                    "current_value": asset.current_value,
                }),
            );
        }
        Ok(asset)
    }

    /// Assets counting toward a house: house-owned or shared, regardless
    /// of owner.
    #[must_use]
    pub fn assets_for(&self, house: HouseId) -> Vec<&Asset> {
        self.assets
            .values()
            .filter(|a| a.counts_toward(house))
            .collect()
    }

    /// Value and count of a house's assets grouped by asset type.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown house.
    pub fn asset_totals(&self, house: HouseId) -> StoreResult<Vec<AssetTypeSummary>> {
        self.require_house(house)?;
        let assets: Vec<Asset> = self.assets.values().cloned().collect();
        Ok(asset_totals_by_type(house, &assets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::houses::{CreateHouseInput, CreateUserInput};
    use chrono::NaiveDate;
    use hearth_core::assets::{AssetError, AssetType};
    use crate::StoreError;
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

    fn input(house: Option<HouseId>, user: Option<UserId>) -> RegisterAssetInput {
        RegisterAssetInput {
            name: "Family Home".to_string(),
            description: Some("Primary residence".to_string()),
            asset_type: AssetType::Property,
            current_value: dec!(750000),
            acquisition_date: NaiveDate::from_ymd_opt(2010, 6, 15).unwrap(),
            owner_house: house,
            owner_user: user,
            is_shared: true,
        }
    }

    #[test]
    fn test_register_house_asset() {
        let (mut store, house, founder) = fixture();
        let asset = store.register_asset(input(Some(house), None), founder).unwrap();
        assert_eq!(asset.owner, AssetOwner::House(house));
        assert_eq!(store.assets_for(house).len(), 1);
    }

    #[test]
    fn test_two_owners_rejected() {
        let (mut store, house, founder) = fixture();
        assert!(matches!(
            store.register_asset(input(Some(house), Some(founder)), founder),
            Err(StoreError::Asset(AssetError::InvalidOwnership { owners: 2 }))
        ));
    }

    #[test]
    fn test_negative_value_rejected() {
        let (mut store, house, founder) = fixture();
        let mut bad = input(Some(house), None);
        bad.current_value = dec!(-1);
        assert!(matches!(
            store.register_asset(bad, founder),
            Err(StoreError::Asset(AssetError::NegativeValue { .. }))
        ));
    }

    #[test]
    fn test_shared_personal_asset_counts_for_house() {
        let (mut store, house, founder) = fixture();
        let mut personal = input(None, Some(founder));
        personal.is_shared = true;
        store.register_asset(personal, founder).unwrap();
        assert_eq!(store.assets_for(house).len(), 1);

        let mut private = input(None, Some(founder));
        private.name = "Personal Car".to_string();
        private.is_shared = false;
        store.register_asset(private, founder).unwrap();
        // Unshared personal assets stay out of the house view.
        assert_eq!(store.assets_for(house).len(), 1);
    }
}
