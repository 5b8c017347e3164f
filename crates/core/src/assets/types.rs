//! Asset domain types.

use chrono::NaiveDate;
use hearth_shared::types::{AssetId, HouseId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Asset classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    /// Real estate.
    Property,
    /// An operating business.
    Business,
    /// Financial investments.
    Investment,
    /// Anything else (vehicles, collectibles, ...).
    Other,
}

impl AssetType {
    /// Returns the string representation of the asset type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Property => "property",
            Self::Business => "business",
            Self::Investment => "investment",
            Self::Other => "other",
        }
    }
}

/// The single owner of an asset: a house or an individual user.
///
/// Modelled as an enum so a persisted asset can never have zero or two
/// owners; the ambiguity only exists at the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetOwner {
    /// Owned by a house.
    House(HouseId),
    /// Owned by an individual user.
    User(UserId),
}

/// A standalone valued asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    /// Unique identifier.
    pub id: AssetId,
    /// Asset name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Asset classification.
    pub asset_type: AssetType,
    /// Current valuation (non-negative).
    pub current_value: Decimal,
    /// When the asset was acquired.
    pub acquisition_date: NaiveDate,
    /// The owner (exactly one).
    pub owner: AssetOwner,
    /// Shared assets count toward their house's net worth even when
    /// referenced by individual members.
    pub is_shared: bool,
}

impl Asset {
    /// Returns true if this asset counts toward `house`'s net worth.
    ///
    /// Mirrors the reference query: owned by the house OR flagged shared,
    /// regardless of owner.
    #[must_use]
    pub fn counts_toward(&self, house: HouseId) -> bool {
        self.is_shared || self.owner == AssetOwner::House(house)
    }
}

/// Input for registering a new asset.
///
/// Both owner fields are optional at the boundary; exactly one must be set.
#[derive(Debug, Clone)]
pub struct RegisterAssetInput {
    /// Asset name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Asset classification.
    pub asset_type: AssetType,
    /// Current valuation.
    pub current_value: Decimal,
    /// When the asset was acquired.
    pub acquisition_date: NaiveDate,
    /// Owning house, if house-owned.
    pub owner_house: Option<HouseId>,
    /// Owning user, if personally owned.
    pub owner_user: Option<UserId>,
    /// Whether the asset is shared with the house.
    pub is_shared: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make_asset(owner: AssetOwner, is_shared: bool) -> Asset {
        Asset {
            id: AssetId::from_raw(1),
            name: "Family Home".to_string(),
            description: None,
            asset_type: AssetType::Property,
            current_value: dec!(750000),
            acquisition_date: NaiveDate::from_ymd_opt(2010, 6, 15).unwrap(),
            owner,
            is_shared,
        }
    }

    #[test]
    fn test_house_owned_counts() {
        let asset = make_asset(AssetOwner::House(HouseId::from_raw(1)), false);
        assert!(asset.counts_toward(HouseId::from_raw(1)));
        assert!(!asset.counts_toward(HouseId::from_raw(2)));
    }

    #[test]
    fn test_shared_counts_regardless_of_owner() {
        let asset = make_asset(AssetOwner::User(UserId::from_raw(5)), true);
        assert!(asset.counts_toward(HouseId::from_raw(1)));
        assert!(asset.counts_toward(HouseId::from_raw(2)));
    }

    #[test]
    fn test_personal_unshared_does_not_count() {
        let asset = make_asset(AssetOwner::User(UserId::from_raw(5)), false);
        assert!(!asset.counts_toward(HouseId::from_raw(1)));
    }
}
