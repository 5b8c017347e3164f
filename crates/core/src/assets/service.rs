//! Asset registration rules and summaries.

use std::collections::BTreeMap;

use hearth_shared::types::HouseId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::AssetError;
use super::types::{Asset, AssetOwner, AssetType, RegisterAssetInput};

/// Resolves the exactly-one-owner invariant from the input's two optional
/// owner fields.
///
/// # Errors
///
/// Returns [`AssetError::InvalidOwnership`] when zero or both owner fields
/// are set.
pub fn resolve_owner(input: &RegisterAssetInput) -> Result<AssetOwner, AssetError> {
    match (input.owner_house, input.owner_user) {
        (Some(house), None) => Ok(AssetOwner::House(house)),
        (None, Some(user)) => Ok(AssetOwner::User(user)),
        (None, None) => Err(AssetError::InvalidOwnership { owners: 0 }),
        (Some(_), Some(_)) => Err(AssetError::InvalidOwnership { owners: 2 }),
    }
}

/// Validates the asset value.
///
/// # Errors
///
/// Returns [`AssetError::NegativeValue`] for negative values.
pub fn validate_value(value: Decimal) -> Result<(), AssetError> {
    if value < Decimal::ZERO {
        return Err(AssetError::NegativeValue { value });
    }
    Ok(())
}

/// Value and count of a house's assets for one asset type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetTypeSummary {
    /// The asset type.
    pub asset_type: AssetType,
    /// Sum of current values.
    pub total_value: Decimal,
    /// Number of assets.
    pub count: usize,
}

/// Groups a house's countable assets by type, ordered by type.
#[must_use]
pub fn asset_totals_by_type(house: HouseId, assets: &[Asset]) -> Vec<AssetTypeSummary> {
    let mut by_type: BTreeMap<AssetType, (Decimal, usize)> = BTreeMap::new();
    for asset in assets.iter().filter(|a| a.counts_toward(house)) {
        let slot = by_type.entry(asset.asset_type).or_default();
        slot.0 += asset.current_value;
        slot.1 += 1;
    }
    by_type
        .into_iter()
        .map(|(asset_type, (total_value, count))| AssetTypeSummary {
            asset_type,
            total_value,
            count,
        })
        .collect()
}
