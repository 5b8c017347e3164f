//! Engine-wide statistics.

use hearth_shared::types::HouseId;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::Store;

/// A snapshot of engine-wide counts and rankings.
#[derive(Debug, Clone, Serialize)]
pub struct SystemStats {
    /// Number of houses, active or not.
    pub houses: usize,
    /// Number of users.
    pub users: usize,
    /// Number of active membership rows.
    pub active_members: usize,
    /// Number of registered assets.
    pub assets: usize,
    /// Number of recorded transactions.
    pub transactions: usize,
    /// Sum of all registered asset values.
    pub total_asset_value: Decimal,
    /// Active houses with positive net worth, richest first.
    pub rankings: Vec<HouseRanking>,
}

/// One row of the net worth ranking.
#[derive(Debug, Clone, Serialize)]
pub struct HouseRanking {
    /// The ranked house.
    pub house_id: HouseId,
    /// Its name.
    pub name: String,
    /// Its net worth at snapshot time.
    pub net_worth: Decimal,
}

impl Store {
    /// Computes the current system statistics.
    ///
    /// Rankings cover active houses with positive net worth only, in
    /// descending order of net worth.
    #[must_use]
    pub fn system_stats(&self) -> SystemStats {
        let mut rankings: Vec<HouseRanking> = self
            .houses
            .values()
            .filter(|h| h.is_active)
            .filter_map(|h| {
                let net_worth = self.net_worth(h.id).ok()?;
                (net_worth > Decimal::ZERO).then(|| HouseRanking {
                    house_id: h.id,
                    name: h.name.clone(),
                    net_worth,
                })
            })
            .collect();
        rankings.sort_by(|a, b| b.net_worth.cmp(&a.net_worth));

        SystemStats {
            houses: self.houses.len(),
            users: self.users.len(),
            active_members: self.members.values().filter(|m| m.is_active()).count(),
            assets: self.assets.len(),
            transactions: self.transactions.len(),
            total_asset_value: self.assets.values().map(|a| a.current_value).sum(),
            rankings,
        }
    }
}
