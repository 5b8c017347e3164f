//! Net worth and runway computation.

use hearth_shared::types::HouseId;
use rust_decimal::Decimal;

use super::types::NetWorthBreakdown;
use crate::assets::Asset;
use crate::ledger::TypeTotals;

/// Sums the current value of every asset counting toward `house`
/// (house-owned or shared).
#[must_use]
pub fn asset_holdings(house: HouseId, assets: &[Asset]) -> Decimal {
    assets
        .iter()
        .filter(|a| a.counts_toward(house))
        .map(|a| a.current_value)
        .sum()
}

/// Combines the asset registry and the ledger into a net worth breakdown.
#[must_use]
pub fn breakdown(house: HouseId, assets: &[Asset], ledger: &TypeTotals) -> NetWorthBreakdown {
    NetWorthBreakdown {
        asset_holdings: asset_holdings(house, assets),
        ledger_assets: ledger.assets,
        ledger_liabilities: ledger.liabilities,
        ledger_equity: ledger.equity,
    }
}

/// Days the house can sustain itself at the given daily expense estimate.
///
/// Returns zero for a non-positive estimate rather than dividing by it.
#[must_use]
pub fn runway(net_worth: Decimal, daily_expense_estimate: Decimal) -> Decimal {
    if daily_expense_estimate <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        net_worth / daily_expense_estimate
    }
}
