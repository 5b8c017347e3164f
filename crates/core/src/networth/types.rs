//! Net worth result types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The intermediate figures behind a house's net worth.
///
/// The final figure adds the standalone asset valuations to the ledger's
/// asset balances and subtracts ledger liabilities. A resource represented
/// both as a registered asset and as ledger asset balance is counted twice;
/// this reproduces the reference behaviour on purpose (see DESIGN.md).
/// Ledger equity is computed but excluded from the final figure, also for
/// parity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetWorthBreakdown {
    /// Sum of registered asset values counting toward the house.
    pub asset_holdings: Decimal,
    /// Ledger balance total across asset accounts.
    pub ledger_assets: Decimal,
    /// Ledger balance total across liability accounts.
    pub ledger_liabilities: Decimal,
    /// Ledger balance total across equity accounts (informational only).
    pub ledger_equity: Decimal,
}

impl NetWorthBreakdown {
    /// The house's net worth.
    #[must_use]
    pub fn net_worth(&self) -> Decimal {
        self.asset_holdings + self.ledger_assets - self.ledger_liabilities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_net_worth_excludes_equity() {
        let breakdown = NetWorthBreakdown {
            asset_holdings: dec!(1000),
            ledger_assets: dec!(500),
            ledger_liabilities: dec!(200),
            ledger_equity: dec!(9999),
        };
        assert_eq!(breakdown.net_worth(), dec!(1300));
    }
}
