//! Asset registry error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while registering an asset.
#[derive(Debug, Error)]
pub enum AssetError {
    /// An asset must have exactly one owner.
    #[error("Asset must have exactly one owner: got {owners} (house and/or user)")]
    InvalidOwnership {
        /// How many owner fields were set.
        owners: usize,
    },

    /// Asset values may not be negative.
    #[error("Asset value must be non-negative, got {value}")]
    NegativeValue {
        /// The offending value.
        value: Decimal,
    },
}
