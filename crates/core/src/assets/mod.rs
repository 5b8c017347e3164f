//! Standalone asset registry rules.
//!
//! Assets are valued holdings (property, businesses, investments) owned by a
//! house or an individual, independent of the ledger's chart of accounts.

pub mod error;
pub mod service;
pub mod types;

pub use error::AssetError;
pub use service::{AssetTypeSummary, asset_totals_by_type, resolve_owner, validate_value};
pub use types::{Asset, AssetOwner, AssetType, RegisterAssetInput};
