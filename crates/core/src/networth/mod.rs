//! House net worth and runway calculations.

pub mod service;
pub mod types;

pub use service::{asset_holdings, breakdown, runway};
pub use types::NetWorthBreakdown;
