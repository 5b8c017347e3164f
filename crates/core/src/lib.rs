//! Core business logic for Hearth.
//!
//! This crate contains pure business logic with ZERO storage dependencies.
//! All domain types, validation rules, and calculations live here; anything
//! the logic needs from storage is passed in as slices or closures.
//!
//! # Modules
//!
//! - `ledger` - Double-entry bookkeeping logic
//! - `assets` - Standalone asset registry rules
//! - `networth` - House net worth and runway calculations
//! - `membership` - Houses, users, roles, and contribution tracking
//! - `governance` - Veto and merge proposal tally logic
//! - `audit` - Append-only audit trail types

pub mod assets;
pub mod audit;
pub mod governance;
pub mod ledger;
pub mod membership;
pub mod networth;
