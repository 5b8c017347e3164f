//! Houses, users, roles, and contribution tracking.

pub mod service;
pub mod types;

pub use service::{contribution_score, matches_search, members_by_role};
pub use types::{House, HouseMember, MemberRole, MemberStatus, User};
