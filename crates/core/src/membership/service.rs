//! Membership queries: contribution scores, role ordering, search.

use hearth_shared::types::{HouseId, UserId};
use rust_decimal::Decimal;

use super::types::{HouseMember, User};

/// Returns a user's contribution score in a house, or zero when no
/// membership row exists.
#[must_use]
pub fn contribution_score(user: UserId, house: HouseId, members: &[HouseMember]) -> Decimal {
    members
        .iter()
        .find(|m| m.user_id == user && m.house_id == house)
        .map_or(Decimal::ZERO, |m| m.contribution_score)
}

/// Returns a house's active members ordered by role rank (founder first)
/// then by join order within the same rank.
#[must_use]
pub fn members_by_role<'a>(house: HouseId, members: &'a [HouseMember]) -> Vec<&'a HouseMember> {
    let mut active: Vec<&HouseMember> = members
        .iter()
        .filter(|m| m.house_id == house && m.is_active())
        .collect();
    active.sort_by_key(|m| (m.role.rank(), m.id));
    active
}

/// Case-insensitive substring match on username or display name.
#[must_use]
pub fn matches_search(user: &User, term: &str) -> bool {
    let term = term.to_lowercase();
    user.username.to_lowercase().contains(&term) || user.full_name.to_lowercase().contains(&term)
}
