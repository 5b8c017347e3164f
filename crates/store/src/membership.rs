//! Membership and contribution tracking operations.

use hearth_core::audit::{AuditEventKind, AuditTargetType};
use hearth_core::membership::{self, HouseMember, User};
use hearth_shared::types::{HouseId, UserId};
use rust_decimal::Decimal;
use serde_json::json;

use crate::{Store, StoreResult};

/// A user matching a member search, with their membership rows.
#[derive(Debug, Clone)]
pub struct MemberSearchHit {
    /// The matching user.
    pub user: User,
    /// The user's membership rows across all houses.
    pub memberships: Vec<HouseMember>,
}

impl Store {
    /// A user's contribution score in a house; zero when no membership
    /// row exists.
    #[must_use]
    pub fn contribution_score(&self, user: UserId, house: HouseId) -> Decimal {
        let members: Vec<HouseMember> = self.members.values().cloned().collect();
        membership::contribution_score(user, house, &members)
    }

    /// A house's active members ordered by role rank then join order.
    #[must_use]
    pub fn members_by_role(&self, house: HouseId) -> Vec<HouseMember> {
        let members: Vec<HouseMember> = self.members.values().cloned().collect();
        membership::members_by_role(house, &members)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Adjusts a member's contribution score by `delta`.
    ///
    /// # Errors
    ///
    /// Returns `NotAMember` if the user has no active membership row.
    pub fn adjust_contribution(
        &mut self,
        house: HouseId,
        user: UserId,
        delta: Decimal,
        acting_user: UserId,
    ) -> StoreResult<HouseMember> {
        let member_id = self.active_member(house, user)?.id;
        let Some(member) = self.members.get_mut(&member_id) else {
            return Err(crate::StoreError::NotFound {
                entity: "member",
                id: member_id.into_inner(),
            });
        };
        member.contribution_score += delta;
        let member = member.clone();
        tracing::info!(
            member_id = %member.id,
            score = %member.contribution_score,
            "adjusted contribution score"
        );
        self.record_audit(
            AuditEventKind::ContributionAdjusted,
            acting_user,
            house,
            AuditTargetType::Member,
            member.id.into_inner(),
            json!({ "contribution_score": member.contribution_score }),
        );
        Ok(member)
    }

    /// Issues a warning to a member, incrementing their warning count.
    ///
    /// # Errors
    ///
    /// Returns `NotAMember` if the user has no active membership row.
    pub fn record_warning(
        &mut self,
        house: HouseId,
        user: UserId,
        acting_user: UserId,
    ) -> StoreResult<HouseMember> {
        let member_id = self.active_member(house, user)?.id;
        let Some(member) = self.members.get_mut(&member_id) else {
            return Err(crate::StoreError::NotFound {
                entity: "member",
                id: member_id.into_inner(),
            });
        };
        member.warning_count += 1;
        let member = member.clone();
        self.record_audit(
            AuditEventKind::WarningRecorded,
            acting_user,
            house,
            AuditTargetType::Member,
            member.id.into_inner(),
            json!({ "warning_count": member.warning_count }),
        );
        Ok(member)
    }

    /// Users whose username or display name contains `term`,
    /// case-insensitive, with their membership rows.
    #[must_use]
    pub fn search_members(&self, term: &str) -> Vec<MemberSearchHit> {
        self.users
            .values()
            .filter(|u| membership::matches_search(u, term))
            .map(|u| MemberSearchHit {
                user: u.clone(),
                memberships: self
                    .members
                    .values()
                    .filter(|m| m.user_id == u.id)
                    .cloned()
                    .collect(),
            })
            .collect()
    }
}
