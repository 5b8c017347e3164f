//! House and user lifecycle operations.

use chrono::Utc;
use hearth_core::audit::{AuditEventKind, AuditTargetType};
use hearth_core::membership::{House, HouseMember, MemberRole, MemberStatus, User};
use hearth_shared::types::{HouseId, MemberId, UserId};
use rust_decimal::Decimal;
use serde_json::json;

use crate::{Store, StoreError, StoreResult};

/// Input for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserInput {
    /// Unique username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Display name.
    pub full_name: String,
}

/// Input for creating a house.
#[derive(Debug, Clone)]
pub struct CreateHouseInput {
    /// Unique house name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional motto.
    pub motto: Option<String>,
    /// Optional house rules text.
    pub rules: Option<String>,
    /// The founding user; auto-enrolled as an active founder member.
    pub founder: UserId,
}

impl Store {
    /// Creates a user.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateUsername` if the username is taken.
    pub fn create_user(&mut self, input: CreateUserInput) -> StoreResult<User> {
        if self.users.values().any(|u| u.username == input.username) {
            return Err(StoreError::DuplicateUsername(input.username));
        }

        let id = UserId::from_raw(self.next_id());
        let user = User {
            id,
            username: input.username,
            email: input.email,
            full_name: input.full_name,
        };
        tracing::info!(user_id = %id, username = %user.username, "created user");
        self.users.insert(id, user.clone());
        Ok(user)
    }

    /// Creates a house and enrols its founder as the first active member.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateHouseName` if the name is taken, or `NotFound` if
    /// the founder does not exist.
    pub fn create_house(&mut self, input: CreateHouseInput) -> StoreResult<House> {
        self.require_user(input.founder)?;
        if self.houses.values().any(|h| h.name == input.name) {
            return Err(StoreError::DuplicateHouseName(input.name));
        }

        let id = HouseId::from_raw(self.next_id());
        let house = House {
            id,
            name: input.name,
            description: input.description,
            motto: input.motto,
            rules: input.rules,
            founder_id: input.founder,
            is_active: true,
            created_at: Utc::now(),
            last_merge_date: None,
        };
        tracing::info!(house_id = %id, name = %house.name, "created house");
        self.houses.insert(id, house.clone());
        self.record_audit(
            AuditEventKind::HouseCreated,
            input.founder,
            id,
            AuditTargetType::House,
            id.into_inner(),
            json!({ "name": house.name.clone() }),
        );

        self.insert_member(id, input.founder, MemberRole::Founder);
        Ok(house)
    }

    /// Adds a user to a house with the given role.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateMember` if a membership row for the pair already
    /// exists, in any status.
    pub fn join_house(
        &mut self,
        house: HouseId,
        user: UserId,
        role: MemberRole,
    ) -> StoreResult<HouseMember> {
        self.require_active_house(house)?;
        self.require_user(user)?;
        if self.member_row(house, user).is_some() {
            return Err(StoreError::DuplicateMember { user, house });
        }
        Ok(self.insert_member(house, user, role))
    }

    /// Marks a member as having left the house.
    ///
    /// # Errors
    ///
    /// Returns `NotAMember` if the user has no active membership row.
    pub fn leave_house(&mut self, house: HouseId, user: UserId) -> StoreResult<HouseMember> {
        let member_id = self.active_member(house, user)?.id;
        let Some(member) = self.members.get_mut(&member_id) else {
            return Err(StoreError::NotFound {
                entity: "member",
                id: member_id.into_inner(),
            });
        };
        member.status = MemberStatus::Left;
        let member = member.clone();
        self.record_audit(
            AuditEventKind::MemberLeft,
            user,
            house,
            AuditTargetType::Member,
            member_id.into_inner(),
            json!({ "status": "left" }),
        );
        Ok(member)
    }

    /// A house by id.
    #[must_use]
    pub fn house(&self, id: HouseId) -> Option<&House> {
        self.houses.get(&id)
    }

    /// A user by id.
    #[must_use]
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    /// All houses, ordered by id (creation order).
    #[must_use]
    pub fn houses(&self) -> Vec<&House> {
        self.houses.values().collect()
    }

    fn insert_member(&mut self, house: HouseId, user: UserId, role: MemberRole) -> HouseMember {
        let id = MemberId::from_raw(self.next_id());
        let member = HouseMember {
            id,
            house_id: house,
            user_id: user,
            role,
            status: MemberStatus::Active,
            contribution_score: Decimal::ZERO,
            warning_count: 0,
            joined_at: Utc::now(),
        };
        tracing::info!(member_id = %id, house_id = %house, user_id = %user, role = role.as_str(), "member joined");
        self.members.insert(id, member.clone());
        self.record_audit(
            AuditEventKind::MemberJoined,
            user,
            house,
            AuditTargetType::Member,
            id.into_inner(),
            json!({ "role": role.as_str() }),
        );
        member
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_founder() -> (Store, UserId) {
        let mut store = Store::default();
        let user = store
            .create_user(CreateUserInput {
                username: "john_founder".to_string(),
                email: "john@example.com".to_string(),
                full_name: "John Anderson".to_string(),
            })
            .unwrap();
        (store, user.id)
    }

    fn house_input(name: &str, founder: UserId) -> CreateHouseInput {
        CreateHouseInput {
            name: name.to_string(),
            description: None,
            motto: None,
            rules: None,
            founder,
        }
    }

    #[test]
    fn test_create_house_enrols_founder() {
        let (mut store, founder) = store_with_founder();
        let house = store.create_house(house_input("Anderson Dynasty", founder)).unwrap();

        let member = store.member_row(house.id, founder).unwrap();
        assert_eq!(member.role, MemberRole::Founder);
        assert!(member.is_active());
        // house_created followed by member_joined.
        assert_eq!(store.audit_entries_for(house.id).len(), 2);
    }

    #[test]
    fn test_duplicate_house_name_rejected() {
        let (mut store, founder) = store_with_founder();
        store.create_house(house_input("Anderson Dynasty", founder)).unwrap();
        assert!(matches!(
            store.create_house(house_input("Anderson Dynasty", founder)),
            Err(StoreError::DuplicateHouseName(_))
        ));
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let (mut store, _) = store_with_founder();
        let result = store.create_user(CreateUserInput {
            username: "john_founder".to_string(),
            email: "other@example.com".to_string(),
            full_name: "Other John".to_string(),
        });
        assert!(matches!(result, Err(StoreError::DuplicateUsername(_))));
    }

    #[test]
    fn test_rejoin_after_leave_rejected() {
        let (mut store, founder) = store_with_founder();
        let house = store.create_house(house_input("Anderson Dynasty", founder)).unwrap();
        let user = store
            .create_user(CreateUserInput {
                username: "robert_member".to_string(),
                email: "robert@example.com".to_string(),
                full_name: "Robert Anderson".to_string(),
            })
            .unwrap();

        store.join_house(house.id, user.id, MemberRole::Member).unwrap();
        let left = store.leave_house(house.id, user.id).unwrap();
        assert_eq!(left.status, MemberStatus::Left);

        // The (house, user) pair stays unique for the row's lifetime.
        assert!(matches!(
            store.join_house(house.id, user.id, MemberRole::Member),
            Err(StoreError::DuplicateMember { .. })
        ));
    }
}
