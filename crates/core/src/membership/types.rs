//! Household membership domain types.

use chrono::{DateTime, Utc};
use hearth_shared::types::{HouseId, MemberId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A multi-member household with shared finances and governance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct House {
    /// Unique identifier.
    pub id: HouseId,
    /// Unique house name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional motto.
    pub motto: Option<String>,
    /// Optional house rules text.
    pub rules: Option<String>,
    /// The founding user.
    pub founder_id: UserId,
    /// Deactivated when absorbed by a merge.
    pub is_active: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Stamped on the target house when a merge completes.
    pub last_merge_date: Option<DateTime<Utc>>,
}

/// A person; may belong to any number of houses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: UserId,
    /// Unique username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Display name.
    pub full_name: String,
}

/// Member role within a house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    /// The house founder.
    Founder,
    /// A house president.
    President,
    /// A regular member.
    Member,
}

impl MemberRole {
    /// Returns the ordering rank (founder first).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Founder => 1,
            Self::President => 2,
            Self::Member => 3,
        }
    }

    /// Returns true if `self` outranks `other`.
    #[must_use]
    pub const fn outranks(self, other: Self) -> bool {
        self.rank() < other.rank()
    }

    /// Returns the string representation of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Founder => "founder",
            Self::President => "president",
            Self::Member => "member",
        }
    }
}

/// Membership status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    /// Active member.
    Active,
    /// Expelled by an approved veto proposal.
    Removed,
    /// Left voluntarily.
    Left,
}

/// A (house, user) membership row.
///
/// The (house, user) pair is unique for the lifetime of the row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseMember {
    /// Unique identifier; also encodes join order.
    pub id: MemberId,
    /// The house.
    pub house_id: HouseId,
    /// The user.
    pub user_id: UserId,
    /// Role within the house.
    pub role: MemberRole,
    /// Membership status.
    pub status: MemberStatus,
    /// Signed contribution score.
    pub contribution_score: Decimal,
    /// Number of warnings issued.
    pub warning_count: u32,
    /// When the user joined.
    pub joined_at: DateTime<Utc>,
}

impl HouseMember {
    /// Returns true if this member is currently active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, MemberStatus::Active)
    }
}
