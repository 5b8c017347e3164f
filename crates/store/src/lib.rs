//! Authoritative in-process data store for Hearth.
//!
//! One relation per entity, keyed by surrogate `i64` ids, plus the mutating
//! operations of the engine. Every mutation validates first and commits
//! second, so a failure leaves the store untouched. Writers are serialised
//! statically: all mutations take `&mut self`, reads take `&self`.

use std::collections::BTreeMap;

use hearth_core::assets::{Asset, AssetError};
use hearth_core::audit::AuditLogEntry;
use hearth_core::governance::{GovernanceError, MergeProposal, MergeVote, VetoProposal, VetoVote};
use hearth_core::ledger::{Account, LedgerError, Transaction, TransactionEntry};
use hearth_core::membership::{House, HouseMember, User};
use hearth_shared::config::EngineConfig;
use hearth_shared::error::AppError;
use hearth_shared::types::{
    AccountId, AssetId, EntryId, HouseId, MemberId, MergeProposalId, MergeVoteId, TransactionId,
    UserId, VetoProposalId, VetoVoteId,
};
use thiserror::Error;

mod assets;
mod audit;
mod governance;
mod houses;
mod ledger;
mod membership;
mod networth;
mod stats;


pub use houses::{CreateHouseInput, CreateUserInput};
pub use ledger::CreateAccountInput;
pub use membership::MemberSearchHit;
pub use stats::{HouseRanking, SystemStats};

/// Result type alias using `StoreError`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors returned by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Ledger validation failure.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Asset validation failure.
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// Governance rule violation.
    #[error(transparent)]
    Governance(#[from] GovernanceError),

    /// Referenced entity does not exist.
    #[error("{entity} {id} not found")]
    NotFound {
        /// The entity kind.
        entity: &'static str,
        /// The raw id looked up.
        id: i64,
    },

    /// The (house, user) membership pair already exists.
    #[error("User {user} already has a membership row in house {house}")]
    DuplicateMember {
        /// The user.
        user: UserId,
        /// The house.
        house: HouseId,
    },

    /// House names are unique.
    #[error("House name '{0}' is already taken")]
    DuplicateHouseName(String),

    /// Usernames are unique.
    #[error("Username '{0}' is already taken")]
    DuplicateUsername(String),

    /// A sub-account must live under a parent in the same house.
    #[error("Parent account {parent} does not belong to house {house}")]
    ParentAccountMismatch {
        /// The parent account.
        parent: AccountId,
        /// The house the new account is created in.
        house: HouseId,
    },

    /// The user is not an active member of the house.
    #[error("User {user} is not an active member of house {house}")]
    NotAMember {
        /// The user.
        user: UserId,
        /// The house.
        house: HouseId,
    },
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => AppError::NotFound(err.to_string()),
            StoreError::Governance(GovernanceError::DuplicateVote { .. })
            | StoreError::DuplicateMember { .. }
            | StoreError::DuplicateHouseName(_)
            | StoreError::DuplicateUsername(_) => AppError::Conflict(err.to_string()),
            StoreError::Asset(AssetError::InvalidOwnership { .. }) => {
                AppError::Validation(err.to_string())
            }
            _ => AppError::BusinessRule(err.to_string()),
        }
    }
}

/// The single authoritative data store.
///
/// Holds every relation of the engine. There is no module-level state;
/// callers own the store and pass it explicitly.
#[derive(Debug)]
pub struct Store {
    config: EngineConfig,
    houses: BTreeMap<HouseId, House>,
    users: BTreeMap<UserId, User>,
    members: BTreeMap<MemberId, HouseMember>,
    accounts: BTreeMap<AccountId, Account>,
    transactions: BTreeMap<TransactionId, Transaction>,
    entries: BTreeMap<EntryId, TransactionEntry>,
    assets: BTreeMap<AssetId, Asset>,
    veto_proposals: BTreeMap<VetoProposalId, VetoProposal>,
    veto_votes: BTreeMap<VetoVoteId, VetoVote>,
    merge_proposals: BTreeMap<MergeProposalId, MergeProposal>,
    merge_votes: BTreeMap<MergeVoteId, MergeVote>,
    audit_log: Vec<AuditLogEntry>,
    sequence: i64,
}

impl Store {
    /// Creates an empty store with the given configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            houses: BTreeMap::new(),
            users: BTreeMap::new(),
            members: BTreeMap::new(),
            accounts: BTreeMap::new(),
            transactions: BTreeMap::new(),
            entries: BTreeMap::new(),
            assets: BTreeMap::new(),
            veto_proposals: BTreeMap::new(),
            veto_votes: BTreeMap::new(),
            merge_proposals: BTreeMap::new(),
            merge_votes: BTreeMap::new(),
            audit_log: Vec::new(),
            sequence: 0,
        }
    }

    /// The engine configuration this store was created with.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Allocates the next surrogate key.
    fn next_id(&mut self) -> i64 {
        self.sequence += 1;
        self.sequence
    }

    fn require_house(&self, id: HouseId) -> StoreResult<&House> {
        self.houses.get(&id).ok_or(StoreError::NotFound {
            entity: "house",
            id: id.into_inner(),
        })
    }

    fn require_active_house(&self, id: HouseId) -> StoreResult<&House> {
        let house = self.require_house(id)?;
        if !house.is_active {
            return Err(GovernanceError::HouseInactive(id).into());
        }
        Ok(house)
    }

    fn require_user(&self, id: UserId) -> StoreResult<&User> {
        self.users.get(&id).ok_or(StoreError::NotFound {
            entity: "user",
            id: id.into_inner(),
        })
    }

    /// The membership row for a (house, user) pair, regardless of status.
    fn member_row(&self, house: HouseId, user: UserId) -> Option<&HouseMember> {
        self.members
            .values()
            .find(|m| m.house_id == house && m.user_id == user)
    }

    /// The membership row for an active (house, user) pair.
    fn active_member(&self, house: HouseId, user: UserId) -> StoreResult<&HouseMember> {
        self.member_row(house, user)
            .filter(|m| m.is_active())
            .ok_or(StoreError::NotAMember { user, house })
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
