//! Governance error types.

use hearth_shared::types::{HouseId, MemberId, UserId};
use thiserror::Error;

use super::types::ProposalStatus;

/// Errors that can occur during proposal and voting operations.
#[derive(Debug, Error)]
pub enum GovernanceError {
    /// The voter already voted on this proposal.
    #[error("User {voter} has already voted on this proposal")]
    DuplicateVote {
        /// The voting user.
        voter: UserId,
    },

    /// The proposal has reached a terminal state.
    #[error("Proposal is closed ({status:?}); no further votes or transitions")]
    ClosedProposal {
        /// The terminal status.
        status: ProposalStatus,
    },

    /// The user is not eligible to vote on this proposal.
    #[error("User {voter} is not an eligible voter on this proposal")]
    NotEligible {
        /// The would-be voter.
        voter: UserId,
    },

    /// The veto target is not an active member.
    #[error("Member {member} is not active and cannot be targeted")]
    TargetNotActive {
        /// The targeted membership row.
        member: MemberId,
    },

    /// A member may not propose their own expulsion.
    #[error("User {proposer} cannot propose a veto against themselves")]
    SelfVeto {
        /// The proposing user.
        proposer: UserId,
    },

    /// A house cannot merge with itself.
    #[error("Source and target house must differ, got {0} for both")]
    SameHouseMerge(HouseId),

    /// The house is deactivated and cannot take part in governance.
    #[error("House {0} is not active")]
    HouseInactive(HouseId),
}
