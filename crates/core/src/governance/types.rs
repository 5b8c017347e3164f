//! Proposal and vote domain types.

use chrono::{DateTime, Utc};
use hearth_shared::types::{
    HouseId, MemberId, MergeProposalId, MergeVoteId, UserId, VetoProposalId, VetoVoteId,
};
use serde::{Deserialize, Serialize};

/// Proposal status; `Approved` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    /// Open for voting.
    Pending,
    /// Quorum reached; side effects applied.
    Approved,
    /// Quorum became unreachable.
    Rejected,
}

impl ProposalStatus {
    /// Returns true if no further transition is possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

/// A proposal to expel a member from a house.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VetoProposal {
    /// Unique identifier.
    pub id: VetoProposalId,
    /// The house voting.
    pub house_id: HouseId,
    /// The proposing user.
    pub proposed_by: UserId,
    /// The membership row to be removed.
    pub target_member: MemberId,
    /// Why the expulsion is proposed.
    pub reason: String,
    /// Affirmative votes required.
    pub votes_required: u32,
    /// Whether the house founder must vote yes.
    pub founder_approval_required: bool,
    /// Current status.
    pub status: ProposalStatus,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// A vote on a veto proposal. One vote per (proposal, voter).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VetoVote {
    /// Unique identifier.
    pub id: VetoVoteId,
    /// The proposal voted on.
    pub proposal_id: VetoProposalId,
    /// The voting user.
    pub voter: UserId,
    /// Affirmative or negative.
    pub vote: bool,
    /// Optional comment.
    pub comment: Option<String>,
}

/// A proposal to merge the source house into the target house.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeProposal {
    /// Unique identifier.
    pub id: MergeProposalId,
    /// The house being absorbed.
    pub source_house: HouseId,
    /// The house absorbing the source.
    pub target_house: HouseId,
    /// The proposing user.
    pub proposed_by: UserId,
    /// Merge terms text.
    pub terms: String,
    /// Affirmative votes required, fixed at propose time.
    pub votes_required: u32,
    /// Current status.
    pub status: ProposalStatus,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// A vote on a merge proposal. One vote per (proposal, voter).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeVote {
    /// Unique identifier.
    pub id: MergeVoteId,
    /// The proposal voted on.
    pub proposal_id: MergeProposalId,
    /// The voting user.
    pub voter: UserId,
    /// Affirmative or negative.
    pub vote: bool,
    /// Optional comment.
    pub comment: Option<String>,
}
