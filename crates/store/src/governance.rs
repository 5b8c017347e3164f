//! Veto and merge proposals: propose, vote, resolve.
//!
//! Resolution runs synchronously after every vote, inside the same `&mut`
//! borrow, so a caller never observes a proposal whose outcome is already
//! decided but not yet applied.

use std::collections::BTreeSet;

use chrono::Utc;
use hearth_core::assets::AssetOwner;
use hearth_core::audit::{AuditEventKind, AuditTargetType};
use hearth_core::governance::{
    GovernanceError, MergeProposal, MergeVote, ProposalStatus, Tally, TallyOutcome, VetoProposal,
    VetoVote,
};
use hearth_core::membership::MemberStatus;
use hearth_shared::types::{
    HouseId, MergeProposalId, MergeVoteId, UserId, VetoProposalId, VetoVoteId,
};
use serde_json::json;

use crate::{Store, StoreError, StoreResult};

impl Store {
    /// Opens a veto proposal against `target` in `house`.
    ///
    /// `votes_required` and `founder_approval_required` fall back to the
    /// configured defaults when omitted.
    ///
    /// # Errors
    ///
    /// Fails when the house is inactive, the proposer or target is not an
    /// active member, or the proposer targets themselves.
    pub fn propose_veto(
        &mut self,
        house: HouseId,
        proposer: UserId,
        target: UserId,
        reason: String,
        votes_required: Option<u32>,
        founder_approval_required: Option<bool>,
    ) -> StoreResult<VetoProposal> {
        self.require_active_house(house)?;
        self.active_member(house, proposer)?;
        if proposer == target {
            return Err(GovernanceError::SelfVeto { proposer }.into());
        }
        let target_row = self
            .member_row(house, target)
            .ok_or(StoreError::NotAMember {
                user: target,
                house,
            })?;
        if !target_row.is_active() {
            return Err(GovernanceError::TargetNotActive {
                member: target_row.id,
            }
            .into());
        }
        let target_member = target_row.id;

        let id = VetoProposalId::from_raw(self.next_id());
        let proposal = VetoProposal {
            id,
            house_id: house,
            proposed_by: proposer,
            target_member,
            reason,
            votes_required: votes_required
                .unwrap_or(self.config.governance.veto_votes_required),
            founder_approval_required: founder_approval_required
                .unwrap_or(self.config.governance.founder_approval_required),
            status: ProposalStatus::Pending,
            created_at: Utc::now(),
        };
        tracing::info!(
            proposal_id = %id,
            house_id = %house,
            proposer = %proposer,
            target = %target,
            votes_required = proposal.votes_required,
            "veto proposed"
        );
        self.veto_proposals.insert(id, proposal.clone());
        self.record_audit(
            AuditEventKind::VetoProposed,
            proposer,
            house,
            AuditTargetType::VetoProposal,
            id.into_inner(),
            json!({ "target_member": target_member.into_inner(), "reason": proposal.reason.clone() }),
        );
        Ok(proposal)
    }

    /// Casts a vote on a veto proposal, then resolves it.
    ///
    /// # Errors
    ///
    /// Fails on a closed proposal, an ineligible voter (non-members and the
    /// target itself), or a second vote by the same voter.
    pub fn cast_veto_vote(
        &mut self,
        proposal: VetoProposalId,
        voter: UserId,
        vote: bool,
        comment: Option<String>,
    ) -> StoreResult<ProposalStatus> {
        let row = self
            .veto_proposals
            .get(&proposal)
            .ok_or(StoreError::NotFound {
                entity: "veto proposal",
                id: proposal.into_inner(),
            })?;
        if row.status.is_terminal() {
            return Err(GovernanceError::ClosedProposal { status: row.status }.into());
        }
        if !self.veto_electorate(row)?.contains(&voter) {
            return Err(GovernanceError::NotEligible { voter }.into());
        }
        if self
            .veto_votes
            .values()
            .any(|v| v.proposal_id == proposal && v.voter == voter)
        {
            return Err(GovernanceError::DuplicateVote { voter }.into());
        }
        let house = row.house_id;

        let id = VetoVoteId::from_raw(self.next_id());
        self.veto_votes.insert(
            id,
            VetoVote {
                id,
                proposal_id: proposal,
                voter,
                vote,
                comment,
            },
        );
        self.record_audit(
            AuditEventKind::VetoVoteCast,
            voter,
            house,
            AuditTargetType::VetoProposal,
            proposal.into_inner(),
            json!({ "vote": vote }),
        );
        self.resolve_veto(proposal)
    }

    /// Resolves a veto proposal against the current vote state.
    ///
    /// A no-op returning the stored status when the proposal is already
    /// terminal. On approval the target membership row becomes removed.
    ///
    /// # Errors
    ///
    /// Fails when the proposal or its target row does not exist.
    pub fn resolve_veto(&mut self, proposal: VetoProposalId) -> StoreResult<ProposalStatus> {
        let row = self
            .veto_proposals
            .get(&proposal)
            .ok_or(StoreError::NotFound {
                entity: "veto proposal",
                id: proposal.into_inner(),
            })?;
        if row.status.is_terminal() {
            return Ok(row.status);
        }
        let row = row.clone();

        let electorate = self.veto_electorate(&row)?;
        let founder = self.require_house(row.house_id)?.founder_id;
        let votes: Vec<&VetoVote> = self
            .veto_votes
            .values()
            .filter(|v| v.proposal_id == proposal)
            .collect();
        let tally = Tally {
            affirmative: count_cast(votes.iter().map(|v| v.vote), true),
            negative: count_cast(votes.iter().map(|v| v.vote), false),
            votes_required: row.votes_required,
            eligible_voters: u32::try_from(electorate.len()).unwrap_or(u32::MAX),
            founder_approval_required: row.founder_approval_required,
            founder_vote: votes.iter().find(|v| v.voter == founder).map(|v| v.vote),
        };

        match tally.resolve() {
            TallyOutcome::Pending => Ok(ProposalStatus::Pending),
            TallyOutcome::Approved => {
                let Some(member) = self.members.get_mut(&row.target_member) else {
                    return Err(StoreError::NotFound {
                        entity: "member",
                        id: row.target_member.into_inner(),
                    });
                };
                member.status = MemberStatus::Removed;
                let target_user = member.user_id;
                self.set_veto_status(proposal, ProposalStatus::Approved);
                tracing::info!(
                    proposal_id = %proposal,
                    member_id = %row.target_member,
                    "veto approved, member removed"
                );
                self.record_audit(
                    AuditEventKind::VetoApproved,
                    row.proposed_by,
                    row.house_id,
                    AuditTargetType::VetoProposal,
                    proposal.into_inner(),
                    json!({ "target_member": row.target_member.into_inner() }),
                );
                self.record_audit(
                    AuditEventKind::MemberRemoved,
                    row.proposed_by,
                    row.house_id,
                    AuditTargetType::Member,
                    row.target_member.into_inner(),
                    json!({ "user": target_user.into_inner(), "status": "removed" }),
                );
                Ok(ProposalStatus::Approved)
            }
            TallyOutcome::Rejected => {
                self.set_veto_status(proposal, ProposalStatus::Rejected);
                tracing::info!(proposal_id = %proposal, "veto rejected");
                self.record_audit(
                    AuditEventKind::VetoRejected,
                    row.proposed_by,
                    row.house_id,
                    AuditTargetType::VetoProposal,
                    proposal.into_inner(),
                    json!({}),
                );
                Ok(ProposalStatus::Rejected)
            }
        }
    }

    /// Opens a proposal to merge `source` into `target`.
    ///
    /// The quorum is a strict majority of the distinct active members of
    /// both houses, fixed at propose time.
    ///
    /// # Errors
    ///
    /// Fails when the houses are not distinct active houses or the proposer
    /// is not an active member of either.
    pub fn propose_merge(
        &mut self,
        source: HouseId,
        target: HouseId,
        proposer: UserId,
        terms: String,
    ) -> StoreResult<MergeProposal> {
        if source == target {
            return Err(GovernanceError::SameHouseMerge(source).into());
        }
        self.require_active_house(source)?;
        self.require_active_house(target)?;
        if self.active_member(source, proposer).is_err() {
            self.active_member(target, proposer)?;
        }

        let electorate = self.merge_electorate(source, target);
        let votes_required = u32::try_from(electorate.len() / 2 + 1).unwrap_or(u32::MAX);

        let id = MergeProposalId::from_raw(self.next_id());
        let proposal = MergeProposal {
            id,
            source_house: source,
            target_house: target,
            proposed_by: proposer,
            terms,
            votes_required,
            status: ProposalStatus::Pending,
            created_at: Utc::now(),
        };
        tracing::info!(
            proposal_id = %id,
            source_house = %source,
            target_house = %target,
            votes_required,
            "merge proposed"
        );
        self.merge_proposals.insert(id, proposal.clone());
        self.record_audit(
            AuditEventKind::MergeProposed,
            proposer,
            source,
            AuditTargetType::MergeProposal,
            id.into_inner(),
            json!({ "target_house": target.into_inner(), "votes_required": votes_required }),
        );
        Ok(proposal)
    }

    /// Casts a vote on a merge proposal, then resolves it.
    ///
    /// # Errors
    ///
    /// Fails on a closed proposal, a voter active in neither house, or a
    /// second vote by the same voter.
    pub fn cast_merge_vote(
        &mut self,
        proposal: MergeProposalId,
        voter: UserId,
        vote: bool,
        comment: Option<String>,
    ) -> StoreResult<ProposalStatus> {
        let row = self
            .merge_proposals
            .get(&proposal)
            .ok_or(StoreError::NotFound {
                entity: "merge proposal",
                id: proposal.into_inner(),
            })?;
        if row.status.is_terminal() {
            return Err(GovernanceError::ClosedProposal { status: row.status }.into());
        }
        if !self
            .merge_electorate(row.source_house, row.target_house)
            .contains(&voter)
        {
            return Err(GovernanceError::NotEligible { voter }.into());
        }
        if self
            .merge_votes
            .values()
            .any(|v| v.proposal_id == proposal && v.voter == voter)
        {
            return Err(GovernanceError::DuplicateVote { voter }.into());
        }
        let source = row.source_house;

        let id = MergeVoteId::from_raw(self.next_id());
        self.merge_votes.insert(
            id,
            MergeVote {
                id,
                proposal_id: proposal,
                voter,
                vote,
                comment,
            },
        );
        self.record_audit(
            AuditEventKind::MergeVoteCast,
            voter,
            source,
            AuditTargetType::MergeProposal,
            proposal.into_inner(),
            json!({ "vote": vote }),
        );
        self.resolve_merge(proposal)
    }

    /// Resolves a merge proposal against the current vote state.
    ///
    /// On approval the source house's accounts, transactions, house-owned
    /// assets and active members are re-parented to the target, the source
    /// is deactivated, and the target's `last_merge_date` is stamped. A user
    /// active in both houses keeps the higher-ranked role.
    ///
    /// # Errors
    ///
    /// Fails when the proposal does not exist.
    pub fn resolve_merge(&mut self, proposal: MergeProposalId) -> StoreResult<ProposalStatus> {
        let row = self
            .merge_proposals
            .get(&proposal)
            .ok_or(StoreError::NotFound {
                entity: "merge proposal",
                id: proposal.into_inner(),
            })?;
        if row.status.is_terminal() {
            return Ok(row.status);
        }
        let row = row.clone();

        let electorate = self.merge_electorate(row.source_house, row.target_house);
        let votes: Vec<&MergeVote> = self
            .merge_votes
            .values()
            .filter(|v| v.proposal_id == proposal)
            .collect();
        let tally = Tally {
            affirmative: count_cast(votes.iter().map(|v| v.vote), true),
            negative: count_cast(votes.iter().map(|v| v.vote), false),
            votes_required: row.votes_required,
            eligible_voters: u32::try_from(electorate.len()).unwrap_or(u32::MAX),
            founder_approval_required: false,
            founder_vote: None,
        };

        match tally.resolve() {
            TallyOutcome::Pending => Ok(ProposalStatus::Pending),
            TallyOutcome::Approved => {
                self.apply_merge(&row);
                self.set_merge_status(proposal, ProposalStatus::Approved);
                tracing::info!(
                    proposal_id = %proposal,
                    source_house = %row.source_house,
                    target_house = %row.target_house,
                    "merge approved"
                );
                self.record_audit(
                    AuditEventKind::MergeApproved,
                    row.proposed_by,
                    row.target_house,
                    AuditTargetType::MergeProposal,
                    proposal.into_inner(),
                    json!({ "source_house": row.source_house.into_inner() }),
                );
                Ok(ProposalStatus::Approved)
            }
            TallyOutcome::Rejected => {
                self.set_merge_status(proposal, ProposalStatus::Rejected);
                tracing::info!(proposal_id = %proposal, "merge rejected");
                self.record_audit(
                    AuditEventKind::MergeRejected,
                    row.proposed_by,
                    row.source_house,
                    AuditTargetType::MergeProposal,
                    proposal.into_inner(),
                    json!({}),
                );
                Ok(ProposalStatus::Rejected)
            }
        }
    }

    /// Pending veto proposals for a house, newest first.
    #[must_use]
    pub fn pending_veto_proposals(&self, house: HouseId) -> Vec<&VetoProposal> {
        self.veto_proposals
            .values()
            .rev()
            .filter(|p| p.house_id == house && p.status == ProposalStatus::Pending)
            .collect()
    }

    /// Pending merge proposals involving a house, newest first.
    #[must_use]
    pub fn pending_merge_proposals(&self, house: HouseId) -> Vec<&MergeProposal> {
        self.merge_proposals
            .values()
            .rev()
            .filter(|p| {
                (p.source_house == house || p.target_house == house)
                    && p.status == ProposalStatus::Pending
            })
            .collect()
    }

    /// A veto proposal by id.
    #[must_use]
    pub fn veto_proposal(&self, id: VetoProposalId) -> Option<&VetoProposal> {
        self.veto_proposals.get(&id)
    }

    /// A merge proposal by id.
    #[must_use]
    pub fn merge_proposal(&self, id: MergeProposalId) -> Option<&MergeProposal> {
        self.merge_proposals.get(&id)
    }

    /// Users eligible to vote on a veto: active members of the house,
    /// excluding the target.
    fn veto_electorate(&self, proposal: &VetoProposal) -> StoreResult<BTreeSet<UserId>> {
        let target = self
            .members
            .get(&proposal.target_member)
            .ok_or(StoreError::NotFound {
                entity: "member",
                id: proposal.target_member.into_inner(),
            })?;
        Ok(self
            .members
            .values()
            .filter(|m| {
                m.house_id == proposal.house_id && m.is_active() && m.user_id != target.user_id
            })
            .map(|m| m.user_id)
            .collect())
    }

    /// Users eligible to vote on a merge: distinct active members of either
    /// house.
    fn merge_electorate(&self, source: HouseId, target: HouseId) -> BTreeSet<UserId> {
        self.members
            .values()
            .filter(|m| (m.house_id == source || m.house_id == target) && m.is_active())
            .map(|m| m.user_id)
            .collect()
    }

    fn set_veto_status(&mut self, id: VetoProposalId, status: ProposalStatus) {
        if let Some(p) = self.veto_proposals.get_mut(&id) {
            p.status = status;
        }
    }

    fn set_merge_status(&mut self, id: MergeProposalId, status: ProposalStatus) {
        if let Some(p) = self.merge_proposals.get_mut(&id) {
            p.status = status;
        }
    }

    /// Applies the merge side effects. Runs after tallying, inside the same
    /// mutable borrow as vote insertion.
    fn apply_merge(&mut self, proposal: &MergeProposal) {
        let source = proposal.source_house;
        let target = proposal.target_house;

        for account in self.accounts.values_mut() {
            if account.house_id == source {
                account.house_id = target;
            }
        }
        for transaction in self.transactions.values_mut() {
            if transaction.house_id == source {
                transaction.house_id = target;
            }
        }
        for asset in self.assets.values_mut() {
            if asset.owner == AssetOwner::House(source) {
                asset.owner = AssetOwner::House(target);
            }
        }

        // Users already active in the target keep the higher-ranked role
        // there; their source row closes as left. Everyone else moves over.
        let target_roles: Vec<(UserId, hearth_core::membership::MemberRole)> = self
            .members
            .values()
            .filter(|m| m.house_id == target && m.is_active())
            .map(|m| (m.user_id, m.role))
            .collect();
        let moving: Vec<_> = self
            .members
            .values()
            .filter(|m| m.house_id == source && m.is_active())
            .map(|m| m.id)
            .collect();
        for member_id in moving {
            let Some(member) = self.members.get_mut(&member_id) else {
                continue;
            };
            let existing = target_roles
                .iter()
                .find(|(user, _)| *user == member.user_id)
                .map(|(_, role)| *role);
            if let Some(target_role) = existing {
                let source_role = member.role;
                member.status = MemberStatus::Left;
                if source_role.outranks(target_role) {
                    let user = member.user_id;
                    for row in self.members.values_mut() {
                        if row.house_id == target && row.user_id == user && row.is_active() {
                            row.role = source_role;
                        }
                    }
                }
            } else {
                member.house_id = target;
            }
        }

        if let Some(house) = self.houses.get_mut(&source) {
            house.is_active = false;
        }
        if let Some(house) = self.houses.get_mut(&target) {
            house.last_merge_date = Some(Utc::now());
        }
    }
}

fn count_cast(votes: impl Iterator<Item = bool>, wanted: bool) -> u32 {
    u32::try_from(votes.filter(|v| *v == wanted).count()).unwrap_or(u32::MAX)
}
