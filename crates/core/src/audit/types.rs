//! Audit log domain types.
//!
//! Audit entries are written once and never updated or deleted. They exist
//! for traceability, not for state reconstruction.

use chrono::{DateTime, Utc};
use hearth_shared::types::{AuditEntryId, HouseId, UserId};
use serde::{Deserialize, Serialize};

/// Governance and ledger event kinds recorded in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEventKind {
    /// A house was created.
    HouseCreated,
    /// A user joined a house.
    MemberJoined,
    /// A member left a house voluntarily.
    MemberLeft,
    /// A member was expelled by an approved veto.
    MemberRemoved,
    /// A member's contribution score was adjusted.
    ContributionAdjusted,
    /// A member received a warning.
    WarningRecorded,
    /// A balanced transaction was recorded.
    TransactionCreated,
    /// An asset was registered.
    AssetRegistered,
    /// A veto proposal was opened.
    VetoProposed,
    /// A vote was cast on a veto proposal.
    VetoVoteCast,
    /// A veto proposal was approved.
    VetoApproved,
    /// A veto proposal was rejected.
    VetoRejected,
    /// A merge proposal was opened.
    MergeProposed,
    /// A vote was cast on a merge proposal.
    MergeVoteCast,
    /// A merge proposal was approved.
    MergeApproved,
    /// A merge proposal was rejected.
    MergeRejected,
}

impl AuditEventKind {
    /// Returns the stable string form recorded in exports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HouseCreated => "house_created",
            Self::MemberJoined => "member_joined",
            Self::MemberLeft => "member_left",
            Self::MemberRemoved => "member_removed",
            Self::ContributionAdjusted => "contribution_adjusted",
            Self::WarningRecorded => "warning_recorded",
            Self::TransactionCreated => "transaction_created",
            Self::AssetRegistered => "asset_registered",
            Self::VetoProposed => "veto_proposed",
            Self::VetoVoteCast => "veto_vote_cast",
            Self::VetoApproved => "veto_approved",
            Self::VetoRejected => "veto_rejected",
            Self::MergeProposed => "merge_proposed",
            Self::MergeVoteCast => "merge_vote_cast",
            Self::MergeApproved => "merge_approved",
            Self::MergeRejected => "merge_rejected",
        }
    }
}

/// The kind of entity an audit entry points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditTargetType {
    /// A house.
    House,
    /// A house membership row.
    Member,
    /// A transaction.
    Transaction,
    /// A registered asset.
    Asset,
    /// A veto proposal.
    VetoProposal,
    /// A merge proposal.
    MergeProposal,
}

/// One immutable audit record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogEntry {
    /// Unique identifier; also encodes append order.
    pub id: AuditEntryId,
    /// What happened.
    pub event: AuditEventKind,
    /// Who did it.
    pub acting_user: UserId,
    /// The house in whose scope it happened.
    pub house_id: HouseId,
    /// The kind of entity affected.
    pub target_type: AuditTargetType,
    /// The raw id of the affected entity.
    pub target_id: i64,
    /// JSON snapshot of the new value.
    pub snapshot: serde_json::Value,
    /// When the event was recorded.
    pub recorded_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_strings_match_export_format() {
        assert_eq!(AuditEventKind::TransactionCreated.as_str(), "transaction_created");
        assert_eq!(AuditEventKind::VetoProposed.as_str(), "veto_proposed");
        assert_eq!(AuditEventKind::MergeProposed.as_str(), "merge_proposed");
        assert_eq!(AuditEventKind::HouseCreated.as_str(), "house_created");
        assert_eq!(AuditEventKind::MemberJoined.as_str(), "member_joined");
    }

    #[test]
    fn test_event_kind_serde_matches_as_str() {
        let json = serde_json::to_string(&AuditEventKind::VetoApproved).unwrap();
        assert_eq!(json, "\"veto_approved\"");
    }

    #[test]
    fn test_target_type_serde_forms() {
        // One target kind per audited entity; every variant has a writer.
        let forms: Vec<String> = [
            AuditTargetType::House,
            AuditTargetType::Member,
            AuditTargetType::Transaction,
            AuditTargetType::Asset,
            AuditTargetType::VetoProposal,
            AuditTargetType::MergeProposal,
        ]
        .iter()
        .map(|t| serde_json::to_string(t).unwrap())
        .collect();
        assert_eq!(
            forms,
            vec![
                "\"house\"",
                "\"member\"",
                "\"transaction\"",
                "\"asset\"",
                "\"veto_proposal\"",
                "\"merge_proposal\"",
            ]
        );
    }
}
