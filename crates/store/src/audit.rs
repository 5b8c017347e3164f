//! Append-only audit log operations.

use chrono::Utc;
use hearth_core::audit::{AuditEventKind, AuditLogEntry, AuditTargetType};
use hearth_shared::types::{AuditEntryId, HouseId, UserId};

use crate::Store;

impl Store {
    /// Appends an audit record. Entries are never updated or deleted.
    pub fn record_audit(
        &mut self,
        event: AuditEventKind,
        acting_user: UserId,
        house_id: HouseId,
        target_type: AuditTargetType,
        target_id: i64,
        snapshot: serde_json::Value,
    ) {
        let id = AuditEntryId::from_raw(self.next_id());
        tracing::debug!(
            audit_id = %id,
            event = event.as_str(),
            %acting_user,
            %house_id,
            target_id,
            "audit entry recorded"
        );
        self.audit_log.push(AuditLogEntry {
            id,
            event,
            acting_user,
            house_id,
            target_type,
            target_id,
            snapshot,
            recorded_at: Utc::now(),
        });
    }

    /// Audit entries for a house, in append order.
    #[must_use]
    pub fn audit_entries_for(&self, house: HouseId) -> Vec<&AuditLogEntry> {
        self.audit_log
            .iter()
            .filter(|e| e.house_id == house)
            .collect()
    }

    /// Total number of audit entries across all houses.
    #[must_use]
    pub fn audit_len(&self) -> usize {
        self.audit_log.len()
    }
}
