//! Append-only audit trail types.

pub mod types;

pub use types::{AuditEventKind, AuditLogEntry, AuditTargetType};
