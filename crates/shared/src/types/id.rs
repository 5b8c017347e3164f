//! Typed IDs for type-safe entity references.
//!
//! Every relation is keyed by a surrogate `i64` assigned by the store.
//! Wrapping the raw key prevents accidentally passing a `UserId` where a
//! `HouseId` is expected.

use serde::{Deserialize, Serialize};

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Creates an ID from a raw surrogate key.
            #[must_use]
            pub const fn from_raw(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the raw surrogate key.
            #[must_use]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

typed_id!(UserId, "Unique identifier for a user.");
typed_id!(HouseId, "Unique identifier for a house.");
typed_id!(MemberId, "Unique identifier for a house membership row.");
typed_id!(AccountId, "Unique identifier for a chart of accounts entry.");
typed_id!(TransactionId, "Unique identifier for a transaction.");
typed_id!(EntryId, "Unique identifier for a transaction entry.");
typed_id!(AssetId, "Unique identifier for a registered asset.");
typed_id!(VetoProposalId, "Unique identifier for a veto proposal.");
typed_id!(VetoVoteId, "Unique identifier for a veto vote.");
typed_id!(MergeProposalId, "Unique identifier for a merge proposal.");
typed_id!(MergeVoteId, "Unique identifier for a merge vote.");
typed_id!(AuditEntryId, "Unique identifier for an audit log entry.");
