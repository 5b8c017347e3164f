//! Veto and merge proposal governance.
//!
//! Both proposal kinds share one quorum/tally state machine; the store
//! layer applies their differing side effects on approval.

pub mod error;
pub mod tally;
pub mod types;

#[cfg(test)]
mod tally_props;

pub use error::GovernanceError;
pub use tally::{Tally, TallyOutcome};
pub use types::{MergeProposal, MergeVote, ProposalStatus, VetoProposal, VetoVote};
