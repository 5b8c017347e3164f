//! Quorum tally logic shared by veto and merge proposals.
//!
//! Resolution is evaluated synchronously after every vote. A proposal is
//! approved when affirmative votes reach quorum (and the founder has voted
//! yes where required), and rejected as soon as quorum becomes
//! mathematically unreachable.

/// The vote counts and quorum parameters for one resolution pass.
#[derive(Debug, Clone, Copy)]
pub struct Tally {
    /// Affirmative votes cast.
    pub affirmative: u32,
    /// Negative votes cast.
    pub negative: u32,
    /// Affirmative votes required for approval.
    pub votes_required: u32,
    /// Number of eligible voters, including those who already voted.
    pub eligible_voters: u32,
    /// Whether the founder must vote yes for approval.
    pub founder_approval_required: bool,
    /// The founder's vote, if cast.
    pub founder_vote: Option<bool>,
}

/// Outcome of a resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TallyOutcome {
    /// Quorum reached, founder requirement satisfied.
    Approved,
    /// Quorum can no longer be reached.
    Rejected,
    /// Still open for voting.
    Pending,
}

impl Tally {
    /// Votes not yet cast by eligible voters.
    #[must_use]
    pub const fn uncast(&self) -> u32 {
        self.eligible_voters
            .saturating_sub(self.affirmative + self.negative)
    }

    /// Resolves the tally into an outcome.
    #[must_use]
    pub fn resolve(&self) -> TallyOutcome {
        // A required founder voting no makes approval unreachable.
        if self.founder_approval_required && self.founder_vote == Some(false) {
            return TallyOutcome::Rejected;
        }

        let founder_satisfied = !self.founder_approval_required || self.founder_vote == Some(true);
        if self.affirmative >= self.votes_required && founder_satisfied {
            return TallyOutcome::Approved;
        }

        // Even if every remaining eligible voter votes yes, quorum fails.
        if self.affirmative + self.uncast() < self.votes_required {
            return TallyOutcome::Rejected;
        }

        TallyOutcome::Pending
    }
}
