//! Property tests for the quorum tally.

use proptest::prelude::*;

use super::tally::{Tally, TallyOutcome};

fn tally_strategy() -> impl Strategy<Value = Tally> {
    (0u32..20, 0u32..20, 1u32..10, 0u32..40, any::<bool>(), prop::option::of(any::<bool>()))
        .prop_map(
            |(affirmative, negative, votes_required, eligible_voters, founder_required, founder_vote)| {
                Tally {
                    affirmative,
                    negative,
                    votes_required,
                    eligible_voters,
                    founder_approval_required: founder_required,
                    founder_vote,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Approval always means quorum was reached and the founder
    /// requirement was satisfied.
    #[test]
    fn prop_approved_implies_quorum(t in tally_strategy()) {
        if t.resolve() == TallyOutcome::Approved {
            prop_assert!(t.affirmative >= t.votes_required);
            prop_assert!(!t.founder_approval_required || t.founder_vote == Some(true));
        }
    }

    /// Rejection always means approval had become unreachable.
    #[test]
    fn prop_rejected_implies_unreachable(t in tally_strategy()) {
        if t.resolve() == TallyOutcome::Rejected {
            let founder_blocked =
                t.founder_approval_required && t.founder_vote == Some(false);
            let quorum_unreachable = t.affirmative + t.uncast() < t.votes_required;
            prop_assert!(founder_blocked || quorum_unreachable);
        }
    }

    /// Resolution is a pure function of the tally.
    #[test]
    fn prop_resolve_deterministic(t in tally_strategy()) {
        prop_assert_eq!(t.resolve(), t.resolve());
    }

    /// An additional affirmative vote never turns an approval into a
    /// rejection.
    #[test]
    fn prop_affirmative_vote_monotone(t in tally_strategy()) {
        prop_assume!(t.uncast() > 0);
        if t.resolve() == TallyOutcome::Approved {
            let more = Tally { affirmative: t.affirmative + 1, ..t };
            prop_assert_eq!(more.resolve(), TallyOutcome::Approved);
        }
    }
}
