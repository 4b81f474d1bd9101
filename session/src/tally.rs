//! Deterministic tally — single pass, earliest id wins ties.

use crate::proposals::{Proposal, ProposalId};

/// Compute the winning proposal id.
///
/// Scans in ascending id order tracking the maximum vote count seen; a
/// proposal takes the lead only when its count is strictly greater than
/// the current leader's, so equal later totals never displace an earlier
/// leader. With no votes the GENESIS sentinel at id 0 wins by default.
pub fn winning_proposal(proposals: &[Proposal]) -> ProposalId {
    let mut winner: ProposalId = 0;
    let mut best_count: u32 = 0;
    for (id, proposal) in proposals.iter().enumerate() {
        if proposal.vote_count > best_count {
            best_count = proposal.vote_count;
            winner = id as ProposalId;
        }
    }
    winner
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proposals(counts: &[u32]) -> Vec<Proposal> {
        counts
            .iter()
            .map(|&vote_count| Proposal {
                description: "p".to_string(),
                vote_count,
            })
            .collect()
    }

    #[test]
    fn highest_count_wins() {
        assert_eq!(winning_proposal(&proposals(&[0, 2, 5, 1])), 2);
    }

    #[test]
    fn tie_keeps_earliest_id() {
        // Proposals 1 and 2 both have 2 votes; 1 was registered first.
        assert_eq!(winning_proposal(&proposals(&[0, 2, 2])), 1);
    }

    #[test]
    fn later_strictly_greater_takes_lead() {
        assert_eq!(winning_proposal(&proposals(&[0, 2, 3])), 2);
    }

    #[test]
    fn no_votes_defaults_to_genesis() {
        assert_eq!(winning_proposal(&proposals(&[0, 0, 0])), 0);
        assert_eq!(winning_proposal(&[]), 0);
    }
}
