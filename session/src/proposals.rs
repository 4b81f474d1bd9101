//! Proposals: an append-only, index-addressable registry.
//!
//! Ids are dense and contiguous from 0; id 0 is always the GENESIS
//! sentinel created when the proposal phase opens, so the registry is
//! never empty once proposals are allowed and the default winner 0 always
//! resolves.

use crate::error::SessionError;
use serde::{Deserialize, Serialize};

/// Dense sequential proposal id (0-based, assignment order = submission order).
pub type ProposalId = u32;

/// Description of the sentinel proposal auto-created at id 0.
pub const GENESIS_DESCRIPTION: &str = "GENESIS";

/// A submitted proposal and its running vote count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub description: String,
    pub vote_count: u32,
}

/// The ordered list of proposals. O(1) append and id lookup, no deletion.
#[derive(Clone, Debug, Default)]
pub struct ProposalRegistry {
    proposals: Vec<Proposal>,
}

impl ProposalRegistry {
    /// Append the GENESIS sentinel. Called exactly once, when the proposal
    /// registration phase opens. Returns its id (always 0).
    pub fn open(&mut self) -> ProposalId {
        debug_assert!(self.proposals.is_empty());
        self.append_unchecked(GENESIS_DESCRIPTION.to_string())
    }

    /// Append a proposal with the next sequential id and a zero vote count.
    ///
    /// Fails if the description is empty or blank.
    pub fn append(&mut self, description: &str) -> Result<ProposalId, SessionError> {
        if description.trim().is_empty() {
            return Err(SessionError::EmptyProposal);
        }
        Ok(self.append_unchecked(description.to_string()))
    }

    fn append_unchecked(&mut self, description: String) -> ProposalId {
        let id = self.proposals.len() as ProposalId;
        self.proposals.push(Proposal {
            description,
            vote_count: 0,
        });
        id
    }

    /// The proposal at `id`, if it exists.
    pub fn get(&self, id: ProposalId) -> Option<&Proposal> {
        self.proposals.get(id as usize)
    }

    /// Increment the vote count of `id` by exactly 1.
    ///
    /// Returns the new count, or `ProposalNotFound` for an out-of-range id.
    pub fn record_vote(&mut self, id: ProposalId) -> Result<u32, SessionError> {
        let proposal = self
            .proposals
            .get_mut(id as usize)
            .ok_or(SessionError::ProposalNotFound)?;
        proposal.vote_count += 1;
        Ok(proposal.vote_count)
    }

    /// Number of proposals, including the GENESIS sentinel.
    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }

    /// All proposals in id order.
    pub fn as_slice(&self) -> &[Proposal] {
        &self.proposals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_creates_genesis_at_zero() {
        let mut reg = ProposalRegistry::default();
        let id = reg.open();
        assert_eq!(id, 0);
        let genesis = reg.get(0).unwrap();
        assert_eq!(genesis.description, GENESIS_DESCRIPTION);
        assert_eq!(genesis.vote_count, 0);
    }

    #[test]
    fn ids_are_dense_and_sequential() {
        let mut reg = ProposalRegistry::default();
        reg.open();
        assert_eq!(reg.append("Proposal 1").unwrap(), 1);
        assert_eq!(reg.append("Proposal 2").unwrap(), 2);
        assert_eq!(reg.len(), 3);
        assert_eq!(reg.get(2).unwrap().description, "Proposal 2");
    }

    #[test]
    fn blank_description_rejected() {
        let mut reg = ProposalRegistry::default();
        reg.open();
        assert_eq!(reg.append(""), Err(SessionError::EmptyProposal));
        assert_eq!(reg.append("   "), Err(SessionError::EmptyProposal));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn record_vote_increments_by_one() {
        let mut reg = ProposalRegistry::default();
        reg.open();
        reg.append("Proposal 1").unwrap();
        assert_eq!(reg.record_vote(1).unwrap(), 1);
        assert_eq!(reg.record_vote(1).unwrap(), 2);
        assert_eq!(reg.get(1).unwrap().vote_count, 2);
        assert_eq!(reg.get(0).unwrap().vote_count, 0);
    }

    #[test]
    fn out_of_range_lookup_and_vote_rejected() {
        let mut reg = ProposalRegistry::default();
        reg.open();
        assert!(reg.get(99).is_none());
        assert_eq!(reg.record_vote(99), Err(SessionError::ProposalNotFound));
    }
}
