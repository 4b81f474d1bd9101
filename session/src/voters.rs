//! Voter records and the registry keyed by address.

use crate::error::SessionError;
use crate::proposals::ProposalId;
use scrutin_types::VoterAddress;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A voter's registration and voting record.
///
/// `has_voted`/`voted_proposal_id` flip exactly once, when the voter casts
/// their vote. Records are never deleted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    pub is_registered: bool,
    pub has_voted: bool,
    pub voted_proposal_id: ProposalId,
}

/// Registry of every identity the administrator has registered.
#[derive(Clone, Debug, Default)]
pub struct VoterRegistry {
    voters: HashMap<VoterAddress, Voter>,
}

impl VoterRegistry {
    /// Register an identity. Fails if it is already registered.
    pub fn register(&mut self, address: &VoterAddress) -> Result<(), SessionError> {
        let record = self.voters.entry(address.clone()).or_default();
        if record.is_registered {
            return Err(SessionError::AlreadyRegistered);
        }
        record.is_registered = true;
        Ok(())
    }

    /// Whether the identity is a registered voter.
    pub fn is_registered(&self, address: &VoterAddress) -> bool {
        self.voters
            .get(address)
            .is_some_and(|record| record.is_registered)
    }

    /// The record for an identity. Unknown identities read as the default
    /// all-false record, matching the original's mapping semantics.
    pub fn get(&self, address: &VoterAddress) -> Voter {
        self.voters.get(address).cloned().unwrap_or_default()
    }

    /// Record that a registered voter cast their vote for `proposal_id`.
    ///
    /// Fails if the voter has already voted. The caller is responsible for
    /// the registration and phase guards.
    pub fn record_vote(
        &mut self,
        address: &VoterAddress,
        proposal_id: ProposalId,
    ) -> Result<(), SessionError> {
        let record = self
            .voters
            .get_mut(address)
            .ok_or(SessionError::NotAVoter)?;
        if record.has_voted {
            return Err(SessionError::AlreadyVoted);
        }
        record.has_voted = true;
        record.voted_proposal_id = proposal_id;
        Ok(())
    }

    /// Number of registered identities.
    pub fn len(&self) -> usize {
        self.voters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voters.is_empty()
    }

    /// Iterate over all records.
    pub fn iter(&self) -> impl Iterator<Item = (&VoterAddress, &Voter)> {
        self.voters.iter()
    }
}
