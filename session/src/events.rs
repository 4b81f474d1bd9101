//! Events emitted for external subscribers.

use crate::proposals::ProposalId;
use crate::workflow::Phase;
use scrutin_types::VoterAddress;
use serde::{Deserialize, Serialize};

/// An observable fact about the session, emitted in operation-completion
/// order. The session buffers these; the embedding layer drains them with
/// [`crate::VotingSession::drain_events`] and delivers them to listeners.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// An identity was registered as a voter.
    VoterRegistered { voter: VoterAddress },
    /// A proposal was appended to the registry.
    ProposalRegistered { proposal_id: ProposalId },
    /// A voter cast their vote.
    VoteCast {
        voter: VoterAddress,
        proposal_id: ProposalId,
    },
    /// The workflow advanced one phase.
    PhaseChanged { previous: Phase, next: Phase },
}
