//! The voting session — one owned context per election.
//!
//! Ties the workflow, registries and tally together behind the gated
//! operation surface. Every mutating operation runs its guards before
//! touching any state, writes through to the store on success, and buffers
//! an event for external subscribers. The caller serializes operations.

use crate::access;
use crate::error::SessionError;
use crate::events::SessionEvent;
use crate::proposals::{Proposal, ProposalId, ProposalRegistry};
use crate::tally;
use crate::voters::{Voter, VoterRegistry};
use crate::workflow::{
    Phase, PhaseChange, Workflow, WorkflowTransition, PROPOSALS_NOT_OPEN, VOTING_NOT_OPEN,
};
use scrutin_store::{SessionStore, StoreError};
use scrutin_types::VoterAddress;
use serde::Serialize;

/// Rejection text when a voter is registered outside the initial phase.
pub const REGISTRATION_NOT_OPEN: &str = "Voters registration is not open yet";

fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, SessionError> {
    bincode::serialize(value)
        .map_err(|e| SessionError::Store(StoreError::Serialization(e.to_string())))
}

/// A permissioned voting session.
///
/// Created once per election with the administrator's identity and a
/// storage backend. All state is owned by the session; there is no
/// ambient/static state, so independent sessions can run side by side.
pub struct VotingSession<S: SessionStore> {
    administrator: VoterAddress,
    workflow: Workflow,
    voters: VoterRegistry,
    proposals: ProposalRegistry,
    winning_proposal_id: ProposalId,
    store: S,
    pending_events: Vec<SessionEvent>,
}

impl<S: SessionStore> VotingSession<S> {
    /// Create a session in the `RegisteringVoters` phase.
    pub fn new(administrator: VoterAddress, store: S) -> Self {
        Self {
            administrator,
            workflow: Workflow::new(),
            voters: VoterRegistry::default(),
            proposals: ProposalRegistry::default(),
            winning_proposal_id: 0,
            store,
            pending_events: Vec::new(),
        }
    }

    /// The administrator identity fixed at creation.
    pub fn administrator(&self) -> &VoterAddress {
        &self.administrator
    }

    /// The current workflow phase. Readable by anyone.
    pub fn phase(&self) -> Phase {
        self.workflow.current()
    }

    /// The winning proposal id. Defaults to 0; meaningful once the phase
    /// is `VotesTallied`. Readable by anyone.
    pub fn winning_proposal_id(&self) -> ProposalId {
        self.winning_proposal_id
    }

    /// The storage backend.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Drain buffered events in operation-completion order.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // --- Voter registration ---

    /// Register an identity as a voter. Administrator-only, legal only
    /// during `RegisteringVoters`.
    pub fn register_voter(
        &mut self,
        caller: &VoterAddress,
        voter: &VoterAddress,
    ) -> Result<(), SessionError> {
        access::ensure_administrator(&self.administrator, caller)?;
        self.workflow
            .require(Phase::RegisteringVoters, REGISTRATION_NOT_OPEN)?;
        self.voters.register(voter)?;

        let bytes = encode(&self.voters.get(voter))?;
        self.store.put_voter(voter, &bytes)?;

        tracing::info!(voter = %voter, "voter registered");
        self.pending_events.push(SessionEvent::VoterRegistered {
            voter: voter.clone(),
        });
        Ok(())
    }

    /// Read a voter record. Any registered voter may read any record;
    /// unknown identities read as the default all-false record.
    pub fn voter(
        &self,
        caller: &VoterAddress,
        address: &VoterAddress,
    ) -> Result<Voter, SessionError> {
        access::ensure_voter(&self.voters, caller)?;
        Ok(self.voters.get(address))
    }

    // --- Proposals ---

    /// Submit a proposal. Voter-only, legal only during
    /// `ProposalsRegistrationStarted`. Returns the new id.
    pub fn submit_proposal(
        &mut self,
        caller: &VoterAddress,
        description: &str,
    ) -> Result<ProposalId, SessionError> {
        access::ensure_voter(&self.voters, caller)?;
        self.workflow
            .require(Phase::ProposalsRegistrationStarted, PROPOSALS_NOT_OPEN)?;
        let id = self.proposals.append(description)?;

        self.persist_proposal(id)?;

        tracing::info!(proposal = id, "proposal registered");
        self.pending_events
            .push(SessionEvent::ProposalRegistered { proposal_id: id });
        Ok(id)
    }

    /// Read a proposal by id. Voter-only; the voter guard runs before the
    /// range guard.
    pub fn proposal(
        &self,
        caller: &VoterAddress,
        id: ProposalId,
    ) -> Result<Proposal, SessionError> {
        access::ensure_voter(&self.voters, caller)?;
        self.proposals
            .get(id)
            .cloned()
            .ok_or(SessionError::ProposalNotFound)
    }

    // --- Voting ---

    /// Cast the caller's one vote for `proposal_id`. Voter-only, legal
    /// only during `VotingSessionStarted`. Irreversible.
    pub fn cast_vote(
        &mut self,
        caller: &VoterAddress,
        proposal_id: ProposalId,
    ) -> Result<(), SessionError> {
        access::ensure_voter(&self.voters, caller)?;
        self.workflow
            .require(Phase::VotingSessionStarted, VOTING_NOT_OPEN)?;
        if self.proposals.get(proposal_id).is_none() {
            return Err(SessionError::ProposalNotFound);
        }
        self.voters.record_vote(caller, proposal_id)?;
        // Cannot fail: the id was range-checked above.
        self.proposals.record_vote(proposal_id)?;

        let voter_bytes = encode(&self.voters.get(caller))?;
        self.store.put_voter(caller, &voter_bytes)?;
        self.persist_proposal(proposal_id)?;

        tracing::info!(voter = %caller, proposal = proposal_id, "vote cast");
        self.pending_events.push(SessionEvent::VoteCast {
            voter: caller.clone(),
            proposal_id,
        });
        Ok(())
    }

    // --- Workflow transitions (administrator-only) ---

    /// `RegisteringVoters → ProposalsRegistrationStarted`. Creates the
    /// GENESIS sentinel proposal at id 0.
    pub fn start_proposals_registration(
        &mut self,
        caller: &VoterAddress,
    ) -> Result<(), SessionError> {
        let change = self.advance(caller, WorkflowTransition::StartProposalsRegistration)?;
        let id = self.proposals.open();
        self.persist_proposal(id)?;
        self.finish_transition(change)
    }

    /// `ProposalsRegistrationStarted → ProposalsRegistrationEnded`.
    pub fn end_proposals_registration(
        &mut self,
        caller: &VoterAddress,
    ) -> Result<(), SessionError> {
        let change = self.advance(caller, WorkflowTransition::EndProposalsRegistration)?;
        self.finish_transition(change)
    }

    /// `ProposalsRegistrationEnded → VotingSessionStarted`.
    pub fn start_voting_session(&mut self, caller: &VoterAddress) -> Result<(), SessionError> {
        let change = self.advance(caller, WorkflowTransition::StartVotingSession)?;
        self.finish_transition(change)
    }

    /// `VotingSessionStarted → VotingSessionEnded`.
    pub fn end_voting_session(&mut self, caller: &VoterAddress) -> Result<(), SessionError> {
        let change = self.advance(caller, WorkflowTransition::EndVotingSession)?;
        self.finish_transition(change)
    }

    /// `VotingSessionEnded → VotesTallied`. Runs the tally synchronously:
    /// scans proposals in id order and writes the winner exactly once.
    pub fn tally_votes(&mut self, caller: &VoterAddress) -> Result<(), SessionError> {
        let change = self.advance(caller, WorkflowTransition::TallyVotes)?;
        self.winning_proposal_id = tally::winning_proposal(self.proposals.as_slice());

        let winner_bytes = encode(&self.winning_proposal_id)?;
        self.store.put_winner(&winner_bytes)?;

        tracing::info!(winner = self.winning_proposal_id, "votes tallied");
        self.finish_transition(change)
    }

    /// Shared transition prelude: administrator guard, then the phase
    /// table. No mutation happens before both pass.
    fn advance(
        &mut self,
        caller: &VoterAddress,
        transition: WorkflowTransition,
    ) -> Result<PhaseChange, SessionError> {
        access::ensure_administrator(&self.administrator, caller)?;
        self.workflow.apply(transition)
    }

    /// Shared transition epilogue: persist the new phase and emit the
    /// phase-changed event.
    fn finish_transition(&mut self, change: PhaseChange) -> Result<(), SessionError> {
        let bytes = encode(&change.next)?;
        self.store.put_phase(&bytes)?;

        tracing::info!(previous = ?change.previous, next = ?change.next, "phase advanced");
        self.pending_events.push(SessionEvent::PhaseChanged {
            previous: change.previous,
            next: change.next,
        });
        Ok(())
    }

    fn persist_proposal(&mut self, id: ProposalId) -> Result<(), SessionError> {
        // The id was just appended or range-checked.
        let Some(proposal) = self.proposals.get(id) else {
            return Err(SessionError::ProposalNotFound);
        };
        let bytes = encode(proposal)?;
        self.store.put_proposal(id, &bytes)?;
        Ok(())
    }
}
