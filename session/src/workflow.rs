//! Workflow state machine — the fixed six-phase session lifecycle.
//!
//! Phases advance one step at a time through a fixed order and never
//! regress. Each transition is a named operation with exactly one legal
//! source phase; the table lives in [`WorkflowTransition`] so every arm is
//! exhaustiveness-checked.

use crate::error::SessionError;
use serde::{Deserialize, Serialize};

/// Rejection text when a proposal is submitted outside the proposal phase.
pub const PROPOSALS_NOT_OPEN: &str = "Proposals are not allowed yet.";

/// Rejection text when the voting session is not the current phase.
///
/// Shared by `cast_vote` and the `EndVotingSession` transition, matching
/// the original deployment.
pub const VOTING_NOT_OPEN: &str = "Voting session havent started yet";

/// The six phases of a voting session, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The administrator is registering voters. Initial phase.
    RegisteringVoters,
    /// Registered voters may submit proposals.
    ProposalsRegistrationStarted,
    /// Proposal intake is closed; voting has not begun.
    ProposalsRegistrationEnded,
    /// Registered voters may cast their one vote.
    VotingSessionStarted,
    /// Voting is closed; the tally has not run.
    VotingSessionEnded,
    /// The winner is computed. Terminal phase.
    VotesTallied,
}

impl Phase {
    /// Position of the phase in the fixed order (0-based).
    pub fn index(self) -> u8 {
        match self {
            Phase::RegisteringVoters => 0,
            Phase::ProposalsRegistrationStarted => 1,
            Phase::ProposalsRegistrationEnded => 2,
            Phase::VotingSessionStarted => 3,
            Phase::VotingSessionEnded => 4,
            Phase::VotesTallied => 5,
        }
    }
}

/// The five administrator-driven transitions between phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkflowTransition {
    StartProposalsRegistration,
    EndProposalsRegistration,
    StartVotingSession,
    EndVotingSession,
    TallyVotes,
}

impl WorkflowTransition {
    /// The only phase this transition may be applied from.
    pub fn source(self) -> Phase {
        match self {
            Self::StartProposalsRegistration => Phase::RegisteringVoters,
            Self::EndProposalsRegistration => Phase::ProposalsRegistrationStarted,
            Self::StartVotingSession => Phase::ProposalsRegistrationEnded,
            Self::EndVotingSession => Phase::VotingSessionStarted,
            Self::TallyVotes => Phase::VotingSessionEnded,
        }
    }

    /// The phase this transition advances to.
    pub fn target(self) -> Phase {
        match self {
            Self::StartProposalsRegistration => Phase::ProposalsRegistrationStarted,
            Self::EndProposalsRegistration => Phase::ProposalsRegistrationEnded,
            Self::StartVotingSession => Phase::VotingSessionStarted,
            Self::EndVotingSession => Phase::VotingSessionEnded,
            Self::TallyVotes => Phase::VotesTallied,
        }
    }

    /// Rejection text when applied from any phase other than `source()`.
    pub fn rejection(self) -> &'static str {
        match self {
            Self::StartProposalsRegistration => "Registering proposals cant be started now",
            Self::EndProposalsRegistration => "Registering proposals havent started yet",
            Self::StartVotingSession => "Registering proposals phase is not finished",
            Self::EndVotingSession => VOTING_NOT_OPEN,
            Self::TallyVotes => "Current status is not voting session ended",
        }
    }
}

/// A completed phase change, carried in the phase-changed event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseChange {
    pub previous: Phase,
    pub next: Phase,
}

/// Holds the current phase and enforces legal transition order.
#[derive(Clone, Debug)]
pub struct Workflow {
    current: Phase,
}

impl Workflow {
    /// Create a workflow in the initial `RegisteringVoters` phase.
    pub fn new() -> Self {
        Self {
            current: Phase::RegisteringVoters,
        }
    }

    pub fn current(&self) -> Phase {
        self.current
    }

    /// Apply a transition, advancing the phase by exactly one step.
    ///
    /// Fails with `IllegalTransition` (carrying the transition's rejection
    /// text) when the current phase is not the transition's source. There
    /// is no transition out of `VotesTallied`.
    pub fn apply(&mut self, transition: WorkflowTransition) -> Result<PhaseChange, SessionError> {
        if self.current != transition.source() {
            return Err(SessionError::IllegalTransition(transition.rejection()));
        }
        let change = PhaseChange {
            previous: self.current,
            next: transition.target(),
        };
        self.current = change.next;
        Ok(change)
    }

    /// Require the current phase to be `expected`, rejecting with the
    /// given text otherwise. Used by the phase guards of non-transition
    /// operations.
    pub fn require(&self, expected: Phase, rejection: &'static str) -> Result<(), SessionError> {
        if self.current != expected {
            return Err(SessionError::IllegalTransition(rejection));
        }
        Ok(())
    }
}

impl Default for Workflow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TRANSITIONS: [WorkflowTransition; 5] = [
        WorkflowTransition::StartProposalsRegistration,
        WorkflowTransition::EndProposalsRegistration,
        WorkflowTransition::StartVotingSession,
        WorkflowTransition::EndVotingSession,
        WorkflowTransition::TallyVotes,
    ];

    #[test]
    fn starts_in_registering_voters() {
        let w = Workflow::new();
        assert_eq!(w.current(), Phase::RegisteringVoters);
    }

    #[test]
    fn full_lifecycle_advances_one_step_at_a_time() {
        let mut w = Workflow::new();
        for transition in ALL_TRANSITIONS {
            let change = w.apply(transition).unwrap();
            assert_eq!(change.next.index(), change.previous.index() + 1);
            assert_eq!(w.current(), change.next);
        }
        assert_eq!(w.current(), Phase::VotesTallied);
    }

    #[test]
    fn every_transition_rejected_from_every_wrong_phase() {
        // Walk the lifecycle; at each stop, every transition whose source
        // is not the current phase must fail with its own rejection text.
        let mut w = Workflow::new();
        loop {
            let current = w.current();
            for transition in ALL_TRANSITIONS {
                if transition.source() == current {
                    continue;
                }
                let before = w.current();
                let err = w.apply(transition).unwrap_err();
                assert_eq!(err, SessionError::IllegalTransition(transition.rejection()));
                assert_eq!(w.current(), before, "rejected transition mutated phase");
            }
            let Some(next) = ALL_TRANSITIONS.iter().find(|t| t.source() == current) else {
                break;
            };
            w.apply(*next).unwrap();
        }
        assert_eq!(w.current(), Phase::VotesTallied);
    }

    #[test]
    fn votes_tallied_is_terminal() {
        let mut w = Workflow::new();
        for transition in ALL_TRANSITIONS {
            w.apply(transition).unwrap();
        }
        for transition in ALL_TRANSITIONS {
            assert!(w.apply(transition).is_err());
        }
        assert_eq!(w.current(), Phase::VotesTallied);
    }

    #[test]
    fn rejection_texts_match_original_deployment() {
        assert_eq!(
            WorkflowTransition::StartProposalsRegistration.rejection(),
            "Registering proposals cant be started now"
        );
        assert_eq!(
            WorkflowTransition::EndProposalsRegistration.rejection(),
            "Registering proposals havent started yet"
        );
        assert_eq!(
            WorkflowTransition::StartVotingSession.rejection(),
            "Registering proposals phase is not finished"
        );
        assert_eq!(
            WorkflowTransition::EndVotingSession.rejection(),
            "Voting session havent started yet"
        );
        assert_eq!(
            WorkflowTransition::TallyVotes.rejection(),
            "Current status is not voting session ended"
        );
    }

    #[test]
    fn require_rejects_with_given_text() {
        let w = Workflow::new();
        assert!(w.require(Phase::RegisteringVoters, PROPOSALS_NOT_OPEN).is_ok());
        let err = w
            .require(Phase::VotingSessionStarted, VOTING_NOT_OPEN)
            .unwrap_err();
        assert_eq!(err, SessionError::IllegalTransition(VOTING_NOT_OPEN));
    }
}
