//! Permissioned voting-session manager.
//!
//! A single administrator drives a fixed six-phase workflow: voters are
//! registered, proposals collected, votes cast, and a deterministic tally
//! picks the winner. Every mutating operation is gated by a caller check
//! and a phase check, writes through to a [`scrutin_store::SessionStore`],
//! and emits an event for external subscribers.
//!
//! Key principle: one voter = one vote, cast once, never changed.
//! The caller serializes operations; a session is one linear timeline.

pub mod access;
pub mod error;
pub mod events;
pub mod proposals;
pub mod session;
pub mod tally;
pub mod voters;
pub mod workflow;

pub use error::SessionError;
pub use events::SessionEvent;
pub use proposals::{Proposal, ProposalId, ProposalRegistry, GENESIS_DESCRIPTION};
pub use session::VotingSession;
pub use voters::{Voter, VoterRegistry};
pub use workflow::{Phase, PhaseChange, Workflow, WorkflowTransition};
