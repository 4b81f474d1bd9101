//! Session-specific errors.
//!
//! Display strings are compatibility-binding: external harnesses match the
//! rejection text of the original deployment verbatim.

use scrutin_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Caller of an administrator-only operation is not the administrator.
    #[error("caller is not the administrator")]
    Unauthorized,

    /// Caller of a voter-only operation is not a registered voter.
    #[error("You're not a voter")]
    NotAVoter,

    /// The identity is already registered.
    #[error("Already registered.")]
    AlreadyRegistered,

    /// The caller has already cast their one vote.
    #[error("You have already voted")]
    AlreadyVoted,

    /// Proposal description is empty or blank.
    #[error("Vous ne pouvez pas ne rien proposer")]
    EmptyProposal,

    /// Proposal id outside the dense range [0, count).
    #[error("Proposal not found")]
    ProposalNotFound,

    /// A phase guard was violated. Carries the per-operation rejection text.
    #[error("{0}")]
    IllegalTransition(&'static str),

    /// The storage backend failed while recording a mutation.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}
