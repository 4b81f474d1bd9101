//! Voting-session storage trait.

use crate::StoreError;
use scrutin_types::VoterAddress;

/// Trait for durably recording voting-session state.
///
/// The session writes through on every successful mutation, so a backend
/// always holds the latest voter records, proposals, phase and winner.
/// Keys for the workflow phase and the winning proposal are singleton
/// slots; `get_*` on a slot never written returns `Ok(None)`.
pub trait SessionStore {
    /// Store a voter record.
    fn put_voter(&self, address: &VoterAddress, data: &[u8]) -> Result<(), StoreError>;

    /// Get a voter record, if one was ever stored.
    fn get_voter(&self, address: &VoterAddress) -> Result<Option<Vec<u8>>, StoreError>;

    /// Store a proposal under its dense sequential id.
    fn put_proposal(&self, id: u32, data: &[u8]) -> Result<(), StoreError>;

    /// Get a proposal by id.
    fn get_proposal(&self, id: u32) -> Result<Option<Vec<u8>>, StoreError>;

    /// Number of proposals stored.
    fn proposal_count(&self) -> Result<u32, StoreError>;

    /// Store the current workflow phase.
    fn put_phase(&self, data: &[u8]) -> Result<(), StoreError>;

    /// Get the stored workflow phase.
    fn get_phase(&self) -> Result<Option<Vec<u8>>, StoreError>;

    /// Store the winning proposal id.
    fn put_winner(&self, data: &[u8]) -> Result<(), StoreError>;

    /// Get the stored winning proposal id.
    fn get_winner(&self) -> Result<Option<Vec<u8>>, StoreError>;
}
