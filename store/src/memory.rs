//! In-memory store — thread-safe, for testing and single-process sessions.

use crate::session::SessionStore;
use crate::StoreError;
use scrutin_types::VoterAddress;
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory session store.
///
/// Each table sits behind its own `Mutex`, so a store shared between a
/// session and an inspector thread stays consistent per call.
pub struct MemoryStore {
    voters: Mutex<HashMap<String, Vec<u8>>>,
    proposals: Mutex<HashMap<u32, Vec<u8>>>,
    phase: Mutex<Option<Vec<u8>>>,
    winner: Mutex<Option<Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            voters: Mutex::new(HashMap::new()),
            proposals: Mutex::new(HashMap::new()),
            phase: Mutex::new(None),
            winner: Mutex::new(None),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for MemoryStore {
    fn put_voter(&self, address: &VoterAddress, data: &[u8]) -> Result<(), StoreError> {
        self.voters
            .lock()
            .unwrap()
            .insert(address.as_str().to_string(), data.to_vec());
        Ok(())
    }

    fn get_voter(&self, address: &VoterAddress) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.voters.lock().unwrap().get(address.as_str()).cloned())
    }

    fn put_proposal(&self, id: u32, data: &[u8]) -> Result<(), StoreError> {
        self.proposals.lock().unwrap().insert(id, data.to_vec());
        Ok(())
    }

    fn get_proposal(&self, id: u32) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.proposals.lock().unwrap().get(&id).cloned())
    }

    fn proposal_count(&self) -> Result<u32, StoreError> {
        Ok(self.proposals.lock().unwrap().len() as u32)
    }

    fn put_phase(&self, data: &[u8]) -> Result<(), StoreError> {
        *self.phase.lock().unwrap() = Some(data.to_vec());
        Ok(())
    }

    fn get_phase(&self) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.phase.lock().unwrap().clone())
    }

    fn put_winner(&self, data: &[u8]) -> Result<(), StoreError> {
        *self.winner.lock().unwrap() = Some(data.to_vec());
        Ok(())
    }

    fn get_winner(&self) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.winner.lock().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_address() -> VoterAddress {
        VoterAddress::new("alice")
    }

    #[test]
    fn test_put_get_voter() {
        let store = MemoryStore::new();
        let addr = test_address();
        store.put_voter(&addr, b"record").unwrap();
        assert_eq!(store.get_voter(&addr).unwrap(), Some(b"record".to_vec()));
    }

    #[test]
    fn test_voter_not_found_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get_voter(&test_address()).unwrap(), None);
    }

    #[test]
    fn test_put_overwrites_voter() {
        let store = MemoryStore::new();
        let addr = test_address();
        store.put_voter(&addr, b"old").unwrap();
        store.put_voter(&addr, b"new").unwrap();
        assert_eq!(store.get_voter(&addr).unwrap(), Some(b"new".to_vec()));
    }

    #[test]
    fn test_put_get_proposal_and_count() {
        let store = MemoryStore::new();
        store.put_proposal(0, b"genesis").unwrap();
        store.put_proposal(1, b"first").unwrap();
        assert_eq!(store.get_proposal(1).unwrap(), Some(b"first".to_vec()));
        assert_eq!(store.get_proposal(2).unwrap(), None);
        assert_eq!(store.proposal_count().unwrap(), 2);
    }

    #[test]
    fn test_phase_and_winner_slots() {
        let store = MemoryStore::new();
        assert_eq!(store.get_phase().unwrap(), None);
        assert_eq!(store.get_winner().unwrap(), None);
        store.put_phase(b"phase").unwrap();
        store.put_winner(b"winner").unwrap();
        assert_eq!(store.get_phase().unwrap(), Some(b"phase".to_vec()));
        assert_eq!(store.get_winner().unwrap(), Some(b"winner".to_vec()));
    }
}
