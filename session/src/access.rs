//! Capability checks applied before every gated operation.
//!
//! Pure predicates, no side effects. Every mutating operation in the
//! session runs one of these first, so the checks live in one place
//! instead of being duplicated per operation.

use crate::error::SessionError;
use crate::voters::VoterRegistry;
use scrutin_types::VoterAddress;

/// Require the caller to be the session administrator.
pub fn ensure_administrator(
    administrator: &VoterAddress,
    caller: &VoterAddress,
) -> Result<(), SessionError> {
    if caller != administrator {
        return Err(SessionError::Unauthorized);
    }
    Ok(())
}

/// Require the caller to be a registered voter.
pub fn ensure_voter(voters: &VoterRegistry, caller: &VoterAddress) -> Result<(), SessionError> {
    if !voters.is_registered(caller) {
        return Err(SessionError::NotAVoter);
    }
    Ok(())
}
