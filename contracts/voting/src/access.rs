//! Caller role guards. Each guard authenticates the caller before checking
//! its role.

use soroban_sdk::{Address, Env};

use crate::errors::VotingError;
use crate::storage;
use crate::types::Voter;

pub fn require_owner(env: &Env, caller: &Address) -> Result<(), VotingError> {
    caller.require_auth();

    let owner = storage::get_owner(env)?;
    if *caller != owner {
        return Err(VotingError::Unauthorized);
    }

    Ok(())
}

/// Returns the caller's voter record when it is on the whitelist.
pub fn require_voter(env: &Env, caller: &Address) -> Result<Voter, VotingError> {
    caller.require_auth();

    let voter = storage::get_voter(env, caller);
    if !voter.is_registered {
        return Err(VotingError::NotAVoter);
    }

    Ok(voter)
}
