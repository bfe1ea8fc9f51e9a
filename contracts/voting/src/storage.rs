use soroban_sdk::{Address, Env, String, Vec};

use crate::constants::{TTL_EXTEND_TO_LEDGERS, TTL_THRESHOLD_LEDGERS};
use crate::errors::VotingError;
use crate::types::{DataKey, Proposal, Voter, WorkflowStatus};

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD_LEDGERS, TTL_EXTEND_TO_LEDGERS);
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD_LEDGERS, TTL_EXTEND_TO_LEDGERS);
}

// ── Owner ────────────────────────────────────────────────────────────────────

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Result<Address, VotingError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(VotingError::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    bump_instance(env);
}

// ── Workflow ─────────────────────────────────────────────────────────────────

pub fn get_status(env: &Env) -> WorkflowStatus {
    env.storage()
        .instance()
        .get(&DataKey::Status)
        .unwrap_or(WorkflowStatus::RegisteringVoters)
}

pub fn set_status(env: &Env, status: WorkflowStatus) {
    env.storage().instance().set(&DataKey::Status, &status);
    bump_instance(env);
}

pub fn get_winning_proposal_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::WinningProposalId)
        .unwrap_or(0)
}

pub fn set_winning_proposal_id(env: &Env, proposal_id: u64) {
    env.storage()
        .instance()
        .set(&DataKey::WinningProposalId, &proposal_id);
    bump_instance(env);
}

// ── Voters ───────────────────────────────────────────────────────────────────

pub fn get_voter(env: &Env, address: &Address) -> Voter {
    let key = DataKey::Voter(address.clone());
    match env.storage().persistent().get(&key) {
        Some(voter) => {
            bump_persistent(env, &key);
            voter
        }
        None => Voter::default(),
    }
}

pub fn set_voter(env: &Env, address: &Address, voter: &Voter) {
    let key = DataKey::Voter(address.clone());
    env.storage().persistent().set(&key, voter);
    bump_persistent(env, &key);
}

// ── Proposals ────────────────────────────────────────────────────────────────
// Vote counts live in a single instance entry so the tally reads one entry
// whatever the number of proposals. Descriptions are persistent, one per id.

pub fn get_vote_counts(env: &Env) -> Vec<u64> {
    env.storage()
        .instance()
        .get(&DataKey::VoteCounts)
        .unwrap_or_else(|| Vec::new(env))
}

fn set_vote_counts(env: &Env, counts: &Vec<u64>) {
    env.storage().instance().set(&DataKey::VoteCounts, counts);
    bump_instance(env);
}

pub fn get_proposal_count(env: &Env) -> u64 {
    get_vote_counts(env).len() as u64
}

pub fn get_proposal(env: &Env, proposal_id: u64) -> Option<Proposal> {
    let index = u32::try_from(proposal_id).ok()?;
    let vote_count = get_vote_counts(env).get(index)?;

    let key = DataKey::ProposalDescription(proposal_id);
    let description: String = env.storage().persistent().get(&key)?;
    bump_persistent(env, &key);

    Some(Proposal {
        description,
        vote_count,
    })
}

/// Stores a proposal with no votes under the next free id and returns that id.
pub fn push_proposal(env: &Env, description: &String) -> u64 {
    let mut counts = get_vote_counts(env);
    let proposal_id = counts.len() as u64;

    let key = DataKey::ProposalDescription(proposal_id);
    env.storage().persistent().set(&key, description);
    bump_persistent(env, &key);

    counts.push_back(0);
    set_vote_counts(env, &counts);
    proposal_id
}

pub fn add_vote(env: &Env, proposal_id: u64) -> Result<(), VotingError> {
    let mut counts = get_vote_counts(env);
    let index = u32::try_from(proposal_id).map_err(|_| VotingError::ProposalNotFound)?;
    let count = counts.get(index).ok_or(VotingError::ProposalNotFound)?;

    counts.set(index, count + 1);
    set_vote_counts(env, &counts);
    Ok(())
}
