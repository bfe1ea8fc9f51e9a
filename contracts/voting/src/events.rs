use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::types::WorkflowStatus;

pub const VOTER_REGISTERED: Symbol = symbol_short!("voter_reg");
pub const PROPOSAL_REGISTERED: Symbol = symbol_short!("prop_reg");
pub const VOTED: Symbol = symbol_short!("voted");
pub const WORKFLOW_STATUS_CHANGE: Symbol = symbol_short!("wf_status");
pub const OWNERSHIP_TRANSFERRED: Symbol = symbol_short!("own_xfer");

pub fn voter_registered(env: &Env, voter: &Address) {
    env.events().publish((VOTER_REGISTERED,), voter.clone());
}

pub fn proposal_registered(env: &Env, proposal_id: u64) {
    env.events().publish((PROPOSAL_REGISTERED,), proposal_id);
}

pub fn voted(env: &Env, voter: &Address, proposal_id: u64) {
    env.events().publish((VOTED,), (voter.clone(), proposal_id));
}

pub fn workflow_status_change(env: &Env, previous: WorkflowStatus, new: WorkflowStatus) {
    env.events()
        .publish((WORKFLOW_STATUS_CHANGE,), (previous as u32, new as u32));
}

pub fn ownership_transferred(env: &Env, previous: &Address, new: &Address) {
    env.events()
        .publish((OWNERSHIP_TRANSFERRED,), (previous.clone(), new.clone()));
}
