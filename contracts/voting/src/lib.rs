#![no_std]
//! # Voting Contract
//!
//! A single voting session driven by its owner through a fixed workflow:
//!
//! 1. `RegisteringVoters` - the owner whitelists voter addresses
//! 2. `ProposalsRegistrationStarted` - voters submit proposals (id 0 is GENESIS)
//! 3. `ProposalsRegistrationEnded`
//! 4. `VotingSessionStarted` - each voter casts one vote
//! 5. `VotingSessionEnded`
//! 6. `VotesTallied` - the winning proposal is fixed
//!
//! Every entry point that depends on who is calling takes the caller address
//! first and requires its authorization.

mod access;
mod constants;
mod errors;
mod events;
mod storage;
mod tally;
mod types;
mod validation;
mod workflow;

pub use constants::{
    GENESIS_DESCRIPTION, GENESIS_PROPOSAL_ID, MAX_DESCRIPTION_LEN, MAX_PROPOSALS,
};
pub use errors::VotingError;
pub use types::{Proposal, Voter, WorkflowStatus};
pub use workflow::{Action, Transition};

use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

#[contract]
pub struct VotingContract;

#[contractimpl]
impl VotingContract {
    /// Sets the owner. Can only be called once.
    pub fn initialize(env: Env, owner: Address) -> Result<(), VotingError> {
        if storage::has_owner(&env) {
            return Err(VotingError::AlreadyInitialized);
        }
        owner.require_auth();

        storage::set_owner(&env, &owner);
        storage::set_status(&env, WorkflowStatus::RegisteringVoters);

        Ok(())
    }

    // ── Ownership ────────────────────────────────────────────────────────────

    pub fn owner(env: Env) -> Result<Address, VotingError> {
        storage::get_owner(&env)
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), VotingError> {
        access::require_owner(&env, &caller)?;

        storage::set_owner(&env, &new_owner);
        events::ownership_transferred(&env, &caller, &new_owner);

        Ok(())
    }

    // ── Voter Registration ───────────────────────────────────────────────────

    pub fn add_voter(env: Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        access::require_owner(&env, &caller)?;
        workflow::require_phase(
            &env,
            storage::get_status(&env),
            Action::AddVoter.required_phase(),
        )?;

        let mut record = storage::get_voter(&env, &voter);
        if record.is_registered {
            return Err(VotingError::AlreadyRegistered);
        }

        record.is_registered = true;
        storage::set_voter(&env, &voter, &record);
        events::voter_registered(&env, &voter);

        Ok(())
    }

    /// Returns the record of `voter`, or the default record if it was never
    /// registered. Only registered voters may look voters up.
    pub fn get_voter(env: Env, caller: Address, voter: Address) -> Result<Voter, VotingError> {
        access::require_voter(&env, &caller)?;
        Ok(storage::get_voter(&env, &voter))
    }

    // ── Proposals ────────────────────────────────────────────────────────────

    /// Registers a proposal and returns its id.
    pub fn add_proposal(
        env: Env,
        caller: Address,
        description: String,
    ) -> Result<u64, VotingError> {
        access::require_voter(&env, &caller)?;
        workflow::require_phase(
            &env,
            storage::get_status(&env),
            Action::AddProposal.required_phase(),
        )?;
        validation::validate_description(&description)?;
        if storage::get_proposal_count(&env) >= MAX_PROPOSALS {
            return Err(VotingError::ProposalLimitReached);
        }

        let proposal_id = storage::push_proposal(&env, &description);
        events::proposal_registered(&env, proposal_id);

        Ok(proposal_id)
    }

    /// Returns the proposal, or an empty one for unassigned ids.
    pub fn get_one_proposal(
        env: Env,
        caller: Address,
        proposal_id: u64,
    ) -> Result<Proposal, VotingError> {
        access::require_voter(&env, &caller)?;
        Ok(storage::get_proposal(&env, proposal_id).unwrap_or_else(|| Proposal::empty(&env)))
    }

    /// Number of proposals, GENESIS included. Valid ids are `0..count`.
    pub fn proposals_count(env: Env) -> u64 {
        storage::get_proposal_count(&env)
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    pub fn set_vote(env: Env, caller: Address, proposal_id: u64) -> Result<(), VotingError> {
        let mut voter = access::require_voter(&env, &caller)?;
        workflow::require_phase(
            &env,
            storage::get_status(&env),
            Action::SetVote.required_phase(),
        )?;

        if voter.has_voted {
            return Err(VotingError::AlreadyVoted);
        }

        storage::add_vote(&env, proposal_id)?;

        voter.has_voted = true;
        voter.voted_proposal_id = proposal_id;
        storage::set_voter(&env, &caller, &voter);
        events::voted(&env, &caller, proposal_id);

        Ok(())
    }

    pub fn winning_proposal_id(env: Env) -> u64 {
        storage::get_winning_proposal_id(&env)
    }

    // ── Workflow ─────────────────────────────────────────────────────────────

    pub fn workflow_status(env: Env) -> WorkflowStatus {
        storage::get_status(&env)
    }

    /// Opens proposal registration and creates the GENESIS proposal at id 0.
    pub fn start_proposals_registering(env: Env, caller: Address) -> Result<(), VotingError> {
        let transition = Transition::StartProposalsRegistering;
        Self::check_transition(&env, &caller, transition)?;

        storage::push_proposal(&env, &String::from_str(&env, GENESIS_DESCRIPTION));

        Self::apply_transition(&env, transition);
        Ok(())
    }

    pub fn end_proposals_registering(env: Env, caller: Address) -> Result<(), VotingError> {
        let transition = Transition::EndProposalsRegistering;
        Self::check_transition(&env, &caller, transition)?;
        Self::apply_transition(&env, transition);
        Ok(())
    }

    pub fn start_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        let transition = Transition::StartVotingSession;
        Self::check_transition(&env, &caller, transition)?;
        Self::apply_transition(&env, transition);
        Ok(())
    }

    pub fn end_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        let transition = Transition::EndVotingSession;
        Self::check_transition(&env, &caller, transition)?;
        Self::apply_transition(&env, transition);
        Ok(())
    }

    /// Fixes the winning proposal. Ties go to the lowest proposal id.
    pub fn tally_votes(env: Env, caller: Address) -> Result<(), VotingError> {
        let transition = Transition::TallyVotes;
        Self::check_transition(&env, &caller, transition)?;

        let counts = storage::get_vote_counts(&env);
        let winner = tally::winning_proposal(counts.iter());
        storage::set_winning_proposal_id(&env, winner);
        log!(&env, "votes tallied: proposals, winner", counts.len(), winner);

        Self::apply_transition(&env, transition);
        Ok(())
    }
}

impl VotingContract {
    fn check_transition(
        env: &Env,
        caller: &Address,
        transition: Transition,
    ) -> Result<(), VotingError> {
        access::require_owner(env, caller)?;
        workflow::require_phase(env, storage::get_status(env), transition.from_phase())
    }

    fn apply_transition(env: &Env, transition: Transition) {
        storage::set_status(env, transition.to_phase());
        events::workflow_status_change(env, transition.from_phase(), transition.to_phase());
    }
}
