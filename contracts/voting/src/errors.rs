//! Error codes returned by the voting contract.
//!
//! Codes are part of the contract ABI: clients match on the numeric value, so
//! existing variants must never be renumbered.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    /// Contract has no owner yet
    NotInitialized = 1,

    /// `initialize` was already called
    AlreadyInitialized = 2,

    /// Caller is not the contract owner
    Unauthorized = 3,

    /// Caller is not a registered voter
    NotAVoter = 4,

    /// Operation is not allowed in the current workflow phase
    PhaseViolation = 5,

    /// Voter is already on the whitelist
    AlreadyRegistered = 6,

    /// Voter has already cast a vote
    AlreadyVoted = 7,

    /// Proposal description is empty or whitespace only
    EmptyProposal = 8,

    /// No proposal with the given id
    ProposalNotFound = 9,

    /// Proposal description exceeds `MAX_DESCRIPTION_LEN` bytes
    ProposalTooLong = 10,

    /// Session already holds `MAX_PROPOSALS` proposals
    ProposalLimitReached = 11,
}
