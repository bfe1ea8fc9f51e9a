//! Workflow policy: which phase each operation requires and where each
//! owner transition leads.
//!
//! The phases form a single chain, so every transition is legal from exactly
//! one phase and lands on the phase right after it.

use soroban_sdk::{log, Env};

use crate::errors::VotingError;
use crate::types::WorkflowStatus;

impl WorkflowStatus {
    /// Phase that follows `self`, `None` once votes are tallied.
    pub fn next(self) -> Option<WorkflowStatus> {
        match self {
            WorkflowStatus::RegisteringVoters => Some(WorkflowStatus::ProposalsRegistrationStarted),
            WorkflowStatus::ProposalsRegistrationStarted => {
                Some(WorkflowStatus::ProposalsRegistrationEnded)
            }
            WorkflowStatus::ProposalsRegistrationEnded => Some(WorkflowStatus::VotingSessionStarted),
            WorkflowStatus::VotingSessionStarted => Some(WorkflowStatus::VotingSessionEnded),
            WorkflowStatus::VotingSessionEnded => Some(WorkflowStatus::VotesTallied),
            WorkflowStatus::VotesTallied => None,
        }
    }
}

/// Owner-issued phase transitions.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Transition {
    StartProposalsRegistering,
    EndProposalsRegistering,
    StartVotingSession,
    EndVotingSession,
    TallyVotes,
}

impl Transition {
    pub const ALL: [Transition; 5] = [
        Transition::StartProposalsRegistering,
        Transition::EndProposalsRegistering,
        Transition::StartVotingSession,
        Transition::EndVotingSession,
        Transition::TallyVotes,
    ];

    /// The only phase this transition may be issued from.
    pub fn from_phase(self) -> WorkflowStatus {
        match self {
            Transition::StartProposalsRegistering => WorkflowStatus::RegisteringVoters,
            Transition::EndProposalsRegistering => WorkflowStatus::ProposalsRegistrationStarted,
            Transition::StartVotingSession => WorkflowStatus::ProposalsRegistrationEnded,
            Transition::EndVotingSession => WorkflowStatus::VotingSessionStarted,
            Transition::TallyVotes => WorkflowStatus::VotingSessionEnded,
        }
    }

    pub fn to_phase(self) -> WorkflowStatus {
        match self {
            Transition::StartProposalsRegistering => WorkflowStatus::ProposalsRegistrationStarted,
            Transition::EndProposalsRegistering => WorkflowStatus::ProposalsRegistrationEnded,
            Transition::StartVotingSession => WorkflowStatus::VotingSessionStarted,
            Transition::EndVotingSession => WorkflowStatus::VotingSessionEnded,
            Transition::TallyVotes => WorkflowStatus::VotesTallied,
        }
    }
}

/// Non-transition operations that are only legal inside one phase.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Action {
    AddVoter,
    AddProposal,
    SetVote,
}

impl Action {
    pub fn required_phase(self) -> WorkflowStatus {
        match self {
            Action::AddVoter => WorkflowStatus::RegisteringVoters,
            Action::AddProposal => WorkflowStatus::ProposalsRegistrationStarted,
            Action::SetVote => WorkflowStatus::VotingSessionStarted,
        }
    }
}

pub fn require_phase(
    env: &Env,
    current: WorkflowStatus,
    required: WorkflowStatus,
) -> Result<(), VotingError> {
    if current != required {
        log!(
            env,
            "phase violation: required phase, current phase",
            required as u32,
            current as u32
        );
        return Err(VotingError::PhaseViolation);
    }
    Ok(())
}
