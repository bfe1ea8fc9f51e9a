use soroban_sdk::{contracttype, Address, Env, String};

/// Ordered phases of a voting session.
///
/// The discriminants are the values clients read back from
/// `workflow_status` and receive in `wf_status` events.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WorkflowStatus {
    RegisteringVoters = 0,
    ProposalsRegistrationStarted = 1,
    ProposalsRegistrationEnded = 2,
    VotingSessionStarted = 3,
    VotingSessionEnded = 4,
    VotesTallied = 5,
}

/// Whitelist entry for a voter address.
///
/// Addresses that were never registered read back as `Voter::default()`.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Voter {
    pub is_registered: bool,
    pub has_voted: bool,
    /// Only meaningful once `has_voted` is set
    pub voted_proposal_id: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub description: String,
    pub vote_count: u64,
}

impl Proposal {
    pub fn new(description: String) -> Self {
        Self {
            description,
            vote_count: 0,
        }
    }

    /// Value returned for ids that were never assigned.
    pub fn empty(env: &Env) -> Self {
        Self::new(String::from_str(env, ""))
    }
}

/// Storage keys
#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    // Instance storage
    Owner,
    Status,
    WinningProposalId,
    /// Vote count per proposal, indexed by proposal id
    VoteCounts,
    // Persistent storage
    Voter(Address),
    ProposalDescription(u64),
}
