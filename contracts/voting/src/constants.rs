//! Configuration constants for the voting contract.

// ===== Proposals =====

/// Description of the proposal created automatically at id 0
pub const GENESIS_DESCRIPTION: &str = "GENESIS";

/// Id of the GENESIS proposal, also the winner when no vote is cast
pub const GENESIS_PROPOSAL_ID: u64 = 0;

/// Maximum proposal description length in bytes
pub const MAX_DESCRIPTION_LEN: u32 = 256;

/// Maximum number of proposals in a session, GENESIS included
pub const MAX_PROPOSALS: u64 = 100;

// ===== Ledger TTL =====
// ~5s per ledger: 17_280 ledgers per day.

/// Extend entries once their remaining TTL drops below ~30 days
pub const TTL_THRESHOLD_LEDGERS: u32 = 30 * 17_280;

/// Extend entries to live ~1 year
pub const TTL_EXTEND_TO_LEDGERS: u32 = 365 * 17_280;
