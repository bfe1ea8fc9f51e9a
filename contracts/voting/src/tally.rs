use crate::constants::GENESIS_PROPOSAL_ID;

/// Picks the proposal with the strictly greatest vote count.
///
/// `vote_counts` yields counts in ascending proposal id order. A later
/// proposal only takes the lead by beating the current maximum, so ties go to
/// the lowest id and no votes at all leaves GENESIS as the winner.
pub fn winning_proposal<I>(vote_counts: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    let mut winner = GENESIS_PROPOSAL_ID;
    let mut best = 0u64;

    for (proposal_id, count) in vote_counts.into_iter().enumerate() {
        if count > best {
            best = count;
            winner = proposal_id as u64;
        }
    }

    winner
}
