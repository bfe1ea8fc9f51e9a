use soroban_sdk::String;

use crate::constants::MAX_DESCRIPTION_LEN;
use crate::errors::VotingError;

/// Rejects descriptions that are empty, whitespace only, or longer than
/// `MAX_DESCRIPTION_LEN` bytes.
pub fn validate_description(description: &String) -> Result<(), VotingError> {
    let len = description.len();
    if len > MAX_DESCRIPTION_LEN {
        return Err(VotingError::ProposalTooLong);
    }

    let mut buf = [0u8; MAX_DESCRIPTION_LEN as usize];
    let bytes = &mut buf[..len as usize];
    description.copy_into_slice(bytes);

    let blank = match core::str::from_utf8(bytes) {
        Ok(text) => text.chars().all(char::is_whitespace),
        Err(_) => false,
    };
    if blank {
        return Err(VotingError::EmptyProposal);
    }

    Ok(())
}
