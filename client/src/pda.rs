//! PDA functions for the civic_vote program

use civic_vote::helpers::ELECTION_SEED;
use solana_sdk::pubkey::Pubkey;

/// Derive the election config PDA of `authority`
pub fn election(program_id: &Pubkey, authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ELECTION_SEED, authority.as_ref()], program_id)
}
