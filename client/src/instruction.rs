//! Instruction builders for the civic_vote program

use crate::pda;
use civic_vote::instruction::CivicVoteInstruction;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

/// `initialize`: no accounts, no arguments
pub fn initialize(program_id: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![],
        data: vec![CivicVoteInstruction::Initialize as u8],
    }
}

/// `initialize_election` for `authority`, which also pays for the account
pub fn initialize_election(
    program_id: &Pubkey,
    authority: &Pubkey,
    start_ts: i64,
    end_ts: i64,
    vote_fee_lamports: u64,
) -> Instruction {
    let (election, _) = pda::election(program_id, authority);

    let mut data = Vec::with_capacity(1 + 24);
    data.push(CivicVoteInstruction::InitializeElection as u8);
    data.extend_from_slice(&start_ts.to_le_bytes());
    data.extend_from_slice(&end_ts.to_le_bytes());
    data.extend_from_slice(&vote_fee_lamports.to_le_bytes());

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(election, false),
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    }
}
