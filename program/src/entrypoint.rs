use crate::instruction::{self, CivicVoteInstruction, InitializeElectionData};
use pinocchio::{
    account_info::AccountInfo, msg, program_entrypoint, program_error::ProgramError,
    pubkey::Pubkey, ProgramResult,
};

// Entrypoint macro
program_entrypoint!(process_instruction);

#[inline(always)]
fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if *program_id != crate::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    // Single-byte discriminator + raw payload
    let (disc, payload) = instruction_data
        .split_first()
        .ok_or(ProgramError::InvalidInstructionData)?;

    match CivicVoteInstruction::try_from(disc)? {
        CivicVoteInstruction::Initialize => {
            msg!("Instruction: Initialize");
            instruction::initialize::process_initialize(program_id, accounts, payload)
        }
        CivicVoteInstruction::InitializeElection => {
            msg!("Instruction: InitializeElection");
            let args = InitializeElectionData::parse(payload)?;
            instruction::initialize_election::process_initialize_election(accounts, args)
        }
    }
}
