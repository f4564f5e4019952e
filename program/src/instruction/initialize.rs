use pinocchio::{
    account_info::AccountInfo, msg, program_error::ProgramError, pubkey, pubkey::Pubkey,
    ProgramResult,
};

/// No accounts are required; any passed are ignored.
pub fn process_initialize(
    program_id: &Pubkey,
    _accounts: &[AccountInfo],
    payload: &[u8],
) -> ProgramResult {
    if !payload.is_empty() {
        return Err(ProgramError::InvalidInstructionData);
    }

    msg!("Greetings from:");
    pubkey::log(program_id);

    Ok(())
}
