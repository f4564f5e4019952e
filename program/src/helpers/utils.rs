use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    program_error::ProgramError,
    pubkey::{self, Pubkey},
    sysvars::rent::Rent,
    ProgramResult,
};
use pinocchio_system::instructions::{Allocate, Assign, CreateAccount, Transfer};

use crate::error::VoteError;
use crate::helpers::constant::ELECTION_SEED;

/// Time checks for a new election, in the order they are reported.
pub fn validate_election_window(start_ts: i64, end_ts: i64, now: i64) -> Result<(), VoteError> {
    if end_ts <= start_ts {
        return Err(VoteError::InvalidTimeRange);
    }
    if start_ts < now {
        return Err(VoteError::StartInPast);
    }
    Ok(())
}

pub fn check_signer(account: &AccountInfo) -> ProgramResult {
    if !account.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }
    Ok(())
}

pub fn check_writable(account: &AccountInfo) -> ProgramResult {
    if !account.is_writable() {
        return Err(ProgramError::InvalidAccountData);
    }
    Ok(())
}

pub fn check_system_program(account: &AccountInfo) -> ProgramResult {
    if account.key() != &pinocchio_system::ID {
        return Err(ProgramError::IncorrectProgramId);
    }
    Ok(())
}

/// An account the system program still owns with no data has never been
/// created. It may already hold lamports if someone transferred to the address.
pub fn check_uninitialized(account: &AccountInfo) -> ProgramResult {
    if !account.is_owned_by(&pinocchio_system::ID) || !account.data_is_empty() {
        return Err(ProgramError::AccountAlreadyInitialized);
    }
    Ok(())
}

/// Canonical election PDA for `authority`. Uses the `sol_try_find_program_address`
/// syscall, so it is only callable on-chain.
pub fn find_election_address(authority: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    pubkey::find_program_address(&[ELECTION_SEED, authority.as_ref()], program_id)
}

/// Allocate a program-owned, rent-exempt account at the election PDA.
pub fn create_election_account(
    payer: &AccountInfo,
    election: &AccountInfo,
    authority: &Pubkey,
    bump: u8,
    space: usize,
    rent: &Rent,
) -> ProgramResult {
    let bump_ref = [bump];
    let seeds = [
        Seed::from(ELECTION_SEED),
        Seed::from(authority.as_ref()),
        Seed::from(&bump_ref),
    ];
    let required = rent.minimum_balance(space);
    let current = election.lamports();

    if current == 0 {
        return CreateAccount {
            from: payer,
            to: election,
            lamports: required,
            space: space as u64,
            owner: &crate::ID,
        }
        .invoke_signed(&[Signer::from(&seeds)]);
    }

    // Pre-funded address: CreateAccount would fail, so top up and then
    // allocate and assign under the PDA signature.
    if current < required {
        Transfer {
            from: payer,
            to: election,
            lamports: required - current,
        }
        .invoke()?;
    }
    Allocate {
        account: election,
        space: space as u64,
    }
    .invoke_signed(&[Signer::from(&seeds)])?;
    Assign {
        account: election,
        owner: &crate::ID,
    }
    .invoke_signed(&[Signer::from(&seeds)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const NOW: i64 = 1_700_000_000;

    #[test_case(NOW, NOW + 1 => Ok(()); "starts now")]
    #[test_case(NOW + 60, NOW + 86_400 => Ok(()); "starts later")]
    #[test_case(NOW + 10, NOW + 10 => Err(VoteError::InvalidTimeRange); "empty window")]
    #[test_case(NOW + 10, NOW => Err(VoteError::InvalidTimeRange); "end before start")]
    #[test_case(NOW - 1, NOW + 100 => Err(VoteError::StartInPast); "start in past")]
    #[test_case(NOW - 100, NOW - 200 => Err(VoteError::InvalidTimeRange); "range checked before start")]
    fn election_window(start: i64, end: i64) -> Result<(), VoteError> {
        validate_election_window(start, end, NOW)
    }
}
