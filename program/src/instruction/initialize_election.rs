use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    sysvars::{clock::Clock, rent::Rent, Sysvar},
    ProgramResult,
};
use pinocchio_log::log;

use crate::helpers::*;
use crate::state::ElectionConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitializeElectionData {
    pub start_ts: i64,
    pub end_ts: i64,
    pub vote_fee_lamports: u64,
}

impl InitializeElectionData {
    pub fn parse(payload: &[u8]) -> Result<Self, ProgramError> {
        if payload.len() != INITIALIZE_ELECTION_DATA_LEN {
            return Err(ProgramError::InvalidInstructionData);
        }
        let read = |at: usize| -> [u8; 8] {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(&payload[at..at + 8]);
            buf
        };
        Ok(Self {
            start_ts: i64::from_le_bytes(read(0)),
            end_ts: i64::from_le_bytes(read(8)),
            vote_fee_lamports: u64::from_le_bytes(read(16)),
        })
    }
}

pub fn process_initialize_election(
    accounts: &[AccountInfo],
    args: InitializeElectionData,
) -> ProgramResult {
    // [election PDA, authority (payer), system program]
    let [election_info, authority_info, system_program_info, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    check_signer(authority_info)?;
    check_writable(authority_info)?;
    check_system_program(system_program_info)?;

    let authority = *authority_info.key();
    let (expected, bump) = find_election_address(&authority, &crate::ID);
    if election_info.key() != &expected {
        return Err(ProgramError::InvalidSeeds);
    }
    check_writable(election_info)?;
    check_uninitialized(election_info)?;

    let clock = Clock::get()?;
    validate_election_window(args.start_ts, args.end_ts, clock.unix_timestamp)?;

    let rent = Rent::get()?;
    create_election_account(
        authority_info,
        election_info,
        &authority,
        bump,
        ElectionConfig::LEN,
        &rent,
    )?;

    let config = ElectionConfig::new(
        authority,
        args.start_ts,
        args.end_ts,
        args.vote_fee_lamports,
        bump,
    );
    {
        let mut data = election_info.try_borrow_mut_data()?;
        config.pack_into(&mut data)?;
    }

    log!(
        "Election initialized: start {} end {} fee {}",
        args.start_ts,
        args.end_ts,
        args.vote_fee_lamports
    );

    Ok(())
}
