use pinocchio::program_error::ProgramError;
use shank::ShankInstruction;

pub mod initialize;
pub use initialize::*;

pub mod initialize_election;
pub use initialize_election::*;

/// Single-byte discriminator followed by the raw little-endian payload.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankInstruction)]
pub enum CivicVoteInstruction {
    /// Administrative entry point with no accounts and no arguments.
    Initialize,

    /// Create the election config PDA for the signing authority.
    #[account(0, writable, name = "election", desc = "Election config PDA [\"election\", authority]")]
    #[account(1, writable, signer, name = "authority", desc = "Election authority and rent payer")]
    #[account(2, name = "system_program", desc = "System program")]
    InitializeElection,
}

impl TryFrom<&u8> for CivicVoteInstruction {
    type Error = ProgramError;

    fn try_from(value: &u8) -> Result<Self, Self::Error> {
        match *value {
            0 => Ok(CivicVoteInstruction::Initialize),
            1 => Ok(CivicVoteInstruction::InitializeElection),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminators() {
        assert_eq!(
            CivicVoteInstruction::try_from(&0u8),
            Ok(CivicVoteInstruction::Initialize)
        );
        assert_eq!(
            CivicVoteInstruction::try_from(&1u8),
            Ok(CivicVoteInstruction::InitializeElection)
        );
        assert_eq!(
            CivicVoteInstruction::try_from(&2u8),
            Err(ProgramError::InvalidInstructionData)
        );
        assert_eq!(CivicVoteInstruction::InitializeElection as u8, 1);
    }
}
