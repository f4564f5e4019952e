use pinocchio::{program_error::ProgramError, pubkey::Pubkey};
use shank::ShankAccount;

/// Per-authority election configuration, stored at the PDA
/// `["election", authority]`.
///
/// Numbers are kept as little-endian byte arrays so the struct has alignment 1
/// and can be read in place from account data.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankAccount)]
pub struct ElectionConfig {
    pub discriminator: [u8; 8],
    /// Signer that created and pays for the election
    pub authority: Pubkey,
    /// Voting is rejected before this time
    pub start_ts: [u8; 8],
    /// Voting closes at this time
    pub end_ts: [u8; 8],
    pub vote_fee_lamports: [u8; 8],
    pub total_votes: [u8; 8],
    /// Canonical bump of the PDA
    pub bump: u8,
}

impl ElectionConfig {
    /// First 8 bytes of `sha256("account:ElectionConfig")`.
    pub const DISCRIMINATOR: [u8; 8] = [31, 60, 24, 171, 31, 205, 153, 64];

    pub const LEN: usize = core::mem::size_of::<ElectionConfig>();

    pub fn new(
        authority: Pubkey,
        start_ts: i64,
        end_ts: i64,
        vote_fee_lamports: u64,
        bump: u8,
    ) -> Self {
        Self {
            discriminator: Self::DISCRIMINATOR,
            authority,
            start_ts: start_ts.to_le_bytes(),
            end_ts: end_ts.to_le_bytes(),
            vote_fee_lamports: vote_fee_lamports.to_le_bytes(),
            total_votes: 0u64.to_le_bytes(),
            bump,
        }
    }

    #[inline]
    pub fn start_ts(&self) -> i64 {
        i64::from_le_bytes(self.start_ts)
    }

    #[inline]
    pub fn end_ts(&self) -> i64 {
        i64::from_le_bytes(self.end_ts)
    }

    #[inline]
    pub fn vote_fee_lamports(&self) -> u64 {
        u64::from_le_bytes(self.vote_fee_lamports)
    }

    #[inline]
    pub fn total_votes(&self) -> u64 {
        u64::from_le_bytes(self.total_votes)
    }

    /// Voting window is `[start_ts, end_ts)`.
    pub fn is_open(&self, now: i64) -> bool {
        self.start_ts() <= now && now < self.end_ts()
    }

    /// Borrow an initialized config in place.
    pub fn from_bytes(data: &[u8]) -> Result<&Self, ProgramError> {
        if data.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        // SAFETY: length checked above and every field has alignment 1.
        let config = unsafe { &*(data.as_ptr() as *const Self) };
        if config.discriminator != Self::DISCRIMINATOR {
            return Err(ProgramError::InvalidAccountData);
        }
        Ok(config)
    }

    /// Copy out of account data.
    pub fn unpack(data: &[u8]) -> Result<Self, ProgramError> {
        Self::from_bytes(data).copied()
    }

    /// Write the config into freshly allocated account data.
    pub fn pack_into(&self, dst: &mut [u8]) -> Result<(), ProgramError> {
        if dst.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        // SAFETY: same layout argument as `from_bytes`.
        let bytes =
            unsafe { core::slice::from_raw_parts(self as *const Self as *const u8, Self::LEN) };
        dst.copy_from_slice(bytes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ElectionConfig {
        ElectionConfig::new([7u8; 32], 1_700_000_000, 1_700_086_400, 5_000, 254)
    }

    #[test]
    fn layout_matches_account_space() {
        // 8 discriminator + 32 authority + 4 * 8 numbers + 1 bump
        assert_eq!(ElectionConfig::LEN, 73);
        assert_eq!(core::mem::align_of::<ElectionConfig>(), 1);
    }

    #[test]
    fn fields_land_at_fixed_offsets() {
        let mut buf = [0u8; ElectionConfig::LEN];
        sample().pack_into(&mut buf).unwrap();

        assert_eq!(&buf[0..8], &ElectionConfig::DISCRIMINATOR);
        assert_eq!(&buf[8..40], &[7u8; 32]);
        assert_eq!(i64::from_le_bytes(buf[40..48].try_into().unwrap()), 1_700_000_000);
        assert_eq!(i64::from_le_bytes(buf[48..56].try_into().unwrap()), 1_700_086_400);
        assert_eq!(u64::from_le_bytes(buf[56..64].try_into().unwrap()), 5_000);
        assert_eq!(u64::from_le_bytes(buf[64..72].try_into().unwrap()), 0);
        assert_eq!(buf[72], 254);

        assert_eq!(ElectionConfig::unpack(&buf).unwrap(), sample());
    }

    #[test]
    fn rejects_foreign_or_truncated_data() {
        let mut buf = [0u8; ElectionConfig::LEN];
        assert_eq!(
            ElectionConfig::unpack(&buf),
            Err(ProgramError::InvalidAccountData)
        );

        sample().pack_into(&mut buf).unwrap();
        assert_eq!(
            ElectionConfig::unpack(&buf[..72]),
            Err(ProgramError::InvalidAccountData)
        );

        let mut short = [0u8; 10];
        assert!(sample().pack_into(&mut short).is_err());
    }

    #[test]
    fn window_is_half_open() {
        let config = sample();
        assert!(!config.is_open(1_699_999_999));
        assert!(config.is_open(1_700_000_000));
        assert!(config.is_open(1_700_086_399));
        assert!(!config.is_open(1_700_086_400));
    }
}
