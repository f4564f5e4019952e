use pinocchio::program_error::ProgramError;

/// Offset applied to every custom error code, so program errors never collide
/// with the low codes used by the runtime and builtin programs.
pub const ERROR_CODE_OFFSET: u32 = 6000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum VoteError {
    /// End time must be after start time
    InvalidTimeRange = ERROR_CODE_OFFSET,
    /// Start time cannot be in the past
    StartInPast,
}

impl VoteError {
    pub const fn code(self) -> u32 {
        self as u32
    }

    pub const fn message(self) -> &'static str {
        match self {
            VoteError::InvalidTimeRange => "End time must be after start time",
            VoteError::StartInPast => "Start time cannot be in the past",
        }
    }
}

impl TryFrom<u32> for VoteError {
    type Error = ProgramError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            c if c == VoteError::InvalidTimeRange.code() => Ok(VoteError::InvalidTimeRange),
            c if c == VoteError::StartInPast.code() => Ok(VoteError::StartInPast),
            _ => Err(ProgramError::InvalidArgument),
        }
    }
}

// map domain errors to the runtime's error channel
pub fn to_program_error(err: VoteError) -> ProgramError {
    ProgramError::Custom(err.code())
}

impl From<VoteError> for ProgramError {
    fn from(err: VoteError) -> Self {
        to_program_error(err)
    }
}
