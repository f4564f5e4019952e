/// Seed prefix of the per-authority election PDA.
pub const ELECTION_SEED: &[u8] = b"election";

pub const INITIALIZE_ELECTION_DATA_LEN: usize = 24;
