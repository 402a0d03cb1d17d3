// PDA seeds
pub const REGISTRY_SEED: &[u8] = b"registry";
pub const BALLOT_SEED: &[u8] = b"ballot";
pub const VOTE_RECORD_SEED: &[u8] = b"vote";

// Size limits for ballot accounts
pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 16;
pub const MAX_QUESTION_LEN: usize = 200;
pub const MAX_OPTION_LEN: usize = 64;
