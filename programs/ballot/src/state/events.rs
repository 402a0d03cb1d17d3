use anchor_lang::prelude::*;

#[event]
pub struct RegistryInitialized {
    pub registry: Pubkey,
    pub authority: Pubkey,
    pub registry_id: u64,
}

#[event]
pub struct BallotCreated {
    pub registry: Pubkey,
    pub ballot_id: u64,
    pub creator: Pubkey,
    pub deadline: i64,
    pub option_count: u8,
}

#[event]
pub struct VoteCast {
    pub ballot_id: u64,
    pub voter: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct BallotEnded {
    pub ballot_id: u64,
    /// Final tally, one entry per option
    pub vote_counts: Vec<u64>,
    pub timestamp: i64,
}
