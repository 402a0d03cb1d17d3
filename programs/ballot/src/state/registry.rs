use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    state::{Ballot, BallotParams},
};

/// An independent collection of ballots.
///
/// Ballots are addressed by `(registry, id)` where ids are dense and assigned
/// in creation order, so `ballot_count` is always the next id to hand out.
#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct BallotRegistry {
    /// PDA bump seed
    pub bump: u8,
    /// Key that initialized this registry
    pub authority: Pubkey,
    /// Distinguishes registries owned by the same authority
    pub registry_id: u64,
    /// Number of ballots ever created
    pub ballot_count: u64,
}

impl BallotRegistry {
    pub fn initialize(&mut self, authority: Pubkey, registry_id: u64, bump: u8) {
        self.bump = bump;
        self.authority = authority;
        self.registry_id = registry_id;
        self.ballot_count = 0;
    }

    pub fn ensure_exists(&self, ballot_id: u64) -> Result<()> {
        require!(ballot_id < self.ballot_count, ErrorCode::BallotNotFound);
        Ok(())
    }

    /// Opens `ballot` at the next id and bumps the ballot count.
    ///
    /// Nothing is written to either account unless every check passes.
    pub fn open_ballot(
        &mut self,
        registry: Pubkey,
        ballot: &mut Ballot,
        params: BallotParams,
        creator: Pubkey,
        now: i64,
    ) -> Result<u64> {
        let id = self.ballot_count;
        let next = id.checked_add(1).ok_or(ErrorCode::ArithmeticOverflow)?;

        ballot.open(registry, id, params, creator, now)?;
        self.ballot_count = next;

        Ok(id)
    }
}
