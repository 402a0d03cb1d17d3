use anchor_lang::prelude::*;

use crate::{
    state::{Ballot, VoteCast},
    CastVote,
};

/// Records the signer's vote for one option of a ballot.
///
/// The vote record PDA is derived from the ballot and the voter, so each key
/// gets exactly one record per ballot. A second vote fails with `AlreadyVoted`
/// and the whole transaction is rolled back.
///
/// # Arguments
/// * `ballot_id` - The ballot to vote on
/// * `option_index` - Index into the ballot's options
pub fn vote(ctx: Context<CastVote>, ballot_id: u64, option_index: u8) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let voter = ctx.accounts.voter.key();

    ctx.accounts.registry.ensure_exists(ballot_id)?;

    let info = ctx.accounts.ballot.to_account_info();
    let mut ballot = Ballot::load(&info)?;

    let accounts = &mut *ctx.accounts;
    ballot.cast_vote(&mut accounts.vote_record, info.key(), voter, option_index, now)?;
    accounts.vote_record.bump = ctx.bumps.vote_record;
    ballot.store(&info)?;

    msg!("Vote recorded on ballot {}", ballot_id);

    emit!(VoteCast {
        ballot_id,
        voter,
        timestamp: now,
    });

    Ok(())
}
