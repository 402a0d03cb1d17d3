use anchor_lang::prelude::*;

use crate::{
    state::{Ballot, BallotEnded},
    EndBallot,
};

/// Ends a ballot once its deadline has passed.
///
/// Only the ballot creator can call this. Ending is permanent: the tally is
/// frozen and no further votes are accepted.
///
/// # Arguments
/// * `ballot_id` - The ballot to end
pub fn end_ballot(ctx: Context<EndBallot>, ballot_id: u64) -> Result<()> {
    msg!("Ending ballot {}", ballot_id);

    let now = Clock::get()?.unix_timestamp;
    let caller = ctx.accounts.caller.key();

    ctx.accounts.registry.ensure_exists(ballot_id)?;

    let info = ctx.accounts.ballot.to_account_info();
    let mut ballot = Ballot::load(&info)?;
    ballot.end(caller, now)?;
    ballot.store(&info)?;

    emit!(BallotEnded {
        ballot_id,
        vote_counts: ballot.vote_counts,
        timestamp: now,
    });

    Ok(())
}
