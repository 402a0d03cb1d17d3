use anchor_lang::prelude::*;

use crate::{
    state::{BallotCreated, BallotParams},
    CreateBallot,
};

/// Creates a new ballot at the registry's next id.
///
/// The caller becomes the ballot creator, the only key allowed to end it.
/// The deadline is the current cluster time plus `duration_seconds`.
///
/// # Arguments
/// * `params` - Question, answer options (at least two) and duration in seconds
///
/// # Returns
/// The id assigned to the new ballot
pub fn create_ballot(ctx: Context<CreateBallot>, params: BallotParams) -> Result<u64> {
    msg!("Creating a new ballot");

    let now = Clock::get()?.unix_timestamp;
    let creator = ctx.accounts.creator.key();
    let registry_key = ctx.accounts.registry.key();

    let accounts = &mut *ctx.accounts;
    let ballot_id = accounts.registry.open_ballot(
        registry_key,
        &mut accounts.ballot,
        params,
        creator,
        now,
    )?;
    accounts.ballot.bump = ctx.bumps.ballot;

    emit!(BallotCreated {
        registry: registry_key,
        ballot_id,
        creator,
        deadline: accounts.ballot.deadline,
        option_count: accounts.ballot.option_count()?,
    });

    Ok(ballot_id)
}
