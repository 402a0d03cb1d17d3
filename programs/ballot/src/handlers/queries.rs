use anchor_lang::prelude::*;

use crate::{
    state::{Ballot, BallotDetails, BallotResults, VoteRecord},
    CheckVote, ViewBallot, ViewRegistry,
};

pub fn get_ballot_details(ctx: Context<ViewBallot>, ballot_id: u64) -> Result<BallotDetails> {
    ctx.accounts.registry.ensure_exists(ballot_id)?;
    let ballot = Ballot::load(&ctx.accounts.ballot.to_account_info())?;
    Ok(ballot.details())
}

/// Returns the options paired with their current counts.
///
/// Works on active and ended ballots alike; for an active ballot the counts
/// are a live snapshot.
pub fn get_results(ctx: Context<ViewBallot>, ballot_id: u64) -> Result<BallotResults> {
    ctx.accounts.registry.ensure_exists(ballot_id)?;
    let ballot = Ballot::load(&ctx.accounts.ballot.to_account_info())?;
    Ok(ballot.results())
}

pub fn get_ballot_count(ctx: Context<ViewRegistry>) -> Result<u64> {
    Ok(ctx.accounts.registry.ballot_count)
}

/// Reports whether `voter` has a vote record on the ballot.
///
/// The record PDA is passed unchecked since it does not exist until the
/// voter's first vote.
pub fn has_user_voted(ctx: Context<CheckVote>, ballot_id: u64, voter: Pubkey) -> Result<bool> {
    ctx.accounts.registry.ensure_exists(ballot_id)?;

    let ballot_key = ctx.accounts.ballot.key();
    let record = VoteRecord::load(&ctx.accounts.vote_record.to_account_info())?;
    Ok(record.is_some_and(|record| record.is_for(ballot_key, voter)))
}
