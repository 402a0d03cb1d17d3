// Stops Rust Analyzer complaining about missing configs
// See https://solana.stackexchange.com/questions/17777
#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod handlers;
pub mod state;

use constants::*;
pub use error::ErrorCode;
use state::{Ballot, BallotDetails, BallotParams, BallotRegistry, BallotResults, VoteRecord};

declare_id!("BaLLotRegx1stry7vWq4N8cQpJfZsYtHkUmD3eGr2Ab9");

#[program]
pub mod ballot {
    use super::*;

    pub fn init_registry(ctx: Context<InitRegistry>, registry_id: u64) -> Result<()> {
        handlers::init_registry::init_registry(ctx, registry_id)
    }

    pub fn create_ballot(ctx: Context<CreateBallot>, params: BallotParams) -> Result<u64> {
        handlers::create_ballot::create_ballot(ctx, params)
    }

    pub fn vote(ctx: Context<CastVote>, ballot_id: u64, option_index: u8) -> Result<()> {
        handlers::vote::vote(ctx, ballot_id, option_index)
    }

    pub fn end_ballot(ctx: Context<EndBallot>, ballot_id: u64) -> Result<()> {
        handlers::end_ballot::end_ballot(ctx, ballot_id)
    }

    pub fn get_ballot_details(ctx: Context<ViewBallot>, ballot_id: u64) -> Result<BallotDetails> {
        handlers::queries::get_ballot_details(ctx, ballot_id)
    }

    pub fn get_results(ctx: Context<ViewBallot>, ballot_id: u64) -> Result<BallotResults> {
        handlers::queries::get_results(ctx, ballot_id)
    }

    pub fn get_ballot_count(ctx: Context<ViewRegistry>) -> Result<u64> {
        handlers::queries::get_ballot_count(ctx)
    }

    pub fn has_user_voted(ctx: Context<CheckVote>, ballot_id: u64, voter: Pubkey) -> Result<bool> {
        handlers::queries::has_user_voted(ctx, ballot_id, voter)
    }
}

#[derive(Accounts)]
#[instruction(registry_id: u64)]
pub struct InitRegistry<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + BallotRegistry::INIT_SPACE,
        seeds = [REGISTRY_SEED, payer.key().as_ref(), registry_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub registry: Account<'info, BallotRegistry>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct CreateBallot<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED, registry.authority.as_ref(), registry.registry_id.to_le_bytes().as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, BallotRegistry>,

    // Ids are dense, so the next ballot always lives at the current count
    #[account(
        init,
        payer = creator,
        space = 8 + Ballot::INIT_SPACE,
        seeds = [BALLOT_SEED, registry.key().as_ref(), registry.ballot_count.to_le_bytes().as_ref()],
        bump,
    )]
    pub ballot: Account<'info, Ballot>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(ballot_id: u64)]
pub struct CastVote<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    #[account(
        seeds = [REGISTRY_SEED, registry.authority.as_ref(), registry.registry_id.to_le_bytes().as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, BallotRegistry>,

    /// CHECK: ballot PDA, address checked by seeds; loaded by the handler so an
    /// unknown id reports `BallotNotFound`
    #[account(
        mut,
        seeds = [BALLOT_SEED, registry.key().as_ref(), ballot_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub ballot: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = voter,
        space = 8 + VoteRecord::INIT_SPACE,
        seeds = [VOTE_RECORD_SEED, ballot.key().as_ref(), voter.key().as_ref()],
        bump,
    )]
    pub vote_record: Account<'info, VoteRecord>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(ballot_id: u64)]
pub struct EndBallot<'info> {
    pub caller: Signer<'info>,

    #[account(
        seeds = [REGISTRY_SEED, registry.authority.as_ref(), registry.registry_id.to_le_bytes().as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, BallotRegistry>,

    /// CHECK: ballot PDA, address checked by seeds; loaded by the handler so an
    /// unknown id reports `BallotNotFound`
    #[account(
        mut,
        seeds = [BALLOT_SEED, registry.key().as_ref(), ballot_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub ballot: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct ViewRegistry<'info> {
    #[account(
        seeds = [REGISTRY_SEED, registry.authority.as_ref(), registry.registry_id.to_le_bytes().as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, BallotRegistry>,
}

#[derive(Accounts)]
#[instruction(ballot_id: u64)]
pub struct ViewBallot<'info> {
    #[account(
        seeds = [REGISTRY_SEED, registry.authority.as_ref(), registry.registry_id.to_le_bytes().as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, BallotRegistry>,

    /// CHECK: ballot PDA, address checked by seeds; loaded by the handler
    #[account(
        seeds = [BALLOT_SEED, registry.key().as_ref(), ballot_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub ballot: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(ballot_id: u64, voter: Pubkey)]
pub struct CheckVote<'info> {
    #[account(
        seeds = [REGISTRY_SEED, registry.authority.as_ref(), registry.registry_id.to_le_bytes().as_ref()],
        bump = registry.bump,
    )]
    pub registry: Account<'info, BallotRegistry>,

    /// CHECK: ballot PDA, address checked by seeds; loaded by the handler
    #[account(
        seeds = [BALLOT_SEED, registry.key().as_ref(), ballot_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub ballot: UncheckedAccount<'info>,

    /// CHECK: vote_record, address checked by seeds; may not be initialized yet
    #[account(
        seeds = [VOTE_RECORD_SEED, ballot.key().as_ref(), voter.as_ref()],
        bump,
    )]
    pub vote_record: UncheckedAccount<'info>,
}
