//! In-memory stand-in for the ledger that hosts the program.
//!
//! Each mutating call works on copies of the touched accounts and commits
//! them only if the call succeeds, mirroring how a failed transaction rolls
//! back every account write.

#![allow(dead_code)]

use std::collections::BTreeMap;

use anchor_lang::{error::Error, prelude::*};
use ballot::{
    constants::{BALLOT_SEED, REGISTRY_SEED, VOTE_RECORD_SEED},
    state::{Ballot, BallotDetails, BallotParams, BallotRegistry, BallotResults, VoteRecord},
    ErrorCode,
};

pub const GENESIS: i64 = 1_700_000_000;

pub fn key(byte: u8) -> Pubkey {
    Pubkey::new_from_array([byte; 32])
}

pub fn params(question: &str, options: &[&str], duration_seconds: u64) -> BallotParams {
    BallotParams {
        question: question.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        duration_seconds,
    }
}

/// Error code carried by a rejected call.
pub fn code(err: Error) -> u32 {
    match err {
        Error::AnchorError(anchor) => anchor.error_code_number,
        Error::ProgramError(program) => panic!("unexpected program error: {program:?}"),
    }
}

pub fn assert_rejected<T: std::fmt::Debug>(result: Result<T>, expected: ErrorCode) {
    let err = result.expect_err("call should have been rejected");
    assert_eq!(code(err), u32::from(expected));
}

pub struct Ledger {
    pub registry_key: Pubkey,
    registry: BallotRegistry,
    ballots: BTreeMap<u64, Ballot>,
    records: BTreeMap<Pubkey, VoteRecord>,
    now: i64,
}

impl Ledger {
    pub fn new(authority: Pubkey, registry_id: u64) -> Self {
        let (registry_key, bump) = Pubkey::find_program_address(
            &[REGISTRY_SEED, authority.as_ref(), &registry_id.to_le_bytes()],
            &ballot::ID,
        );
        let mut registry = BallotRegistry::default();
        registry.initialize(authority, registry_id, bump);

        Self {
            registry_key,
            registry,
            ballots: BTreeMap::new(),
            records: BTreeMap::new(),
            now: GENESIS,
        }
    }

    pub fn now(&self) -> i64 {
        self.now
    }

    pub fn advance(&mut self, seconds: i64) {
        self.now += seconds;
    }

    pub fn ballot_key(&self, ballot_id: u64) -> Pubkey {
        Pubkey::find_program_address(
            &[BALLOT_SEED, self.registry_key.as_ref(), &ballot_id.to_le_bytes()],
            &ballot::ID,
        )
        .0
    }

    fn vote_record_key(&self, ballot_id: u64, voter: Pubkey) -> Pubkey {
        Pubkey::find_program_address(
            &[
                VOTE_RECORD_SEED,
                self.ballot_key(ballot_id).as_ref(),
                voter.as_ref(),
            ],
            &ballot::ID,
        )
        .0
    }

    pub fn create_ballot(&mut self, creator: Pubkey, params: BallotParams) -> Result<u64> {
        let mut registry = self.registry.clone();
        let mut ballot = Ballot::default();

        let id = registry.open_ballot(self.registry_key, &mut ballot, params, creator, self.now)?;

        self.registry = registry;
        self.ballots.insert(id, ballot);
        Ok(id)
    }

    pub fn vote(&mut self, voter: Pubkey, ballot_id: u64, option_index: u8) -> Result<()> {
        self.registry.ensure_exists(ballot_id)?;

        let ballot_key = self.ballot_key(ballot_id);
        let record_key = self.vote_record_key(ballot_id, voter);
        let mut ballot = self.ballots[&ballot_id].clone();
        let mut record = self.records.get(&record_key).cloned().unwrap_or_default();

        ballot.cast_vote(&mut record, ballot_key, voter, option_index, self.now)?;

        self.ballots.insert(ballot_id, ballot);
        self.records.insert(record_key, record);
        Ok(())
    }

    pub fn end_ballot(&mut self, caller: Pubkey, ballot_id: u64) -> Result<()> {
        self.registry.ensure_exists(ballot_id)?;

        let mut ballot = self.ballots[&ballot_id].clone();
        ballot.end(caller, self.now)?;

        self.ballots.insert(ballot_id, ballot);
        Ok(())
    }

    pub fn get_ballot_details(&self, ballot_id: u64) -> Result<BallotDetails> {
        self.registry.ensure_exists(ballot_id)?;
        Ok(self.ballots[&ballot_id].details())
    }

    pub fn get_results(&self, ballot_id: u64) -> Result<BallotResults> {
        self.registry.ensure_exists(ballot_id)?;
        Ok(self.ballots[&ballot_id].results())
    }

    pub fn get_ballot_count(&self) -> u64 {
        self.registry.ballot_count
    }

    pub fn has_user_voted(&self, ballot_id: u64, voter: Pubkey) -> Result<bool> {
        self.registry.ensure_exists(ballot_id)?;
        let ballot_key = self.ballot_key(ballot_id);
        Ok(self
            .records
            .get(&self.vote_record_key(ballot_id, voter))
            .is_some_and(|record| record.is_for(ballot_key, voter)))
    }

    /// Number of voted records that point at `ballot_id`.
    pub fn voters_on(&self, ballot_id: u64) -> u64 {
        let ballot_key = self.ballot_key(ballot_id);
        self.records
            .values()
            .filter(|record| record.has_voted && record.ballot == ballot_key)
            .count() as u64
    }

    pub fn ballot(&self, ballot_id: u64) -> &Ballot {
        &self.ballots[&ballot_id]
    }
}
