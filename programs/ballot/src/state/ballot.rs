use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_OPTIONS, MAX_OPTION_LEN, MAX_QUESTION_LEN, MIN_OPTIONS},
    error::ErrorCode,
    state::VoteRecord,
};

/// Arguments for opening a new ballot.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct BallotParams {
    pub question: String,
    pub options: Vec<String>,
    /// Seconds from creation until the ballot may be ended
    pub duration_seconds: u64,
}

/// A single votable question with its running tally.
#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct Ballot {
    /// PDA bump seed
    pub bump: u8,
    /// Registry this ballot belongs to
    pub registry: Pubkey,
    /// Sequential id within the registry
    pub id: u64,
    /// Public key of the ballot creator (only they can end it)
    pub creator: Pubkey,
    /// Unix timestamp after which the ballot may be ended
    pub deadline: i64,
    /// Cleared exactly once, by `end`
    pub is_active: bool,
    #[max_len(MAX_QUESTION_LEN)]
    pub question: String,
    #[max_len(MAX_OPTIONS, MAX_OPTION_LEN)]
    pub options: Vec<String>,
    /// One counter per entry in `options`
    #[max_len(MAX_OPTIONS)]
    pub vote_counts: Vec<u64>,
}

/// Everything a client needs to render a ballot.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct BallotDetails {
    pub question: String,
    pub options: Vec<String>,
    pub vote_counts: Vec<u64>,
    pub deadline: i64,
    pub is_active: bool,
    pub creator: Pubkey,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct BallotResults {
    pub options: Vec<String>,
    pub vote_counts: Vec<u64>,
}

impl Ballot {
    /// Initializes a freshly allocated ballot account.
    ///
    /// All validation happens before the first write, so a rejected call
    /// leaves `self` untouched.
    pub fn open(
        &mut self,
        registry: Pubkey,
        id: u64,
        params: BallotParams,
        creator: Pubkey,
        now: i64,
    ) -> Result<()> {
        let BallotParams {
            question,
            options,
            duration_seconds,
        } = params;

        require!(options.len() >= MIN_OPTIONS, ErrorCode::InvalidBallot);
        require!(options.len() <= MAX_OPTIONS, ErrorCode::TooManyOptions);
        require!(question.len() <= MAX_QUESTION_LEN, ErrorCode::QuestionTooLong);
        require!(
            options.iter().all(|option| option.len() <= MAX_OPTION_LEN),
            ErrorCode::OptionTooLong
        );

        let deadline = i64::try_from(duration_seconds)
            .ok()
            .and_then(|duration| now.checked_add(duration))
            .ok_or(ErrorCode::InvalidDuration)?;

        self.registry = registry;
        self.id = id;
        self.creator = creator;
        self.deadline = deadline;
        self.is_active = true;
        self.question = question;
        self.vote_counts = vec![0; options.len()];
        self.options = options;

        Ok(())
    }

    /// Counts one vote from `voter` and marks `record` as used.
    ///
    /// `record` is the (ballot, voter) marker; a fresh record has
    /// `has_voted == false`. Both accounts are written together or not at all.
    pub fn cast_vote(
        &mut self,
        record: &mut VoteRecord,
        ballot: Pubkey,
        voter: Pubkey,
        option_index: u8,
        now: i64,
    ) -> Result<()> {
        require!(!record.has_voted, ErrorCode::AlreadyVoted);
        require!(self.is_active, ErrorCode::BallotEnded);
        require!(now < self.deadline, ErrorCode::VotingClosed);

        let slot = usize::from(option_index);
        require!(slot < self.options.len(), ErrorCode::InvalidOptionIndex);
        let updated = self
            .vote_counts
            .get(slot)
            .ok_or(ErrorCode::InvalidOptionIndex)?
            .checked_add(1)
            .ok_or(ErrorCode::ArithmeticOverflow)?;

        self.vote_counts[slot] = updated;
        record.mark(ballot, voter);

        Ok(())
    }

    /// Closes the ballot. Only the creator may do so, and only once the
    /// deadline has passed.
    pub fn end(&mut self, caller: Pubkey, now: i64) -> Result<()> {
        require_keys_eq!(caller, self.creator, ErrorCode::Unauthorized);
        require!(self.is_active, ErrorCode::BallotEnded);
        require!(now >= self.deadline, ErrorCode::VotingStillActive);

        self.is_active = false;
        Ok(())
    }

    /// Reads a ballot from its PDA.
    ///
    /// The account is taken unchecked so that an id that was never created
    /// surfaces as `BallotNotFound` rather than an account-loading error.
    pub fn load(info: &AccountInfo) -> Result<Self> {
        require!(
            info.owner == &crate::ID && !info.data_is_empty(),
            ErrorCode::BallotNotFound
        );
        let data = info.try_borrow_data()?;
        Self::try_deserialize(&mut &data[..])
    }

    /// Writes the ballot back into the account loaded by `load`.
    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }

    pub fn option_count(&self) -> Result<u8> {
        u8::try_from(self.options.len()).map_err(|_| error!(ErrorCode::TooManyOptions))
    }

    pub fn total_votes(&self) -> u64 {
        self.vote_counts.iter().sum()
    }

    pub fn details(&self) -> BallotDetails {
        BallotDetails {
            question: self.question.clone(),
            options: self.options.clone(),
            vote_counts: self.vote_counts.clone(),
            deadline: self.deadline,
            is_active: self.is_active,
            creator: self.creator,
        }
    }

    pub fn results(&self) -> BallotResults {
        BallotResults {
            options: self.options.clone(),
            vote_counts: self.vote_counts.clone(),
        }
    }
}
