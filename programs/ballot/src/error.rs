use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("There must be at least two possible answers")]
    InvalidBallot,
    #[msg("Too many possible answers")]
    TooManyOptions,
    #[msg("Question is too long")]
    QuestionTooLong,
    #[msg("Answer text is too long")]
    OptionTooLong,
    #[msg("Ballot duration is out of range")]
    InvalidDuration,
    #[msg("Ballot not found")]
    BallotNotFound,
    #[msg("You have already voted")]
    AlreadyVoted,
    #[msg("Invalid option index")]
    InvalidOptionIndex,
    #[msg("Voting period has ended")]
    VotingClosed,
    #[msg("Ballot has already ended")]
    BallotEnded,
    #[msg("Voting is still active")]
    VotingStillActive,
    #[msg("Only the ballot creator can end it")]
    Unauthorized,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
