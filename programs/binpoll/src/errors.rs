use anchor_lang::prelude::*;

#[error_code]
pub enum BinPollError {
    // Input validation errors
    #[msg("A poll must offer between 2 and 5 options")]
    InvalidOptionCount,

    #[msg("Option label too long")]
    OptionLabelTooLong,

    #[msg("Poll question too long")]
    QuestionTooLong,

    #[msg("Base price must be greater than zero")]
    InvalidBasePrice,

    #[msg("Max votes must be greater than zero")]
    InvalidMaxVotes,

    #[msg("Poll end time must be in the future")]
    InvalidEndTime,

    #[msg("Fee split must sum to exactly 100%")]
    InvalidFeeSplit,

    #[msg("Option index out of range")]
    InvalidOptionIndex,

    // State conflict errors
    #[msg("Poll has reached its vote capacity")]
    PollFull,

    #[msg("Poll voting period has ended")]
    PollEnded,

    #[msg("Voter has already voted on this poll")]
    AlreadyVoted,

    #[msg("Poll is already settled")]
    AlreadySettled,

    #[msg("Poll voting period has not ended yet")]
    PollStillActive,

    #[msg("Poll has not been settled yet")]
    NotSettled,

    #[msg("Reward has already been claimed")]
    AlreadyClaimed,

    #[msg("Vote was not cast on the winning option")]
    NotAWinner,

    #[msg("Fees for this poll have already been collected")]
    FeesAlreadyCollected,

    #[msg("Platform is paused")]
    Paused,

    // Funds errors
    #[msg("Creator deposit is below the configured minimum")]
    InsufficientDeposit,

    #[msg("Current vote price exceeds the caller's price limit")]
    PriceLimitExceeded,

    #[msg("Voter credibility is below the poll requirement")]
    InsufficientCredibility,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("No rewards to claim")]
    NoRewardsToClaim,

    // Authorization and account validation errors
    #[msg("Unauthorized admin action")]
    Unauthorized,

    #[msg("Unauthorized credibility attestor")]
    UnauthorizedAttestor,

    #[msg("Invalid token account owner")]
    InvalidTokenAccountOwner,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    // Math errors
    #[msg("Arithmetic overflow")]
    MathOverflow,

    #[msg("Division by zero")]
    DivisionByZero,
}
