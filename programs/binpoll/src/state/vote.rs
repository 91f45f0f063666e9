use anchor_lang::prelude::*;

/// One vote by one wallet on one poll. The PDA address (poll + voter) is the
/// uniqueness constraint; a record is created once and never mutated apart
/// from the claim flag.
#[account]
pub struct VoteRecord {
    /// The poll this vote belongs to
    pub poll: Pubkey,

    /// The wallet that cast the vote
    pub voter: Pubkey,

    /// Chosen option, index into the poll's options
    pub option_index: u8,

    /// Dynamic price in effect when the vote was cast
    pub amount_paid: u64,

    /// When the vote was cast
    pub voted_at: i64,

    /// Whether the reward for this vote has been claimed
    pub claimed: bool,

    /// Bump seed for PDA
    pub bump: u8,
}

impl VoteRecord {
    pub const LEN: usize = 8 + // discriminator
        32 + // poll
        32 + // voter
        1 + // option_index
        8 + // amount_paid
        8 + // voted_at
        1 + // claimed
        1; // bump
}
