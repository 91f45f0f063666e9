use anchor_lang::prelude::*;

use crate::constants::{MAX_OPTION_LEN, MAX_POLL_OPTIONS, MAX_QUESTION_LEN};
use crate::errors::BinPollError;

#[account]
pub struct Poll {
    /// Address of the poll creator
    pub creator: Pubkey,

    /// Sequential poll id issued from the config account
    pub poll_id: u64,

    /// Poll question (max 200 characters)
    pub question: String,

    /// Option labels, 2-5 entries, immutable after creation
    pub options: Vec<String>,

    /// Running vote count per option, same length as `options`.
    /// Always the fold of every recorded vote for this poll.
    pub option_tallies: Vec<u32>,

    /// Price paid by the first voter
    pub base_price: u64,

    /// Vote capacity
    pub max_votes: u32,

    /// Votes recorded so far, never exceeds `max_votes`
    pub current_votes: u32,

    /// Deposit staked by the creator at poll creation
    pub creator_deposit: u64,

    /// Sum of all amounts paid by voters
    pub voter_pool: u64,

    /// Minimum credibility score a voter needs to participate
    pub required_credibility: u32,

    /// Voting closes at this timestamp
    pub end_time: i64,

    /// When the poll was created
    pub created_at: i64,

    /// Set exactly once, never reverts to false
    pub settled: bool,

    /// Winning option index, present once settled
    pub winning_option: Option<u8>,

    /// Number of votes on the winning option
    pub total_winners: u32,

    /// Payout each winner can claim
    pub reward_per_winner: u64,

    /// Amount reserved for winners; refunded to the creator if no one won
    pub winner_pool: u64,

    /// Platform's cut, including any undivided reward remainder
    pub platform_fee_amount: u64,

    /// Creator's cut
    pub creator_fee_amount: u64,

    /// When the poll was settled
    pub settled_at: i64,

    /// Whether the platform/creator payouts have left the vault
    pub fees_collected: bool,

    /// Bump seed for PDA
    pub bump: u8,
}

impl Poll {
    pub const LEN: usize = 8 + // discriminator
        32 + // creator
        8 + // poll_id
        (4 + MAX_QUESTION_LEN) + // question
        (4 + MAX_POLL_OPTIONS * (4 + MAX_OPTION_LEN)) + // options
        (4 + MAX_POLL_OPTIONS * 4) + // option_tallies
        8 + // base_price
        4 + // max_votes
        4 + // current_votes
        8 + // creator_deposit
        8 + // voter_pool
        4 + // required_credibility
        8 + // end_time
        8 + // created_at
        1 + // settled
        (1 + 1) + // winning_option (Option<u8>)
        4 + // total_winners
        8 + // reward_per_winner
        8 + // winner_pool
        8 + // platform_fee_amount
        8 + // creator_fee_amount
        8 + // settled_at
        1 + // fees_collected
        1; // bump

    pub fn is_ended(&self, now: i64) -> bool {
        now >= self.end_time
    }

    pub fn is_full(&self) -> bool {
        self.current_votes >= self.max_votes
    }

    /// Everything paid in so far: creator deposit plus voter payments.
    pub fn total_pool(&self) -> Result<u64> {
        Ok(self
            .creator_deposit
            .checked_add(self.voter_pool)
            .ok_or(BinPollError::MathOverflow)?)
    }

    /// Gate for vote acceptance. Capacity and timing are checked here so the
    /// pricing function is only ever evaluated on a votable poll.
    pub fn assert_votable(&self, now: i64) -> Result<()> {
        require!(!self.is_ended(now), BinPollError::PollEnded);
        require!(!self.is_full(), BinPollError::PollFull);
        Ok(())
    }

    /// Fold one vote into the running totals.
    pub fn record_vote(&mut self, option_index: u8, amount_paid: u64) -> Result<()> {
        let idx = option_index as usize;
        require!(idx < self.options.len(), BinPollError::InvalidOptionIndex);

        self.option_tallies[idx] = self.option_tallies[idx]
            .checked_add(1)
            .ok_or(BinPollError::MathOverflow)?;
        self.current_votes = self
            .current_votes
            .checked_add(1)
            .ok_or(BinPollError::MathOverflow)?;
        self.voter_pool = self
            .voter_pool
            .checked_add(amount_paid)
            .ok_or(BinPollError::MathOverflow)?;
        Ok(())
    }

    /// Winner is the option with the strictly greatest tally; a tie goes to
    /// the lowest option index. Returns (winning index, votes on it).
    pub fn decide_winner(&self) -> (u8, u32) {
        let mut winning = 0usize;
        for (idx, tally) in self.option_tallies.iter().enumerate() {
            if *tally > self.option_tallies[winning] {
                winning = idx;
            }
        }
        (winning as u8, self.option_tallies[winning])
    }
}
