use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("J7fcYP5Knnypf9hgpbgmTtq8ZTJRanKRwQgrSEJzdtLM");

#[program]
pub mod binpoll {
    use super::*;

    /// Initialize the platform config with fee split and deposit floor
    pub fn initialize(
        ctx: Context<Initialize>,
        winner_share_bps: u16,
        platform_fee_bps: u16,
        creator_fee_bps: u16,
        min_creator_deposit: u64,
    ) -> Result<()> {
        instructions::initialize::handler(
            ctx,
            winner_share_bps,
            platform_fee_bps,
            creator_fee_bps,
            min_creator_deposit,
        )
    }

    /// Update platform parameters (admin only)
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        new_admin: Option<Pubkey>,
        new_treasury: Option<Pubkey>,
        new_credibility_authority: Option<Pubkey>,
        new_winner_share_bps: Option<u16>,
        new_platform_fee_bps: Option<u16>,
        new_creator_fee_bps: Option<u16>,
        new_min_creator_deposit: Option<u64>,
    ) -> Result<()> {
        instructions::update_config::handler(
            ctx,
            new_admin,
            new_treasury,
            new_credibility_authority,
            new_winner_share_bps,
            new_platform_fee_bps,
            new_creator_fee_bps,
            new_min_creator_deposit,
        )
    }

    /// Pause or unpause poll creation and voting (admin only)
    pub fn set_pause(ctx: Context<SetPause>, paused: bool) -> Result<()> {
        instructions::set_pause::handler(ctx, paused)
    }

    /// Attest a voter's credibility score (credibility authority only)
    pub fn update_credibility(ctx: Context<UpdateCredibility>, score: u32) -> Result<()> {
        instructions::update_credibility::handler(ctx, score)
    }

    /// Create a poll and stake the creator deposit
    pub fn create_poll(
        ctx: Context<CreatePoll>,
        question: String,
        options: Vec<String>,
        base_price: u64,
        max_votes: u32,
        required_credibility: u32,
        end_time: i64,
        creator_deposit: u64,
    ) -> Result<()> {
        instructions::create_poll::handler(
            ctx,
            question,
            options,
            base_price,
            max_votes,
            required_credibility,
            end_time,
            creator_deposit,
        )
    }

    /// Preview the price of the next vote without mutating anything
    pub fn quote_vote_price(ctx: Context<QuoteVotePrice>) -> Result<u64> {
        instructions::quote_vote_price::handler(ctx)
    }

    /// Cast a vote, paying the current dynamic price
    pub fn cast_vote(ctx: Context<CastVote>, option_index: u8, max_price: u64) -> Result<()> {
        instructions::cast_vote::handler(ctx, option_index, max_price)
    }

    /// Settle one ended poll: decide the winner and fix the payout table
    pub fn settle_poll(ctx: Context<SettlePoll>) -> Result<()> {
        instructions::settle_poll::handler(ctx)
    }

    /// Settlement crank: attempt every poll passed as a remaining account
    pub fn batch_settle<'info>(
        ctx: Context<'_, '_, '_, 'info, BatchSettle<'info>>,
    ) -> Result<()> {
        instructions::batch_settle::handler(ctx)
    }

    /// Claim the per-winner reward for a winning vote
    pub fn claim_reward(ctx: Context<ClaimReward>) -> Result<()> {
        instructions::claim_reward::handler(ctx)
    }

    /// Pay out the platform and creator shares of a settled poll
    pub fn collect_fees(ctx: Context<CollectFees>) -> Result<()> {
        instructions::collect_fees::handler(ctx)
    }
}
