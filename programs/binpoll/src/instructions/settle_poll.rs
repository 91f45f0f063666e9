use anchor_lang::prelude::*;

use crate::constants::{SEED_CONFIG, SEED_POLL};
use crate::errors::BinPollError;
use crate::events::PollSettled;
use crate::instructions::utils::{reward_share, split_pool};
use crate::state::{BinPollConfig, Poll};

/// Manual settlement trigger. Permissionless: once a poll has ended, anyone
/// may settle it, and the settled flag makes a second attempt a clean error.
#[derive(Accounts)]
pub struct SettlePoll<'info> {
    pub payer: Signer<'info>,

    #[account(mut, seeds = [SEED_CONFIG], bump = config.bump)]
    pub config: Account<'info, BinPollConfig>,

    #[account(
        mut,
        seeds = [SEED_POLL, poll.poll_id.to_le_bytes().as_ref()],
        bump = poll.bump
    )]
    pub poll: Account<'info, Poll>,
}

pub fn handler(ctx: Context<SettlePoll>) -> Result<()> {
    let clock = Clock::get()?;
    let poll = &mut ctx.accounts.poll;

    apply_settlement(poll, &mut ctx.accounts.config, clock.unix_timestamp)?;

    emit!(PollSettled {
        poll: poll.key(),
        poll_id: poll.poll_id,
        winning_option: poll.winning_option.unwrap_or(0),
        total_winners: poll.total_winners,
        reward_per_winner: poll.reward_per_winner,
        winner_pool: poll.winner_pool,
        platform_fee_amount: poll.platform_fee_amount,
        creator_fee_amount: poll.creator_fee_amount,
        total_pool: poll.total_pool()?,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Settled poll {}: option {} wins with {} voters",
        poll.poll_id,
        poll.winning_option.unwrap_or(0),
        poll.total_winners
    );

    Ok(())
}

/// The settlement decision, shared by the manual trigger above and the
/// batch crank. Tallies are already the fold of every recorded vote, so the
/// decision reduces to: pick the winner, split the pool, divide the winner
/// share. All bookkeeping lands on the poll in one transaction or not at all.
pub fn apply_settlement(poll: &mut Poll, config: &mut BinPollConfig, now: i64) -> Result<()> {
    require!(!poll.settled, BinPollError::AlreadySettled);
    require!(poll.is_ended(now), BinPollError::PollStillActive);

    let total_pool = poll.total_pool()?;
    let split = split_pool(
        total_pool,
        config.winner_share_bps,
        config.platform_fee_bps,
        config.creator_fee_bps,
    )?;

    let (winning_option, total_winners) = poll.decide_winner();

    let (reward_per_winner, winner_pool, platform_fee) = if total_winners > 0 {
        // Undivided remainder accrues to the platform fee.
        let (reward, remainder) = reward_share(split.winner_pool, total_winners)?;
        let claimable = split
            .winner_pool
            .checked_sub(remainder)
            .ok_or(BinPollError::MathOverflow)?;
        let platform_fee = split
            .platform_fee
            .checked_add(remainder)
            .ok_or(BinPollError::MathOverflow)?;
        (reward, claimable, platform_fee)
    } else {
        // Nobody voted: the winner share is refunded to the creator when
        // fees are collected.
        (0, split.winner_pool, split.platform_fee)
    };

    poll.settled = true;
    poll.winning_option = Some(winning_option);
    poll.total_winners = total_winners;
    poll.reward_per_winner = reward_per_winner;
    poll.winner_pool = winner_pool;
    poll.platform_fee_amount = platform_fee;
    poll.creator_fee_amount = split.creator_fee;
    poll.settled_at = now;

    config.total_volume = config
        .total_volume
        .checked_add(total_pool)
        .ok_or(BinPollError::MathOverflow)?;
    config.total_fees_collected = config
        .total_fees_collected
        .checked_add(platform_fee)
        .ok_or(BinPollError::MathOverflow)?;

    Ok(())
}
