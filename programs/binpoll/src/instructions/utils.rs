use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, PRICE_CURVE_SLOPE};
use crate::errors::BinPollError;

/// Price the next voter must pay.
///
/// Evaluates `base_price * (1 + PRICE_CURVE_SLOPE * current_votes / max_votes)`
/// as a single rational in u128, floored once at the end, so the result is
/// deterministic integer arithmetic with no intermediate rounding. This is the
/// only implementation of the curve in the program: `quote_vote_price` (the
/// read-only preview) and `cast_vote` (the ledger-mutating charge) both call
/// it, so the two can never diverge.
pub fn vote_price(base_price: u64, current_votes: u32, max_votes: u32) -> Result<u64> {
    require!(max_votes > 0, BinPollError::InvalidMaxVotes);
    require!(base_price > 0, BinPollError::InvalidBasePrice);
    require!(current_votes <= max_votes, BinPollError::PollFull);

    let numerator = (max_votes as u128)
        .checked_add(
            (current_votes as u128)
                .checked_mul(PRICE_CURVE_SLOPE as u128)
                .ok_or(BinPollError::MathOverflow)?,
        )
        .ok_or(BinPollError::MathOverflow)?;

    let price = (base_price as u128)
        .checked_mul(numerator)
        .ok_or(BinPollError::MathOverflow)?
        / (max_votes as u128);

    u64::try_from(price).map_err(|_| BinPollError::MathOverflow.into())
}

/// Three-way split of a settled pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSplit {
    pub winner_pool: u64,
    pub platform_fee: u64,
    pub creator_fee: u64,
}

/// Split `total` by the configured basis points. The platform and creator
/// shares are floored individually and the winner pool takes whatever is
/// left, so the three parts always sum to `total` exactly.
pub fn split_pool(
    total: u64,
    winner_share_bps: u16,
    platform_fee_bps: u16,
    creator_fee_bps: u16,
) -> Result<PoolSplit> {
    let sum = winner_share_bps as u64 + platform_fee_bps as u64 + creator_fee_bps as u64;
    require!(sum == BPS_DENOMINATOR, BinPollError::InvalidFeeSplit);

    let platform_fee = bps_share(total, platform_fee_bps)?;
    let creator_fee = bps_share(total, creator_fee_bps)?;
    let winner_pool = total
        .checked_sub(platform_fee)
        .ok_or(BinPollError::MathOverflow)?
        .checked_sub(creator_fee)
        .ok_or(BinPollError::MathOverflow)?;

    Ok(PoolSplit {
        winner_pool,
        platform_fee,
        creator_fee,
    })
}

pub fn bps_share(amount: u64, bps: u16) -> Result<u64> {
    require!(bps as u64 <= BPS_DENOMINATOR, BinPollError::InvalidFeeSplit);
    let share = (amount as u128)
        .checked_mul(bps as u128)
        .ok_or(BinPollError::MathOverflow)?
        / BPS_DENOMINATOR as u128;
    Ok(share as u64)
}

/// Floor division of the winner pool across winners. Returns the per-winner
/// reward and the undivided remainder; the remainder accrues to the platform
/// fee. Callers take the zero-winner refund path instead of calling this with
/// zero winners.
pub fn reward_share(winner_pool: u64, total_winners: u32) -> Result<(u64, u64)> {
    require!(total_winners > 0, BinPollError::DivisionByZero);
    let reward = winner_pool / total_winners as u64;
    let remainder = winner_pool % total_winners as u64;
    Ok((reward, remainder))
}
