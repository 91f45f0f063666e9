use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::constants::{BPS_DENOMINATOR, SEED_CONFIG};
use crate::errors::BinPollError;
use crate::events::PlatformInitialized;
use crate::state::BinPollConfig;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = BinPollConfig::LEN,
        seeds = [SEED_CONFIG],
        bump
    )]
    pub config: Account<'info, BinPollConfig>,

    /// The SPL mint used for deposits, vote payments, and payouts
    pub vote_mint: Account<'info, Mint>,

    /// CHECK: Wallet that will receive platform fees
    pub treasury: UncheckedAccount<'info>,

    /// CHECK: Authority allowed to attest voter credibility scores
    pub credibility_authority: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<Initialize>,
    winner_share_bps: u16,
    platform_fee_bps: u16,
    creator_fee_bps: u16,
    min_creator_deposit: u64,
) -> Result<()> {
    let config = &mut ctx.accounts.config;

    require!(
        winner_share_bps as u64 + platform_fee_bps as u64 + creator_fee_bps as u64
            == BPS_DENOMINATOR,
        BinPollError::InvalidFeeSplit
    );

    config.admin = ctx.accounts.admin.key();
    config.treasury = ctx.accounts.treasury.key();
    config.vote_mint = ctx.accounts.vote_mint.key();
    config.credibility_authority = ctx.accounts.credibility_authority.key();
    config.winner_share_bps = winner_share_bps;
    config.platform_fee_bps = platform_fee_bps;
    config.creator_fee_bps = creator_fee_bps;
    config.min_creator_deposit = min_creator_deposit;
    config.paused = false;
    config.total_polls = 0;
    config.total_volume = 0;
    config.total_fees_collected = 0;
    config.bump = ctx.bumps.config;

    emit!(PlatformInitialized {
        admin: config.admin,
        treasury: config.treasury,
        vote_mint: config.vote_mint,
        winner_share_bps,
        platform_fee_bps,
        creator_fee_bps,
        min_creator_deposit,
    });

    Ok(())
}
