use anchor_lang::prelude::*;

use crate::constants::SEED_CONFIG;
use crate::errors::BinPollError;
use crate::events::ConfigUpdated;
use crate::state::BinPollConfig;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_CONFIG],
        bump = config.bump,
        constraint = config.admin == admin.key() @ BinPollError::Unauthorized
    )]
    pub config: Account<'info, BinPollConfig>,
}

#[allow(clippy::too_many_arguments)]
pub fn handler(
    ctx: Context<UpdateConfig>,
    new_admin: Option<Pubkey>,
    new_treasury: Option<Pubkey>,
    new_credibility_authority: Option<Pubkey>,
    new_winner_share_bps: Option<u16>,
    new_platform_fee_bps: Option<u16>,
    new_creator_fee_bps: Option<u16>,
    new_min_creator_deposit: Option<u64>,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let clock = Clock::get()?;

    if let Some(admin) = new_admin {
        config.admin = admin;
    }
    if let Some(treasury) = new_treasury {
        config.treasury = treasury;
    }
    if let Some(authority) = new_credibility_authority {
        config.credibility_authority = authority;
    }
    if let Some(bps) = new_winner_share_bps {
        config.winner_share_bps = bps;
    }
    if let Some(bps) = new_platform_fee_bps {
        config.platform_fee_bps = bps;
    }
    if let Some(bps) = new_creator_fee_bps {
        config.creator_fee_bps = bps;
    }
    if let Some(min_deposit) = new_min_creator_deposit {
        config.min_creator_deposit = min_deposit;
    }

    // A partial bps update must still leave a whole split.
    config.assert_valid_split()?;

    emit!(ConfigUpdated {
        admin: config.admin,
        treasury: config.treasury,
        winner_share_bps: config.winner_share_bps,
        platform_fee_bps: config.platform_fee_bps,
        creator_fee_bps: config.creator_fee_bps,
        min_creator_deposit: config.min_creator_deposit,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
