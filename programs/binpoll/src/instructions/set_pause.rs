use anchor_lang::prelude::*;

use crate::constants::SEED_CONFIG;
use crate::errors::BinPollError;
use crate::events::PauseToggled;
use crate::state::BinPollConfig;

#[derive(Accounts)]
pub struct SetPause<'info> {
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

pub fn handler(ctx: Context<SetPause>, paused: bool) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.paused = paused;

    emit!(PauseToggled {
        paused,
        admin: ctx.accounts.admin.key(),
    });

    Ok(())
}
