use anchor_lang::prelude::*;

use crate::constants::{SEED_CONFIG, SEED_CREDIBILITY};
use crate::errors::BinPollError;
use crate::events::CredibilityUpdated;
use crate::state::{BinPollConfig, CredibilityProfile};

#[derive(Accounts)]
pub struct UpdateCredibility<'info> {
    #[account(mut)]
    pub attestor: Signer<'info>,

    #[account(
        seeds = [SEED_CONFIG],
        bump = config.bump,
        constraint = config.credibility_authority == attestor.key() @ BinPollError::UnauthorizedAttestor
    )]
    pub config: Account<'info, BinPollConfig>,

    /// CHECK: The voter whose profile is being attested
    pub voter: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = attestor,
        space = CredibilityProfile::LEN,
        seeds = [SEED_CREDIBILITY, voter.key().as_ref()],
        bump
    )]
    pub profile: Account<'info, CredibilityProfile>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<UpdateCredibility>, score: u32) -> Result<()> {
    let profile = &mut ctx.accounts.profile;
    let clock = Clock::get()?;

    profile.voter = ctx.accounts.voter.key();
    profile.score = score;
    profile.updated_at = clock.unix_timestamp;
    profile.bump = ctx.bumps.profile;

    emit!(CredibilityUpdated {
        voter: profile.voter,
        score,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
