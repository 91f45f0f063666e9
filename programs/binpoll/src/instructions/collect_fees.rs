use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{SEED_CONFIG, SEED_POLL, SEED_POLL_VAULT};
use crate::errors::BinPollError;
use crate::events::FeesCollected;
use crate::state::{BinPollConfig, Poll};

/// One-shot disbursement of the non-winner shares of a settled pool:
/// platform fee to the treasury, creator fee to the creator, and -- when the
/// poll ended with no winners -- the whole winner share back to the creator.
#[derive(Accounts)]
pub struct CollectFees<'info> {
    pub payer: Signer<'info>,

    #[account(seeds = [SEED_CONFIG], bump = config.bump)]
    pub config: Account<'info, BinPollConfig>,

    #[account(
        mut,
        seeds = [SEED_POLL, poll.poll_id.to_le_bytes().as_ref()],
        bump = poll.bump,
        constraint = poll.settled @ BinPollError::NotSettled,
        constraint = !poll.fees_collected @ BinPollError::FeesAlreadyCollected
    )]
    pub poll: Account<'info, Poll>,

    #[account(
        mut,
        seeds = [SEED_POLL_VAULT, poll.key().as_ref()],
        bump,
        token::authority = poll,
    )]
    pub poll_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = treasury_token_account.owner == config.treasury @ BinPollError::InvalidTokenAccountOwner,
        constraint = treasury_token_account.mint == config.vote_mint @ BinPollError::InvalidTokenMint
    )]
    pub treasury_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = creator_token_account.owner == poll.creator @ BinPollError::InvalidTokenAccountOwner,
        constraint = creator_token_account.mint == config.vote_mint @ BinPollError::InvalidTokenMint
    )]
    pub creator_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<CollectFees>) -> Result<()> {
    let poll = &mut ctx.accounts.poll;
    let clock = Clock::get()?;

    let platform_fee = poll.platform_fee_amount;
    let mut creator_payout = poll.creator_fee_amount;
    if poll.total_winners == 0 {
        // Zero-winner fallback: the uncontested winner share goes home.
        creator_payout = creator_payout
            .checked_add(poll.winner_pool)
            .ok_or(BinPollError::MathOverflow)?;
    }

    let total_out = platform_fee
        .checked_add(creator_payout)
        .ok_or(BinPollError::MathOverflow)?;
    require!(
        ctx.accounts.poll_vault.amount >= total_out,
        BinPollError::InsufficientVaultBalance
    );

    let poll_id_bytes = poll.poll_id.to_le_bytes();
    let seeds = &[SEED_POLL, poll_id_bytes.as_ref(), &[poll.bump]];
    let signer = &[&seeds[..]];

    if platform_fee > 0 {
        let cpi_accounts = Transfer {
            from: ctx.accounts.poll_vault.to_account_info(),
            to: ctx.accounts.treasury_token_account.to_account_info(),
            authority: poll.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
            signer,
        );
        token::transfer(cpi_ctx, platform_fee)?;
    }

    if creator_payout > 0 {
        let cpi_accounts = Transfer {
            from: ctx.accounts.poll_vault.to_account_info(),
            to: ctx.accounts.creator_token_account.to_account_info(),
            authority: poll.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
            signer,
        );
        token::transfer(cpi_ctx, creator_payout)?;
    }

    poll.fees_collected = true;

    emit!(FeesCollected {
        poll: poll.key(),
        platform_fee,
        creator_payout,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
