use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{SEED_POLL, SEED_POLL_VAULT, SEED_VOTE};
use crate::errors::BinPollError;
use crate::events::RewardClaimed;
use crate::state::{Poll, VoteRecord};

#[derive(Accounts)]
pub struct ClaimReward<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    #[account(
        seeds = [SEED_POLL, poll.poll_id.to_le_bytes().as_ref()],
        bump = poll.bump,
        constraint = poll.settled @ BinPollError::NotSettled
    )]
    pub poll: Account<'info, Poll>,

    #[account(
        mut,
        seeds = [SEED_VOTE, poll.key().as_ref(), voter.key().as_ref()],
        bump = vote_record.bump,
        constraint = vote_record.voter == voter.key() @ BinPollError::Unauthorized,
        constraint = !vote_record.claimed @ BinPollError::AlreadyClaimed
    )]
    pub vote_record: Account<'info, VoteRecord>,

    #[account(
        mut,
        seeds = [SEED_POLL_VAULT, poll.key().as_ref()],
        bump,
        token::authority = poll,
    )]
    pub poll_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = voter_token_account.owner == voter.key() @ BinPollError::InvalidTokenAccountOwner
    )]
    pub voter_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<ClaimReward>) -> Result<()> {
    let poll = &ctx.accounts.poll;
    let vote_record = &mut ctx.accounts.vote_record;
    let clock = Clock::get()?;

    let winning_option = poll.winning_option.ok_or(BinPollError::NotSettled)?;
    require!(
        vote_record.option_index == winning_option,
        BinPollError::NotAWinner
    );

    let reward = poll.reward_per_winner;
    require!(reward > 0, BinPollError::NoRewardsToClaim);
    require!(
        ctx.accounts.poll_vault.amount >= reward,
        BinPollError::InsufficientVaultBalance
    );

    let poll_id_bytes = poll.poll_id.to_le_bytes();
    let seeds = &[SEED_POLL, poll_id_bytes.as_ref(), &[poll.bump]];
    let signer = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.poll_vault.to_account_info(),
        to: ctx.accounts.voter_token_account.to_account_info(),
        authority: poll.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer,
    );
    token::transfer(cpi_ctx, reward)?;

    vote_record.claimed = true;

    emit!(RewardClaimed {
        poll: poll.key(),
        voter: ctx.accounts.voter.key(),
        amount: reward,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
