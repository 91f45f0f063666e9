use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{SEED_CONFIG, SEED_CREDIBILITY, SEED_POLL, SEED_POLL_VAULT, SEED_VOTE};
use crate::errors::BinPollError;
use crate::events::VoteCast;
use crate::instructions::utils::vote_price;
use crate::state::{BinPollConfig, CredibilityProfile, Poll, VoteRecord};

#[derive(Accounts)]
pub struct CastVote<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    #[account(
        seeds = [SEED_CONFIG],
        bump = config.bump,
        constraint = !config.paused @ BinPollError::Paused
    )]
    pub config: Account<'info, BinPollConfig>,

    #[account(
        mut,
        seeds = [SEED_POLL, poll.poll_id.to_le_bytes().as_ref()],
        bump = poll.bump
    )]
    pub poll: Account<'info, Poll>,

    #[account(
        seeds = [SEED_CREDIBILITY, voter.key().as_ref()],
        bump = profile.bump,
        constraint = profile.voter == voter.key() @ BinPollError::Unauthorized
    )]
    pub profile: Account<'info, CredibilityProfile>,

    #[account(
        init_if_needed,
        payer = voter,
        space = VoteRecord::LEN,
        seeds = [SEED_VOTE, poll.key().as_ref(), voter.key().as_ref()],
        bump
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
        constraint = voter_token_account.owner == voter.key() @ BinPollError::InvalidTokenAccountOwner,
        constraint = voter_token_account.mint == config.vote_mint @ BinPollError::InvalidTokenMint
    )]
    pub voter_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CastVote>, option_index: u8, max_price: u64) -> Result<()> {
    let poll = &mut ctx.accounts.poll;
    let vote_record = &mut ctx.accounts.vote_record;
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    // A fresh record has a zero timestamp; anything else means this wallet
    // already voted here.
    require!(vote_record.voted_at == 0, BinPollError::AlreadyVoted);

    require!(
        (option_index as usize) < poll.options.len(),
        BinPollError::InvalidOptionIndex
    );
    poll.assert_votable(now)?;
    require!(
        ctx.accounts.profile.score >= poll.required_credibility,
        BinPollError::InsufficientCredibility
    );

    let price = vote_price(poll.base_price, poll.current_votes, poll.max_votes)?;
    require!(price <= max_price, BinPollError::PriceLimitExceeded);

    // Charge the dynamic price into the poll vault.
    let cpi_accounts = Transfer {
        from: ctx.accounts.voter_token_account.to_account_info(),
        to: ctx.accounts.poll_vault.to_account_info(),
        authority: ctx.accounts.voter.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::transfer(cpi_ctx, price)?;

    poll.record_vote(option_index, price)?;

    vote_record.poll = poll.key();
    vote_record.voter = ctx.accounts.voter.key();
    vote_record.option_index = option_index;
    vote_record.amount_paid = price;
    vote_record.voted_at = now;
    vote_record.claimed = false;
    vote_record.bump = ctx.bumps.vote_record;

    emit!(VoteCast {
        poll: poll.key(),
        voter: vote_record.voter,
        option_index,
        amount_paid: price,
        vote_number: poll.current_votes,
        timestamp: now,
    });

    Ok(())
}
