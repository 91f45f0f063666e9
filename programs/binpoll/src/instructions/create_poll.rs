use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{
    MAX_OPTION_LEN, MAX_POLL_OPTIONS, MAX_QUESTION_LEN, MIN_POLL_OPTIONS, SEED_CONFIG, SEED_POLL,
    SEED_POLL_VAULT,
};
use crate::errors::BinPollError;
use crate::events::PollCreated;
use crate::state::{BinPollConfig, Poll};

#[derive(Accounts)]
pub struct CreatePoll<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_CONFIG],
        bump = config.bump,
        constraint = !config.paused @ BinPollError::Paused
    )]
    pub config: Account<'info, BinPollConfig>,

    #[account(address = config.vote_mint @ BinPollError::InvalidTokenMint)]
    pub vote_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = creator,
        space = Poll::LEN,
        seeds = [SEED_POLL, config.total_polls.to_le_bytes().as_ref()],
        bump
    )]
    pub poll: Account<'info, Poll>,

    /// Vault holding the creator deposit and all vote payments
    #[account(
        init,
        payer = creator,
        seeds = [SEED_POLL_VAULT, poll.key().as_ref()],
        bump,
        token::mint = vote_mint,
        token::authority = poll,
    )]
    pub poll_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = creator_token_account.owner == creator.key() @ BinPollError::InvalidTokenAccountOwner,
        constraint = creator_token_account.mint == config.vote_mint @ BinPollError::InvalidTokenMint
    )]
    pub creator_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[allow(clippy::too_many_arguments)]
pub fn handler(
    ctx: Context<CreatePoll>,
    question: String,
    options: Vec<String>,
    base_price: u64,
    max_votes: u32,
    required_credibility: u32,
    end_time: i64,
    creator_deposit: u64,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let clock = Clock::get()?;

    // Validate everything before any state is touched.
    require!(
        question.len() <= MAX_QUESTION_LEN,
        BinPollError::QuestionTooLong
    );
    require!(
        options.len() >= MIN_POLL_OPTIONS && options.len() <= MAX_POLL_OPTIONS,
        BinPollError::InvalidOptionCount
    );
    for option in &options {
        require!(option.len() <= MAX_OPTION_LEN, BinPollError::OptionLabelTooLong);
    }
    require!(base_price > 0, BinPollError::InvalidBasePrice);
    require!(max_votes > 0, BinPollError::InvalidMaxVotes);
    require!(end_time > clock.unix_timestamp, BinPollError::InvalidEndTime);
    require!(
        creator_deposit >= config.min_creator_deposit,
        BinPollError::InsufficientDeposit
    );

    // Stake the creator deposit into the poll vault.
    let cpi_accounts = Transfer {
        from: ctx.accounts.creator_token_account.to_account_info(),
        to: ctx.accounts.poll_vault.to_account_info(),
        authority: ctx.accounts.creator.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::transfer(cpi_ctx, creator_deposit)?;

    let poll = &mut ctx.accounts.poll;
    let option_count = options.len();

    poll.creator = ctx.accounts.creator.key();
    poll.poll_id = config.total_polls;
    poll.question = question;
    poll.option_tallies = vec![0; option_count];
    poll.options = options;
    poll.base_price = base_price;
    poll.max_votes = max_votes;
    poll.current_votes = 0;
    poll.creator_deposit = creator_deposit;
    poll.voter_pool = 0;
    poll.required_credibility = required_credibility;
    poll.end_time = end_time;
    poll.created_at = clock.unix_timestamp;
    poll.settled = false;
    poll.winning_option = None;
    poll.total_winners = 0;
    poll.reward_per_winner = 0;
    poll.winner_pool = 0;
    poll.platform_fee_amount = 0;
    poll.creator_fee_amount = 0;
    poll.settled_at = 0;
    poll.fees_collected = false;
    poll.bump = ctx.bumps.poll;

    config.total_polls = config
        .total_polls
        .checked_add(1)
        .ok_or(BinPollError::MathOverflow)?;

    emit!(PollCreated {
        poll: poll.key(),
        poll_id: poll.poll_id,
        creator: poll.creator,
        option_count: option_count as u8,
        base_price,
        max_votes,
        required_credibility,
        end_time,
        creator_deposit,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
