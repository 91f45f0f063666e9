use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_error::ProgramError;

use crate::constants::SEED_CONFIG;
use crate::events::PollSettled;
use crate::instructions::settle_poll::apply_settlement;
use crate::state::{BinPollConfig, Poll};

/// One tick of the settlement crank. The off-chain scheduler passes every
/// poll it observed as ended-and-unsettled via `remaining_accounts`; each is
/// attempted independently. Already-settled polls are skipped, so overlapping
/// ticks and restarts are no-ops, and one bad poll never aborts the batch --
/// it stays eligible and is retried on the next tick.
#[derive(Accounts)]
pub struct BatchSettle<'info> {
    pub payer: Signer<'info>,

    #[account(mut, seeds = [SEED_CONFIG], bump = config.bump)]
    pub config: Account<'info, BinPollConfig>,
}

pub fn handler<'info>(ctx: Context<'_, '_, '_, 'info, BatchSettle<'info>>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let config = &mut ctx.accounts.config;

    let mut settled = 0u32;
    let mut skipped = 0u32;

    for poll_acc_info in ctx.remaining_accounts.iter() {
        if poll_acc_info.owner != &crate::ID {
            msg!("skipping {}: not owned by this program", poll_acc_info.key);
            skipped += 1;
            continue;
        }

        let mut poll_data = poll_acc_info.try_borrow_mut_data()?;
        let mut poll = match Poll::try_deserialize(&mut &poll_data[..]) {
            Ok(poll) => poll,
            Err(_) => {
                msg!("skipping {}: not a poll account", poll_acc_info.key);
                skipped += 1;
                continue;
            }
        };

        if poll.settled {
            skipped += 1;
            continue;
        }
        if !poll.is_ended(now) {
            msg!("skipping poll {}: still active", poll.poll_id);
            skipped += 1;
            continue;
        }

        match apply_settlement(&mut poll, config, now) {
            Ok(()) => {
                let mut serialized: Vec<u8> = Vec::new();
                poll.try_serialize(&mut serialized)?;
                if serialized.len() > poll_data.len() {
                    return Err(ProgramError::AccountDataTooSmall.into());
                }
                poll_data[..serialized.len()].copy_from_slice(&serialized);

                emit!(PollSettled {
                    poll: *poll_acc_info.key,
                    poll_id: poll.poll_id,
                    winning_option: poll.winning_option.unwrap_or(0),
                    total_winners: poll.total_winners,
                    reward_per_winner: poll.reward_per_winner,
                    winner_pool: poll.winner_pool,
                    platform_fee_amount: poll.platform_fee_amount,
                    creator_fee_amount: poll.creator_fee_amount,
                    total_pool: poll.total_pool()?,
                    timestamp: now,
                });
                settled += 1;
            }
            Err(err) => {
                msg!("failed to settle poll {}: {}", poll.poll_id, err);
                skipped += 1;
            }
        }
    }

    msg!("batch settle tick: {} settled, {} skipped", settled, skipped);

    Ok(())
}
