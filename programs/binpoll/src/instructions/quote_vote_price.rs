use anchor_lang::prelude::*;

use crate::errors::BinPollError;
use crate::instructions::utils::vote_price;
use crate::state::Poll;

/// Read-only price preview. Calls the same pricing function as `cast_vote`,
/// so what a client displays is exactly what the next vote will be charged.
#[derive(Accounts)]
pub struct QuoteVotePrice<'info> {
    pub poll: Account<'info, Poll>,
}

pub fn handler(ctx: Context<QuoteVotePrice>) -> Result<u64> {
    let poll = &ctx.accounts.poll;

    require!(!poll.is_full(), BinPollError::PollFull);

    let price = vote_price(poll.base_price, poll.current_votes, poll.max_votes)?;
    msg!(
        "Poll {} vote {} of {}: price {}",
        poll.poll_id,
        poll.current_votes + 1,
        poll.max_votes,
        price
    );

    Ok(price)
}
