#![allow(dead_code)]

use anchor_lang::prelude::Pubkey;
use binpoll::state::{BinPollConfig, Poll};

pub const WINNER_SHARE_BPS: u16 = 8_500;
pub const PLATFORM_FEE_BPS: u16 = 1_000;
pub const CREATOR_FEE_BPS: u16 = 500;

pub fn make_config() -> BinPollConfig {
    BinPollConfig {
        admin: Pubkey::new_unique(),
        treasury: Pubkey::new_unique(),
        vote_mint: Pubkey::new_unique(),
        credibility_authority: Pubkey::new_unique(),
        winner_share_bps: WINNER_SHARE_BPS,
        platform_fee_bps: PLATFORM_FEE_BPS,
        creator_fee_bps: CREATOR_FEE_BPS,
        min_creator_deposit: 1_000_000,
        paused: false,
        total_polls: 1,
        total_volume: 0,
        total_fees_collected: 0,
        bump: 255,
    }
}

pub fn make_poll(
    option_count: usize,
    base_price: u64,
    max_votes: u32,
    creator_deposit: u64,
    end_time: i64,
) -> Poll {
    Poll {
        creator: Pubkey::new_unique(),
        poll_id: 0,
        question: "Will it ship this quarter?".to_string(),
        options: (0..option_count).map(|i| format!("Option {}", i)).collect(),
        option_tallies: vec![0; option_count],
        base_price,
        max_votes,
        current_votes: 0,
        creator_deposit,
        voter_pool: 0,
        required_credibility: 0,
        end_time,
        created_at: 0,
        settled: false,
        winning_option: None,
        total_winners: 0,
        reward_per_winner: 0,
        winner_pool: 0,
        platform_fee_amount: 0,
        creator_fee_amount: 0,
        settled_at: 0,
        fees_collected: false,
        bump: 254,
    }
}

/// Push `count` votes for `option_index` through the poll's own fold,
/// charging each at the current dynamic price.
pub fn vote_n_times(poll: &mut Poll, option_index: u8, count: u32) {
    for _ in 0..count {
        let price = binpoll::instructions::utils::vote_price(
            poll.base_price,
            poll.current_votes,
            poll.max_votes,
        )
        .unwrap();
        poll.record_vote(option_index, price).unwrap();
    }
}
