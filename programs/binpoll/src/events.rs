use anchor_lang::prelude::*;

#[event]
pub struct PlatformInitialized {
    pub admin: Pubkey,
    pub treasury: Pubkey,
    pub vote_mint: Pubkey,
    pub winner_share_bps: u16,
    pub platform_fee_bps: u16,
    pub creator_fee_bps: u16,
    pub min_creator_deposit: u64,
}

#[event]
pub struct ConfigUpdated {
    pub admin: Pubkey,
    pub treasury: Pubkey,
    pub winner_share_bps: u16,
    pub platform_fee_bps: u16,
    pub creator_fee_bps: u16,
    pub min_creator_deposit: u64,
    pub timestamp: i64,
}

#[event]
pub struct PauseToggled {
    pub paused: bool,
    pub admin: Pubkey,
}

#[event]
pub struct CredibilityUpdated {
    pub voter: Pubkey,
    pub score: u32,
    pub timestamp: i64,
}

#[event]
pub struct PollCreated {
    pub poll: Pubkey,
    pub poll_id: u64,
    pub creator: Pubkey,
    pub option_count: u8,
    pub base_price: u64,
    pub max_votes: u32,
    pub required_credibility: u32,
    pub end_time: i64,
    pub creator_deposit: u64,
    pub timestamp: i64,
}

#[event]
pub struct VoteCast {
    pub poll: Pubkey,
    pub voter: Pubkey,
    pub option_index: u8,
    pub amount_paid: u64,
    pub vote_number: u32,
    pub timestamp: i64,
}

#[event]
pub struct PollSettled {
    pub poll: Pubkey,
    pub poll_id: u64,
    pub winning_option: u8,
    pub total_winners: u32,
    pub reward_per_winner: u64,
    pub winner_pool: u64,
    pub platform_fee_amount: u64,
    pub creator_fee_amount: u64,
    pub total_pool: u64,
    pub timestamp: i64,
}

#[event]
pub struct RewardClaimed {
    pub poll: Pubkey,
    pub voter: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct FeesCollected {
    pub poll: Pubkey,
    pub platform_fee: u64,
    pub creator_payout: u64,
    pub timestamp: i64,
}
