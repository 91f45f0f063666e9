use anchor_lang::prelude::*;

use crate::constants::BPS_DENOMINATOR;
use crate::errors::BinPollError;

#[account]
pub struct BinPollConfig {
    /// Authority that can update platform parameters
    pub admin: Pubkey,

    /// Wallet receiving the platform's cut of settled pools
    pub treasury: Pubkey,

    /// The SPL mint all deposits and vote payments are denominated in
    pub vote_mint: Pubkey,

    /// Authority allowed to write voter credibility scores
    pub credibility_authority: Pubkey,

    /// Share of a settled pool that goes to the winning voters (basis points)
    pub winner_share_bps: u16,

    /// Share of a settled pool that goes to the platform treasury (basis points)
    pub platform_fee_bps: u16,

    /// Share of a settled pool that goes back to the poll creator (basis points)
    pub creator_fee_bps: u16,

    /// Minimum deposit a creator must stake when opening a poll
    pub min_creator_deposit: u64,

    /// Blocks poll creation and voting while true; settlement and claims stay open
    pub paused: bool,

    /// Total number of polls created (also the next poll id)
    pub total_polls: u64,

    /// Sum of all settled pools
    pub total_volume: u64,

    /// Sum of all platform fees taken at settlement
    pub total_fees_collected: u64,

    /// Bump seed for PDA
    pub bump: u8,
}

impl BinPollConfig {
    pub const LEN: usize = 8 + // discriminator
        32 + // admin
        32 + // treasury
        32 + // vote_mint
        32 + // credibility_authority
        2 + // winner_share_bps
        2 + // platform_fee_bps
        2 + // creator_fee_bps
        8 + // min_creator_deposit
        1 + // paused
        8 + // total_polls
        8 + // total_volume
        8 + // total_fees_collected
        1; // bump

    /// The three shares must account for the whole pool, nothing more or less.
    pub fn assert_valid_split(&self) -> Result<()> {
        let sum = self.winner_share_bps as u64
            + self.platform_fee_bps as u64
            + self.creator_fee_bps as u64;
        require!(sum == BPS_DENOMINATOR, BinPollError::InvalidFeeSplit);
        Ok(())
    }
}
