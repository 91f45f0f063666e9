use anchor_lang::prelude::*;

/// Reputation score attested off-chain and written by the configured
/// credibility authority. Polls gate voting on a minimum score.
#[account]
pub struct CredibilityProfile {
    /// The voter this profile belongs to
    pub voter: Pubkey,

    /// Current credibility score
    pub score: u32,

    /// Last time the score was attested
    pub updated_at: i64,

    /// Bump seed for PDA
    pub bump: u8,
}

impl CredibilityProfile {
    pub const LEN: usize = 8 + // discriminator
        32 + // voter
        4 + // score
        8 + // updated_at
        1; // bump
}
