pub const SEED_CONFIG: &[u8] = b"config";
pub const SEED_POLL: &[u8] = b"poll";
pub const SEED_POLL_VAULT: &[u8] = b"poll_vault";
pub const SEED_VOTE: &[u8] = b"vote";
pub const SEED_CREDIBILITY: &[u8] = b"credibility";

/// Basis-point denominator used by every fee-split computation.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// The vote price climbs from 1x base price toward (1 + PRICE_CURVE_SLOPE)x
/// as a poll fills up.
pub const PRICE_CURVE_SLOPE: u64 = 4;

pub const MIN_POLL_OPTIONS: usize = 2;
pub const MAX_POLL_OPTIONS: usize = 5;
pub const MAX_QUESTION_LEN: usize = 200;
pub const MAX_OPTION_LEN: usize = 50;
