pub mod batch_settle;
pub mod cast_vote;
pub mod claim_reward;
pub mod collect_fees;
pub mod create_poll;
pub mod initialize;
pub mod quote_vote_price;
pub mod set_pause;
pub mod settle_poll;
pub mod update_config;
pub mod update_credibility;
pub mod utils;

pub use batch_settle::*;
pub use cast_vote::*;
pub use claim_reward::*;
pub use collect_fees::*;
pub use create_poll::*;
pub use initialize::*;
pub use quote_vote_price::*;
pub use set_pause::*;
pub use settle_poll::*;
pub use update_config::*;
pub use update_credibility::*;
