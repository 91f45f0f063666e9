pub mod config;
pub mod credibility;
pub mod poll;
pub mod vote;

pub use config::*;
pub use credibility::*;
pub use poll::*;
pub use vote::*;
