#![no_std]

mod contract;
mod errors;
mod events;
mod rewards;
mod storage;
mod types;


pub use contract::{StakingRewardsContract, StakingRewardsContractClient};
pub use errors::Error;
pub use rewards::REWARD_PRECISION;
pub use types::PoolConfig;
