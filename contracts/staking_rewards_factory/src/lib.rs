#![no_std]

mod contract;
mod errors;
mod events;
mod pool;
mod storage;
mod types;

#[cfg(test)]
mod test;

pub use access_control::Role;
pub use contract::{StakingRewardsFactory, StakingRewardsFactoryClient};
pub use errors::Error;
pub use pool::{StakingPool, StakingPoolClient};
pub use types::{FactoryConfig, StakingPoolConfig};
