use soroban_sdk::{contracttype, Address};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FactoryConfig {
    pub rewards_token: Address,
    /// No pool is funded before this timestamp.
    pub staking_rewards_genesis: u64,
}

/// Per staking token bookkeeping. `reward_amount` is what the next
/// notification will push; it drops to zero once pushed.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct StakingPoolConfig {
    pub staking_rewards: Address,
    pub reward_amount: i128,
    pub duration: u64,
    pub period_start: u64,
    pub period_finish: u64,
}

#[contracttype]
pub enum DataKey {
    Initialized,
    Config,
    StakingTokens,
    PoolInfo(Address),
}
