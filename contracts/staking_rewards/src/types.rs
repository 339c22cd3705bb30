use soroban_sdk::{contracttype, Address};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PoolConfig {
    pub rewards_distribution: Address, // only caller allowed to fund the pool
    pub rewards_token: Address,
    pub staking_token: Address,
}

#[contracttype]
pub enum DataKey {
    Initialized,
    Config,
    RewardsDuration,
    TotalSupply,
    RewardRate,
    RewardPerTokenStored,
    LastUpdateTime,
    PeriodFinish,
    Balance(Address),
    UserRewardPerTokenPaid(Address),
    Rewards(Address),
}
