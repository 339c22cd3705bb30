use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PoolConfiguredEvent {
    pub staking_token: Address,
    pub staking_rewards: Address,
    pub reward_amount: i128,
    pub duration: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RewardsNotifiedEvent {
    pub staking_token: Address,
    pub reward_amount: i128,
    pub period_start: u64,
    pub period_finish: u64,
}

pub fn emit_pool_deployed(env: &Env, event: PoolConfiguredEvent) {
    env.events().publish((symbol_short!("PoolNew"),), event);
}

pub fn emit_pool_updated(env: &Env, event: PoolConfiguredEvent) {
    env.events().publish((symbol_short!("PoolUpd"),), event);
}

pub fn emit_rewards_notified(env: &Env, event: RewardsNotifiedEvent) {
    env.events().publish((symbol_short!("Notified"),), event);
}
