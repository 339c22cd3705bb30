use crate::errors::Error;
use crate::types::{DataKey, PoolConfig};
use soroban_sdk::{Address, Env};

const TTL_THRESHOLD: u32 = 17_280;
const TTL_EXTEND_TO: u32 = 518_400;

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn get_config(env: &Env) -> Result<PoolConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

fn get_instance_u64(env: &Env, key: &DataKey) -> u64 {
    env.storage().instance().get(key).unwrap_or(0)
}

fn get_instance_i128(env: &Env, key: &DataKey) -> i128 {
    env.storage().instance().get(key).unwrap_or(0)
}

pub fn get_rewards_duration(env: &Env) -> u64 {
    get_instance_u64(env, &DataKey::RewardsDuration)
}

pub fn set_rewards_duration(env: &Env, duration: u64) {
    env.storage()
        .instance()
        .set(&DataKey::RewardsDuration, &duration);
}

pub fn get_total_supply(env: &Env) -> i128 {
    get_instance_i128(env, &DataKey::TotalSupply)
}

pub fn set_total_supply(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &amount);
}

pub fn get_reward_rate(env: &Env) -> i128 {
    get_instance_i128(env, &DataKey::RewardRate)
}

pub fn set_reward_rate(env: &Env, rate: i128) {
    env.storage().instance().set(&DataKey::RewardRate, &rate);
}

pub fn get_reward_per_token_stored(env: &Env) -> i128 {
    get_instance_i128(env, &DataKey::RewardPerTokenStored)
}

pub fn set_reward_per_token_stored(env: &Env, value: i128) {
    env.storage()
        .instance()
        .set(&DataKey::RewardPerTokenStored, &value);
}

pub fn get_last_update_time(env: &Env) -> u64 {
    get_instance_u64(env, &DataKey::LastUpdateTime)
}

pub fn set_last_update_time(env: &Env, at: u64) {
    env.storage().instance().set(&DataKey::LastUpdateTime, &at);
}

pub fn get_period_finish(env: &Env) -> u64 {
    get_instance_u64(env, &DataKey::PeriodFinish)
}

pub fn set_period_finish(env: &Env, at: u64) {
    env.storage().instance().set(&DataKey::PeriodFinish, &at);
}

fn get_account_i128(env: &Env, key: &DataKey) -> i128 {
    env.storage().persistent().get(key).unwrap_or(0)
}

fn set_account_i128(env: &Env, key: &DataKey, value: i128) {
    env.storage().persistent().set(key, &value);
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn get_balance(env: &Env, account: &Address) -> i128 {
    get_account_i128(env, &DataKey::Balance(account.clone()))
}

pub fn set_balance(env: &Env, account: &Address, amount: i128) {
    set_account_i128(env, &DataKey::Balance(account.clone()), amount);
}

pub fn get_user_reward_per_token_paid(env: &Env, account: &Address) -> i128 {
    get_account_i128(env, &DataKey::UserRewardPerTokenPaid(account.clone()))
}

pub fn set_user_reward_per_token_paid(env: &Env, account: &Address, value: i128) {
    set_account_i128(env, &DataKey::UserRewardPerTokenPaid(account.clone()), value);
}

pub fn get_rewards(env: &Env, account: &Address) -> i128 {
    get_account_i128(env, &DataKey::Rewards(account.clone()))
}

pub fn set_rewards(env: &Env, account: &Address, amount: i128) {
    set_account_i128(env, &DataKey::Rewards(account.clone()), amount);
}
