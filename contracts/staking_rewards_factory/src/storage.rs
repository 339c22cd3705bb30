use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env, Vec};

const TTL_THRESHOLD: u32 = 17_280;
const TTL_EXTEND_TO: u32 = 518_400;

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn get_config(env: &Env) -> Result<FactoryConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &FactoryConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_staking_tokens(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::StakingTokens)
        .unwrap_or(Vec::new(env))
}

pub fn push_staking_token(env: &Env, token: &Address) {
    let mut tokens = get_staking_tokens(env);
    tokens.push_back(token.clone());
    env.storage()
        .instance()
        .set(&DataKey::StakingTokens, &tokens);
}

pub fn get_pool_info(env: &Env, staking_token: &Address) -> Option<StakingPoolConfig> {
    env.storage()
        .persistent()
        .get(&DataKey::PoolInfo(staking_token.clone()))
}

pub fn set_pool_info(env: &Env, staking_token: &Address, info: &StakingPoolConfig) {
    let key = DataKey::PoolInfo(staking_token.clone());
    env.storage().persistent().set(&key, info);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
