use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env, Vec};

// Persistent history (phases, purchases, whitelist) is kept alive for the
// lifetime of the sale.
const TTL_THRESHOLD: u32 = 17_280; // ~1 day of ledgers
const TTL_EXTEND_TO: u32 = 518_400; // ~30 days of ledgers

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn get_config(env: &Env) -> Result<SaleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_allocated(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Allocated)
        .unwrap_or(0)
}

pub fn set_allocated(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::Allocated, &amount);
}

/// Sold tokens still waiting in the sale for their release.
pub fn get_outstanding(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Outstanding)
        .unwrap_or(0)
}

pub fn set_outstanding(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::Outstanding, &amount);
}

pub fn get_discount_bps(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::DiscountBps)
        .unwrap_or(0)
}

pub fn set_discount_bps(env: &Env, bps: u32) {
    env.storage().instance().set(&DataKey::DiscountBps, &bps);
}

pub fn get_current_phase_id(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::CurrentPhase)
        .unwrap_or(0)
}

pub fn set_current_phase_id(env: &Env, id: u32) {
    env.storage().instance().set(&DataKey::CurrentPhase, &id);
}

pub fn get_phase(env: &Env, id: u32) -> Option<Phase> {
    let key = DataKey::Phase(id);
    let phase = env.storage().persistent().get(&key);
    if phase.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    phase
}

pub fn set_phase(env: &Env, phase: &Phase) {
    let key = DataKey::Phase(phase.id);
    env.storage().persistent().set(&key, phase);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn get_vesting_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::VestingCount)
        .unwrap_or(0)
}

pub fn set_vesting_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::VestingCount, &count);
}

pub fn get_vesting(env: &Env, id: u64) -> Option<VestingEntry> {
    let key = DataKey::Vesting(id);
    let entry = env.storage().persistent().get(&key);
    if entry.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    entry
}

pub fn set_vesting(env: &Env, entry: &VestingEntry) {
    let key = DataKey::Vesting(entry.id);
    env.storage().persistent().set(&key, entry);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn get_beneficiary_vestings(env: &Env, beneficiary: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::BeneficiaryVestings(beneficiary.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn push_beneficiary_vesting(env: &Env, beneficiary: &Address, id: u64) {
    let key = DataKey::BeneficiaryVestings(beneficiary.clone());
    let mut ids = get_beneficiary_vestings(env, beneficiary);
    ids.push_back(id);
    env.storage().persistent().set(&key, &ids);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn is_whitelisted(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Whitelisted(account.clone()))
        .unwrap_or(false)
}

pub fn set_whitelisted(env: &Env, account: &Address, listed: bool) {
    let key = DataKey::Whitelisted(account.clone());
    if listed {
        env.storage().persistent().set(&key, &true);
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    } else {
        env.storage().persistent().remove(&key);
    }
}
