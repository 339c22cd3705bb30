use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RewardAddedEvent {
    pub reward: i128,
    pub reward_rate: i128,
    pub period_finish: u64,
}

pub fn emit_staked(env: &Env, user: Address, amount: i128) {
    env.events().publish((symbol_short!("Staked"), user), amount);
}

pub fn emit_withdrawn(env: &Env, user: Address, amount: i128) {
    env.events().publish((symbol_short!("Withdrawn"), user), amount);
}

pub fn emit_reward_paid(env: &Env, user: Address, reward: i128) {
    env.events().publish((symbol_short!("RwdPaid"), user), reward);
}

pub fn emit_reward_added(env: &Env, event: RewardAddedEvent) {
    env.events().publish((symbol_short!("RwdAdded"),), event);
}

pub fn emit_duration_updated(env: &Env, duration: u64) {
    env.events().publish((symbol_short!("DurUpd"),), duration);
}
