use soroban_sdk::{contractclient, Address, Env};

/// The slice of the staking pool interface the factory drives. The factory is
/// the pool's rewards distributor, so its own invocation satisfies the pool's
/// auth checks.
#[contractclient(name = "StakingPoolClient")]
pub trait StakingPool {
    fn initialize(
        env: Env,
        rewards_distribution: Address,
        rewards_token: Address,
        staking_token: Address,
        rewards_duration: u64,
    );
    fn notify_reward_amount(env: Env, reward: i128);
    fn set_rewards_duration(env: Env, rewards_duration: u64);
    fn period_finish(env: Env) -> u64;
}
