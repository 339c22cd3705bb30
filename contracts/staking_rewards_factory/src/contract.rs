use crate::errors::Error;
use crate::events::{self, PoolConfiguredEvent, RewardsNotifiedEvent};
use crate::pool::StakingPoolClient;
use crate::storage::*;
use crate::types::*;
use access_control::{self as acl, Role};
use soroban_sdk::{contract, contractimpl, contractmeta, log, token, Address, Env, Vec};

contractmeta!(
    key = "Description",
    val = "Configures and funds one staking rewards pool per staking token"
);

#[contract]
pub struct StakingRewardsFactory;

fn require_genesis(env: &Env, config: &FactoryConfig) -> Result<(), Error> {
    if env.ledger().timestamp() < config.staking_rewards_genesis {
        return Err(Error::NotReady);
    }
    Ok(())
}

fn validate_terms(reward_amount: i128, rewards_duration: u64) -> Result<(), Error> {
    if reward_amount < 0 || rewards_duration == 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}

/// Push the pending reward of one pool. Zero pending is a no-op so a
/// batch notification can walk every pool.
fn notify_pool(env: &Env, config: &FactoryConfig, staking_token: &Address) -> Result<(), Error> {
    let mut info = get_pool_info(env, staking_token).ok_or(Error::PoolNotFound)?;
    if info.reward_amount <= 0 {
        log!(env, "no pending reward, skipping pool", staking_token.clone());
        return Ok(());
    }

    let amount = info.reward_amount;
    let now = env.ledger().timestamp();
    info.reward_amount = 0;
    info.period_start = now;
    info.period_finish = now.checked_add(info.duration).ok_or(Error::Overflow)?;
    set_pool_info(env, staking_token, &info);

    token::Client::new(env, &config.rewards_token).transfer(
        &env.current_contract_address(),
        &info.staking_rewards,
        &amount,
    );
    StakingPoolClient::new(env, &info.staking_rewards).notify_reward_amount(&amount);

    events::emit_rewards_notified(
        env,
        RewardsNotifiedEvent {
            staking_token: staking_token.clone(),
            reward_amount: amount,
            period_start: info.period_start,
            period_finish: info.period_finish,
        },
    );
    Ok(())
}

#[contractimpl]
impl StakingRewardsFactory {
    /// `admin` receives the default admin role. Pools can only be funded from
    /// `staking_rewards_genesis` on.
    pub fn initialize(
        env: Env,
        admin: Address,
        rewards_token: Address,
        staking_rewards_genesis: u64,
    ) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        acl::initialize_admin(&env, &admin)?;
        set_config(
            &env,
            &FactoryConfig {
                rewards_token,
                staking_rewards_genesis,
            },
        );
        set_initialized(&env);
        Ok(())
    }

    pub fn grant_role(env: Env, caller: Address, role: Role, account: Address) -> Result<(), Error> {
        acl::grant_role(&env, &caller, role, &account)?;
        Ok(())
    }

    pub fn revoke_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), Error> {
        acl::revoke_role(&env, &caller, role, &account)?;
        Ok(())
    }

    pub fn has_role(env: Env, role: Role, account: Address) -> bool {
        acl::has_role(&env, role, &account)
    }

    /// Take ownership of a freshly installed pool for `staking_token`. The
    /// factory becomes the pool's rewards distributor.
    pub fn deploy(
        env: Env,
        caller: Address,
        staking_token: Address,
        reward_amount: i128,
        rewards_duration: u64,
        pool: Address,
    ) -> Result<(), Error> {
        acl::require_role(&env, Role::DefaultAdmin, &caller)?;
        let config = get_config(&env)?;
        if get_pool_info(&env, &staking_token).is_some() {
            return Err(Error::PoolAlreadyExists);
        }
        validate_terms(reward_amount, rewards_duration)?;

        let init = StakingPoolClient::new(&env, &pool).try_initialize(
            &env.current_contract_address(),
            &config.rewards_token,
            &staking_token,
            &rewards_duration,
        );
        if !matches!(init, Ok(Ok(()))) {
            return Err(Error::PoolInitFailed);
        }

        set_pool_info(
            &env,
            &staking_token,
            &StakingPoolConfig {
                staking_rewards: pool.clone(),
                reward_amount,
                duration: rewards_duration,
                period_start: 0,
                period_finish: 0,
            },
        );
        push_staking_token(&env, &staking_token);

        events::emit_pool_deployed(
            &env,
            PoolConfiguredEvent {
                staking_token,
                staking_rewards: pool,
                reward_amount,
                duration: rewards_duration,
            },
        );
        Ok(())
    }

    /// Change the pending reward and duration of a pool. Only allowed while
    /// the pool has no running period.
    pub fn update(
        env: Env,
        caller: Address,
        staking_token: Address,
        reward_amount: i128,
        rewards_duration: u64,
    ) -> Result<(), Error> {
        acl::require_role(&env, Role::DefaultAdmin, &caller)?;
        let mut info = get_pool_info(&env, &staking_token).ok_or(Error::PoolNotFound)?;
        validate_terms(reward_amount, rewards_duration)?;

        let pool = StakingPoolClient::new(&env, &info.staking_rewards);
        if env.ledger().timestamp() < pool.period_finish() {
            return Err(Error::PeriodAlreadyStarted);
        }

        info.reward_amount = reward_amount;
        info.duration = rewards_duration;
        set_pool_info(&env, &staking_token, &info);
        pool.set_rewards_duration(&rewards_duration);

        events::emit_pool_updated(
            &env,
            PoolConfiguredEvent {
                staking_token,
                staking_rewards: info.staking_rewards,
                reward_amount,
                duration: rewards_duration,
            },
        );
        Ok(())
    }

    /// Fund every pool with its pending reward. Anyone may call this once
    /// genesis has passed.
    pub fn notify_reward_amounts(env: Env) -> Result<(), Error> {
        let config = get_config(&env)?;
        require_genesis(&env, &config)?;
        let tokens = get_staking_tokens(&env);
        if tokens.is_empty() {
            return Err(Error::NoPools);
        }
        for staking_token in tokens.iter() {
            notify_pool(&env, &config, &staking_token)?;
        }
        Ok(())
    }

    pub fn notify_reward_amount(env: Env, staking_token: Address) -> Result<(), Error> {
        let config = get_config(&env)?;
        require_genesis(&env, &config)?;
        notify_pool(&env, &config, &staking_token)
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    pub fn staking_rewards_info(env: Env, staking_token: Address) -> Result<StakingPoolConfig, Error> {
        get_pool_info(&env, &staking_token).ok_or(Error::PoolNotFound)
    }

    pub fn staking_tokens(env: Env) -> Vec<Address> {
        get_staking_tokens(&env)
    }

    pub fn get_config(env: Env) -> Result<FactoryConfig, Error> {
        get_config(&env)
    }
}
