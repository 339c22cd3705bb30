use crate::errors::Error;
use crate::events::{self, RewardAddedEvent};
use crate::rewards;
use crate::storage::*;
use crate::types::PoolConfig;
use soroban_sdk::{contract, contractimpl, contractmeta, log, token, Address, Env};

contractmeta!(
    key = "Description",
    val = "Staking pool paying rewards at a constant rate per period"
);

#[contract]
pub struct StakingRewardsContract;

fn now(env: &Env) -> u64 {
    env.ledger().timestamp()
}

fn current_reward_per_token(env: &Env) -> Result<i128, Error> {
    rewards::reward_per_token(
        get_reward_per_token_stored(env),
        get_last_update_time(env),
        rewards::last_time_reward_applicable(now(env), get_period_finish(env)),
        get_reward_rate(env),
        get_total_supply(env),
    )
}

fn earned_at(env: &Env, account: &Address, reward_per_token: i128) -> Result<i128, Error> {
    rewards::earned(
        get_balance(env, account),
        reward_per_token,
        get_user_reward_per_token_paid(env, account),
        get_rewards(env, account),
    )
}

/// Bring the accumulator up to date and, when given an account, settle what
/// it earned so far. Must run before any balance or rate changes.
fn checkpoint(env: &Env, account: Option<&Address>) -> Result<(), Error> {
    let reward_per_token = current_reward_per_token(env)?;
    set_reward_per_token_stored(env, reward_per_token);
    set_last_update_time(
        env,
        rewards::last_time_reward_applicable(now(env), get_period_finish(env)),
    );

    if let Some(account) = account {
        let earned = earned_at(env, account, reward_per_token)?;
        set_rewards(env, account, earned);
        set_user_reward_per_token_paid(env, account, reward_per_token);
    }
    Ok(())
}

fn withdraw_inner(env: &Env, config: &PoolConfig, staker: &Address, amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::ZeroAmount);
    }
    let balance = get_balance(env, staker);
    if amount > balance {
        return Err(Error::InsufficientStake);
    }

    checkpoint(env, Some(staker))?;
    set_total_supply(env, get_total_supply(env) - amount);
    set_balance(env, staker, balance - amount);

    token::Client::new(env, &config.staking_token).transfer(
        &env.current_contract_address(),
        staker,
        &amount,
    );
    events::emit_withdrawn(env, staker.clone(), amount);
    Ok(())
}

fn get_reward_inner(env: &Env, config: &PoolConfig, staker: &Address) -> Result<i128, Error> {
    checkpoint(env, Some(staker))?;

    let reward = get_rewards(env, staker);
    if reward <= 0 {
        return Ok(0);
    }
    set_rewards(env, staker, 0);

    token::Client::new(env, &config.rewards_token).transfer(
        &env.current_contract_address(),
        staker,
        &reward,
    );
    events::emit_reward_paid(env, staker.clone(), reward);
    Ok(reward)
}

#[contractimpl]
impl StakingRewardsContract {
    /// Bind the pool to its tokens. `rewards_distribution` is the only account
    /// allowed to fund the pool or change its duration.
    pub fn initialize(
        env: Env,
        rewards_distribution: Address,
        rewards_token: Address,
        staking_token: Address,
        rewards_duration: u64,
    ) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        rewards_distribution.require_auth();
        if rewards_duration == 0 {
            return Err(Error::InvalidDuration);
        }

        set_config(
            &env,
            &PoolConfig {
                rewards_distribution,
                rewards_token,
                staking_token,
            },
        );
        set_rewards_duration(&env, rewards_duration);
        set_initialized(&env);
        Ok(())
    }

    pub fn stake(env: Env, staker: Address, amount: i128) -> Result<(), Error> {
        staker.require_auth();
        let config = get_config(&env)?;
        if amount <= 0 {
            return Err(Error::ZeroAmount);
        }

        checkpoint(&env, Some(&staker))?;
        let total = get_total_supply(&env)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        set_total_supply(&env, total);
        set_balance(&env, &staker, get_balance(&env, &staker) + amount);

        token::Client::new(&env, &config.staking_token).transfer(
            &staker,
            &env.current_contract_address(),
            &amount,
        );
        events::emit_staked(&env, staker, amount);
        Ok(())
    }

    pub fn withdraw(env: Env, staker: Address, amount: i128) -> Result<(), Error> {
        staker.require_auth();
        let config = get_config(&env)?;
        withdraw_inner(&env, &config, &staker, amount)
    }

    /// Pay out everything `staker` has earned. Returns the amount paid, zero
    /// when there was nothing to pay.
    pub fn get_reward(env: Env, staker: Address) -> Result<i128, Error> {
        staker.require_auth();
        let config = get_config(&env)?;
        get_reward_inner(&env, &config, &staker)
    }

    /// Withdraw the whole stake and collect rewards in one call.
    pub fn exit(env: Env, staker: Address) -> Result<i128, Error> {
        staker.require_auth();
        let config = get_config(&env)?;
        let balance = get_balance(&env, &staker);
        if balance > 0 {
            withdraw_inner(&env, &config, &staker, balance)?;
        }
        get_reward_inner(&env, &config, &staker)
    }

    /// Start or extend a reward period with `reward` tokens already held by
    /// the pool.
    pub fn notify_reward_amount(env: Env, reward: i128) -> Result<(), Error> {
        let config = get_config(&env)?;
        config.rewards_distribution.require_auth();
        if reward < 0 {
            return Err(Error::InvalidAmount);
        }

        checkpoint(&env, None)?;

        let now = now(&env);
        let duration = get_rewards_duration(&env);
        let period_finish = get_period_finish(&env);
        if now < period_finish {
            log!(&env, "rolling unspent rewards into new period", period_finish - now);
        }
        let rate =
            rewards::next_reward_rate(reward, now, period_finish, get_reward_rate(&env), duration)?;

        // Staked principal is not reward budget when both tokens are the same.
        let mut available =
            token::Client::new(&env, &config.rewards_token).balance(&env.current_contract_address());
        if config.rewards_token == config.staking_token {
            available -= get_total_supply(&env);
        }
        if rate > available / duration as i128 {
            return Err(Error::RewardTooHigh);
        }

        let finish = now.checked_add(duration).ok_or(Error::Overflow)?;
        set_reward_rate(&env, rate);
        set_last_update_time(&env, now);
        set_period_finish(&env, finish);

        events::emit_reward_added(
            &env,
            RewardAddedEvent {
                reward,
                reward_rate: rate,
                period_finish: finish,
            },
        );
        Ok(())
    }

    /// Change the length of the next period. Not allowed while one is running.
    pub fn set_rewards_duration(env: Env, rewards_duration: u64) -> Result<(), Error> {
        let config = get_config(&env)?;
        config.rewards_distribution.require_auth();
        if now(&env) < get_period_finish(&env) {
            return Err(Error::PeriodAlreadyStarted);
        }
        if rewards_duration == 0 {
            return Err(Error::InvalidDuration);
        }
        set_rewards_duration(&env, rewards_duration);
        events::emit_duration_updated(&env, rewards_duration);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    pub fn earned(env: Env, account: Address) -> Result<i128, Error> {
        earned_at(&env, &account, current_reward_per_token(&env)?)
    }

    pub fn reward_per_token(env: Env) -> Result<i128, Error> {
        current_reward_per_token(&env)
    }

    pub fn last_time_reward_applicable(env: Env) -> u64 {
        rewards::last_time_reward_applicable(now(&env), get_period_finish(&env))
    }

    pub fn get_reward_for_duration(env: Env) -> Result<i128, Error> {
        get_reward_rate(&env)
            .checked_mul(get_rewards_duration(&env) as i128)
            .ok_or(Error::Overflow)
    }

    pub fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    pub fn balance_of(env: Env, account: Address) -> i128 {
        get_balance(&env, &account)
    }

    pub fn reward_rate(env: Env) -> i128 {
        get_reward_rate(&env)
    }

    pub fn period_finish(env: Env) -> u64 {
        get_period_finish(&env)
    }

    pub fn rewards_duration(env: Env) -> u64 {
        get_rewards_duration(&env)
    }

    pub fn get_config(env: Env) -> Result<PoolConfig, Error> {
        get_config(&env)
    }
}
