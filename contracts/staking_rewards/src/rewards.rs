//! Reward-per-token accumulator math.
//!
//! `reward_per_token` grows by `elapsed * rate * REWARD_PRECISION / total_staked`
//! and never decreases. An account's share is the difference between the
//! current accumulator and the value it last checkpointed at, times its stake.

use crate::errors::Error;

/// Fixed-point scale of the accumulator.
pub const REWARD_PRECISION: i128 = 1_000_000_000_000;

pub fn last_time_reward_applicable(now: u64, period_finish: u64) -> u64 {
    now.min(period_finish)
}

pub fn reward_per_token(
    stored: i128,
    last_update: u64,
    applicable: u64,
    reward_rate: i128,
    total_staked: i128,
) -> Result<i128, Error> {
    if total_staked <= 0 {
        return Ok(stored);
    }
    let elapsed = applicable.saturating_sub(last_update) as i128;
    let increment = elapsed
        .checked_mul(reward_rate)
        .and_then(|v| v.checked_mul(REWARD_PRECISION))
        .ok_or(Error::Overflow)?
        / total_staked;
    stored.checked_add(increment).ok_or(Error::Overflow)
}

pub fn earned(
    balance: i128,
    reward_per_token: i128,
    user_reward_per_token_paid: i128,
    rewards: i128,
) -> Result<i128, Error> {
    let delta = reward_per_token
        .checked_sub(user_reward_per_token_paid)
        .ok_or(Error::Overflow)?;
    let accrued = balance.checked_mul(delta).ok_or(Error::Overflow)? / REWARD_PRECISION;
    accrued.checked_add(rewards).ok_or(Error::Overflow)
}

/// Rate for a new reward amount. Whatever is left of a running period is
/// rolled into the new one so nothing is lost or paid twice.
pub fn next_reward_rate(
    reward: i128,
    now: u64,
    period_finish: u64,
    current_rate: i128,
    duration: u64,
) -> Result<i128, Error> {
    if duration == 0 {
        return Err(Error::InvalidDuration);
    }
    let total = if now >= period_finish {
        reward
    } else {
        let remaining = (period_finish - now) as i128;
        let leftover = remaining.checked_mul(current_rate).ok_or(Error::Overflow)?;
        reward.checked_add(leftover).ok_or(Error::Overflow)?
    };
    Ok(total / duration as i128)
}
