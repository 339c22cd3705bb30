use crate::errors::Error;
use crate::storage::{
    get_outstanding, get_vesting, get_vesting_count, push_beneficiary_vesting, set_outstanding,
    set_vesting, set_vesting_count,
};
use crate::types::VestingEntry;
use soroban_sdk::{Address, Env};

/// Records a purchase as a timelocked entry and returns its id. Ids start at 1.
pub fn create_entry(
    env: &Env,
    phase_id: u32,
    beneficiary: &Address,
    amount: i128,
    unlock_at: u64,
    claimed: bool,
) -> Result<VestingEntry, Error> {
    let id = get_vesting_count(env)
        .checked_add(1)
        .ok_or(Error::Overflow)?;

    let entry = VestingEntry {
        id,
        phase_id,
        beneficiary: beneficiary.clone(),
        amount,
        unlock_at,
        claimed,
    };

    set_vesting(env, &entry);
    set_vesting_count(env, id);
    push_beneficiary_vesting(env, beneficiary, id);
    if !claimed {
        let outstanding = get_outstanding(env)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        set_outstanding(env, outstanding);
    }

    Ok(entry)
}

/// Validates a release request and marks the entry claimed. The caller is
/// responsible for the token transfer, which must come after this returns.
pub fn mark_released(env: &Env, caller: &Address, id: u64) -> Result<VestingEntry, Error> {
    let mut entry = get_vesting(env, id).ok_or(Error::VestingNotFound)?;

    if *caller != entry.beneficiary {
        return Err(Error::NotBeneficiary);
    }
    if entry.claimed {
        return Err(Error::AlreadyClaimed);
    }
    if env.ledger().timestamp() < entry.unlock_at {
        return Err(Error::NotYetUnlocked);
    }

    entry.claimed = true;
    set_vesting(env, &entry);
    set_outstanding(env, get_outstanding(env) - entry.amount);

    Ok(entry)
}

pub fn is_releasable(env: &Env, id: u64) -> bool {
    match get_vesting(env, id) {
        Some(entry) => !entry.claimed && env.ledger().timestamp() >= entry.unlock_at,
        None => false,
    }
}
