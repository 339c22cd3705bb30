//! Role grants shared by the sale and staking contracts.
//!
//! Grants are stored as explicit `(Role, Address)` entries in the calling
//! contract's persistent storage. There is no role hierarchy: an account either
//! holds a role or it does not.

#![no_std]

use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Env};

const GRANT_TTL_THRESHOLD: u32 = 17_280;
const GRANT_TTL_EXTEND_TO: u32 = 518_400;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AccessControlError {
    MissingRole = 900,
    AdminAlreadySet = 901,
    LastAdmin = 902,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Role {
    DefaultAdmin,
}

#[contracttype]
pub enum AccessKey {
    RoleGrant(Role, Address),
    AdminBootstrapped,
    AdminCount,
}

pub fn has_role(env: &Env, role: Role, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&AccessKey::RoleGrant(role, account.clone()))
        .unwrap_or(false)
}

/// Requires `account` to have signed the invocation and to hold `role`.
pub fn require_role(env: &Env, role: Role, account: &Address) -> Result<(), AccessControlError> {
    account.require_auth();
    if !has_role(env, role, account) {
        return Err(AccessControlError::MissingRole);
    }
    Ok(())
}

/// Grants `DefaultAdmin` to the deployer. Can only run once per contract.
pub fn initialize_admin(env: &Env, admin: &Address) -> Result<(), AccessControlError> {
    if env.storage().instance().has(&AccessKey::AdminBootstrapped) {
        return Err(AccessControlError::AdminAlreadySet);
    }
    env.storage()
        .instance()
        .set(&AccessKey::AdminBootstrapped, &true);
    write_grant(env, Role::DefaultAdmin, admin, true);
    Ok(())
}

pub fn grant_role(
    env: &Env,
    caller: &Address,
    role: Role,
    account: &Address,
) -> Result<(), AccessControlError> {
    require_role(env, Role::DefaultAdmin, caller)?;
    if !has_role(env, role, account) {
        write_grant(env, role, account, true);
        env.events().publish(
            (symbol_short!("RoleGrant"), role),
            (account.clone(), caller.clone()),
        );
    }
    Ok(())
}

pub fn admin_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&AccessKey::AdminCount)
        .unwrap_or(0)
}

/// Removes a grant. An admin may revoke its own grant, which renounces it,
/// as long as another admin remains.
pub fn revoke_role(
    env: &Env,
    caller: &Address,
    role: Role,
    account: &Address,
) -> Result<(), AccessControlError> {
    require_role(env, Role::DefaultAdmin, caller)?;
    if has_role(env, role, account) {
        if role == Role::DefaultAdmin && admin_count(env) <= 1 {
            return Err(AccessControlError::LastAdmin);
        }
        write_grant(env, role, account, false);
        env.events().publish(
            (symbol_short!("RoleRevok"), role),
            (account.clone(), caller.clone()),
        );
    }
    Ok(())
}

fn write_grant(env: &Env, role: Role, account: &Address, granted: bool) {
    let key = AccessKey::RoleGrant(role, account.clone());
    if role == Role::DefaultAdmin {
        let count = admin_count(env);
        let count = if granted { count + 1 } else { count.saturating_sub(1) };
        env.storage().instance().set(&AccessKey::AdminCount, &count);
    }
    if granted {
        env.storage().persistent().set(&key, &true);
        env.storage()
            .persistent()
            .extend_ttl(&key, GRANT_TTL_THRESHOLD, GRANT_TTL_EXTEND_TO);
    } else {
        env.storage().persistent().remove(&key);
    }
}
