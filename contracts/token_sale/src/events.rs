use soroban_sdk::{contracttype, symbol_short, Address, Env};

// Field names of `Purchase` and `Claims` are consumed verbatim by indexers.

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Purchase {
    pub _account: Address,
    pub _amount: i128,
    pub _id: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Claims {
    pub _id: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PhaseCreatedEvent {
    pub phase_id: u32,
    pub is_public: bool,
    pub price: i128,
    pub supply: i128,
    pub end_at: u64,
    pub timelock: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PhaseClosedEvent {
    pub phase_id: u32,
    pub unsold: i128,
    pub timestamp: u64,
}

pub fn emit_purchase(env: &Env, account: Address, amount: i128, id: u64) {
    env.events().publish(
        (symbol_short!("Purchase"),),
        Purchase {
            _account: account,
            _amount: amount,
            _id: id,
        },
    );
}

pub fn emit_claims(env: &Env, id: u64) {
    env.events()
        .publish((symbol_short!("Claims"),), Claims { _id: id });
}

pub fn emit_phase_created(env: &Env, event: PhaseCreatedEvent) {
    env.events().publish((symbol_short!("PhaseNew"),), event);
}

pub fn emit_phase_cancelled(env: &Env, phase_id: u32, unsold: i128) {
    env.events().publish(
        (symbol_short!("PhaseCncl"),),
        PhaseClosedEvent {
            phase_id,
            unsold,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_phase_closed(env: &Env, phase_id: u32, unsold: i128) {
    env.events().publish(
        (symbol_short!("PhaseEnd"),),
        PhaseClosedEvent {
            phase_id,
            unsold,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_whitelist_changed(env: &Env, account: Address, listed: bool) {
    let topic = if listed {
        symbol_short!("WListAdd")
    } else {
        symbol_short!("WListDel")
    };
    env.events().publish((topic,), account);
}
