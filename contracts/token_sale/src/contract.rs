use crate::errors::Error;
use crate::events::{self, PhaseCreatedEvent};
use crate::price;
use crate::storage::*;
use crate::types::*;
use crate::vesting;
use access_control::{self as acl, Role};
use soroban_sdk::{contract, contractimpl, contractmeta, log, token, Address, Env, Vec};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Phased token sale with timelocked release"
);

#[contract]
pub struct TokenSaleContract;

/// The sale must hold every sold-but-unreleased token plus `extra`.
fn require_funded(env: &Env, config: &SaleConfig, extra: i128) -> Result<(), Error> {
    let needed = get_outstanding(env)
        .checked_add(extra)
        .ok_or(Error::Overflow)?;
    let held = token::Client::new(env, &config.token).balance(&env.current_contract_address());
    if held < needed {
        return Err(Error::SaleUnderfunded);
    }
    Ok(())
}

#[contractimpl]
impl TokenSaleContract {
    /// Initialize the sale. Runs exactly once; `admin` receives the default
    /// admin role.
    pub fn initialize(env: Env, admin: Address, config: SaleConfig) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        if config.max_supply <= 0 {
            return Err(Error::InvalidAmount);
        }

        acl::initialize_admin(&env, &admin)?;
        set_config(&env, &config);
        set_allocated(&env, 0);
        set_current_phase_id(&env, 0);
        set_vesting_count(&env, 0);
        set_initialized(&env);

        Ok(())
    }

    // ------------------------------------------------------------------
    // Roles
    // ------------------------------------------------------------------

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

    // ------------------------------------------------------------------
    // Phases
    // ------------------------------------------------------------------

    /// Open a new sale phase. The previous phase must be over, either flagged
    /// or past its end time.
    pub fn create_phase(
        env: Env,
        caller: Address,
        is_public: bool,
        minimum_entry: i128,
        price: i128,
        end_at: u64,
        supply: i128,
        timelock: u64,
    ) -> Result<u32, Error> {
        acl::require_role(&env, Role::DefaultAdmin, &caller)?;
        let config = get_config(&env)?;
        let now = get_ledger_timestamp(&env);

        let current_id = get_current_phase_id(&env);
        if let Some(mut current) = get_phase(&env, current_id) {
            if !current.over {
                if now <= current.end_at {
                    return Err(Error::PhaseNotOver);
                }
                current.over = true;
                set_phase(&env, &current);
                events::emit_phase_closed(&env, current.id, current.supply);
            }
        }

        if end_at <= now {
            return Err(Error::InvalidEndTime);
        }
        if supply <= 0 || price <= 0 || minimum_entry < 0 {
            return Err(Error::InvalidAmount);
        }

        let allocated = get_allocated(&env);
        let remaining = config
            .max_supply
            .checked_sub(allocated)
            .ok_or(Error::Overflow)?;
        if supply > remaining {
            return Err(Error::InsufficientSupply);
        }
        require_funded(&env, &config, supply)?;

        let id = current_id.checked_add(1).ok_or(Error::Overflow)?;
        let phase = Phase {
            id,
            is_public,
            minimum_entry,
            price,
            end_at,
            supply,
            original_supply: supply,
            timelock,
            over: false,
        };

        set_phase(&env, &phase);
        set_allocated(&env, allocated + supply);
        set_current_phase_id(&env, id);

        events::emit_phase_created(
            &env,
            PhaseCreatedEvent {
                phase_id: id,
                is_public,
                price,
                supply,
                end_at,
                timelock,
            },
        );

        Ok(id)
    }

    /// Close the current phase immediately, whatever its remaining supply or
    /// time. Cancelling a phase that is already over is rejected.
    pub fn cancel_phase(env: Env, caller: Address) -> Result<(), Error> {
        acl::require_role(&env, Role::DefaultAdmin, &caller)?;
        get_config(&env)?;

        let mut phase = get_phase(&env, get_current_phase_id(&env)).ok_or(Error::NoActivePhase)?;
        if phase.over {
            return Err(Error::NoActivePhase);
        }

        phase.over = true;
        set_phase(&env, &phase);
        events::emit_phase_cancelled(&env, phase.id, phase.supply);

        Ok(())
    }

    /// Persist the `over` flag of a phase whose end time has passed. Anyone
    /// may call it.
    pub fn close_expired_phase(env: Env) -> Result<u32, Error> {
        get_config(&env)?;
        let now = get_ledger_timestamp(&env);

        let mut phase = get_phase(&env, get_current_phase_id(&env)).ok_or(Error::NoActivePhase)?;
        if phase.over {
            return Err(Error::NoActivePhase);
        }
        if now <= phase.end_at {
            return Err(Error::PhaseNotOver);
        }

        phase.over = true;
        set_phase(&env, &phase);
        events::emit_phase_closed(&env, phase.id, phase.supply);

        Ok(phase.id)
    }

    // ------------------------------------------------------------------
    // Whitelist
    // ------------------------------------------------------------------

    pub fn add_to_whitelist(env: Env, caller: Address, accounts: Vec<Address>) -> Result<(), Error> {
        acl::require_role(&env, Role::DefaultAdmin, &caller)?;
        for account in accounts.iter() {
            if !is_whitelisted(&env, &account) {
                set_whitelisted(&env, &account, true);
                events::emit_whitelist_changed(&env, account, true);
            }
        }
        Ok(())
    }

    pub fn remove_from_whitelist(
        env: Env,
        caller: Address,
        accounts: Vec<Address>,
    ) -> Result<(), Error> {
        acl::require_role(&env, Role::DefaultAdmin, &caller)?;
        for account in accounts.iter() {
            if is_whitelisted(&env, &account) {
                set_whitelisted(&env, &account, false);
                events::emit_whitelist_changed(&env, account, false);
            }
        }
        Ok(())
    }

    pub fn is_whitelisted(env: Env, account: Address) -> bool {
        is_whitelisted(&env, &account)
    }

    /// Discount in basis points applied to every quote.
    pub fn set_discount(env: Env, caller: Address, discount_bps: u32) -> Result<(), Error> {
        acl::require_role(&env, Role::DefaultAdmin, &caller)?;
        price::validate_discount(discount_bps)?;
        set_discount_bps(&env, discount_bps);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Purchases
    // ------------------------------------------------------------------

    /// Buy `amount` tokens from the current phase. `payment` is the most the
    /// buyer is willing to pay in the payment token; only the quoted amount
    /// is collected. Returns the id of the purchase record.
    pub fn buy_token(env: Env, buyer: Address, amount: i128, payment: i128) -> Result<u64, Error> {
        buyer.require_auth();
        let config = get_config(&env)?;
        let now = get_ledger_timestamp(&env);

        let mut phase = get_phase(&env, get_current_phase_id(&env)).ok_or(Error::NoActivePhase)?;
        if phase.is_closed(now) {
            log!(&env, "purchase rejected, phase closed", phase.id);
            return Err(Error::PhaseExpired);
        }
        if !phase.is_public && !is_whitelisted(&env, &buyer) {
            return Err(Error::PrivatePhaseForbidden);
        }
        if amount <= 0 || amount < phase.minimum_entry {
            return Err(Error::BelowMinimumEntry);
        }

        let latest = price::latest_price(&env, &config.price_source)?;
        let required = price::required_payment(amount, phase.price, latest, get_discount_bps(&env))?;
        if payment < required {
            return Err(Error::InsufficientPayment);
        }
        if amount > phase.supply {
            return Err(Error::PhaseSupplyExceeded);
        }
        require_funded(&env, &config, amount)?;

        // Bookkeeping first; token calls come last.
        phase.supply -= amount;
        if phase.supply == 0 {
            phase.over = true;
        }
        set_phase(&env, &phase);

        let unlock_at = now.checked_add(phase.timelock).ok_or(Error::Overflow)?;
        let immediate = phase.timelock == 0;
        let entry = vesting::create_entry(&env, phase.id, &buyer, amount, unlock_at, immediate)?;

        if required > 0 {
            token::Client::new(&env, &config.payment_token).transfer(
                &buyer,
                &config.treasury,
                &required,
            );
        }
        if immediate {
            token::Client::new(&env, &config.token).transfer(
                &env.current_contract_address(),
                &buyer,
                &amount,
            );
        }

        if phase.over {
            events::emit_phase_closed(&env, phase.id, 0);
        }
        events::emit_purchase(&env, buyer, amount, entry.id);
        if immediate {
            events::emit_claims(&env, entry.id);
        }

        Ok(entry.id)
    }

    /// Transfer the tokens of purchase `id` to its beneficiary once the
    /// timelock has elapsed.
    pub fn release(env: Env, caller: Address, id: u64) -> Result<(), Error> {
        caller.require_auth();
        let config = get_config(&env)?;

        let entry = vesting::mark_released(&env, &caller, id)?;

        token::Client::new(&env, &config.token).transfer(
            &env.current_contract_address(),
            &entry.beneficiary,
            &entry.amount,
        );

        events::emit_claims(&env, id);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    /// Phase by id, with `over` reported as soon as the end time has passed.
    pub fn phases(env: Env, id: u32) -> Option<Phase> {
        let now = get_ledger_timestamp(&env);
        get_phase(&env, id).map(|mut phase| {
            phase.over = phase.is_closed(now);
            phase
        })
    }

    pub fn current_phase(env: Env) -> u32 {
        get_current_phase_id(&env)
    }

    pub fn tokens_remain_for_sale(env: Env) -> Result<i128, Error> {
        let config = get_config(&env)?;
        Ok(config.max_supply - get_allocated(&env))
    }

    pub fn supply(env: Env) -> Result<i128, Error> {
        Ok(get_config(&env)?.max_supply)
    }

    pub fn latest_price(env: Env) -> Result<i128, Error> {
        let config = get_config(&env)?;
        price::latest_price(&env, &config.price_source)
    }

    /// Payment currently required for `amount` tokens of the open phase.
    pub fn quote(env: Env, amount: i128) -> Result<i128, Error> {
        let config = get_config(&env)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        let phase = get_phase(&env, get_current_phase_id(&env)).ok_or(Error::NoActivePhase)?;
        let latest = price::latest_price(&env, &config.price_source)?;
        price::required_payment(amount, phase.price, latest, get_discount_bps(&env))
    }

    pub fn discount_bps(env: Env) -> u32 {
        get_discount_bps(&env)
    }

    pub fn get_vesting(env: Env, id: u64) -> Option<VestingEntry> {
        get_vesting(&env, id)
    }

    pub fn vesting_ids_of(env: Env, beneficiary: Address) -> Vec<u64> {
        get_beneficiary_vestings(&env, &beneficiary)
    }

    /// Tokens sold but not yet released.
    pub fn outstanding(env: Env) -> i128 {
        get_outstanding(&env)
    }

    pub fn vesting_count(env: Env) -> u64 {
        get_vesting_count(&env)
    }

    pub fn releasable(env: Env, id: u64) -> bool {
        vesting::is_releasable(&env, id)
    }

    pub fn get_config(env: Env) -> Result<SaleConfig, Error> {
        get_config(&env)
    }
}
