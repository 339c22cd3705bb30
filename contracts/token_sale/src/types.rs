use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Phase {
    pub id: u32,
    pub is_public: bool,
    pub minimum_entry: i128,
    pub price: i128, // fiat units, same scale as the price feed
    pub end_at: u64,
    pub supply: i128, // remaining allotment
    pub original_supply: i128,
    pub timelock: u64, // seconds between purchase and release
    pub over: bool,
}

impl Phase {
    /// A phase is closed once flagged, or as soon as its end time has passed
    /// even if nobody has persisted the flag yet.
    pub fn is_closed(&self, now: u64) -> bool {
        self.over || now > self.end_at
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VestingEntry {
    pub id: u64,
    pub phase_id: u32,
    pub beneficiary: Address,
    pub amount: i128,
    pub unlock_at: u64,
    pub claimed: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub token: Address,         // token being sold, held by the sale
    pub payment_token: Address, // native-currency token used to pay
    pub treasury: Address,      // receives payments
    pub price_source: Address,  // PriceSource implementation
    pub max_supply: i128,
}

#[contracttype]
pub enum DataKey {
    Initialized,
    Config,
    Allocated,
    Outstanding,
    DiscountBps,
    CurrentPhase,
    Phase(u32),
    VestingCount,
    Vesting(u64),
    BeneficiaryVestings(Address),
    Whitelisted(Address),
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
