/// Shared deployment used by the cross-contract scenarios.
pub mod fixtures;

pub use fixtures::*;

pub mod constants {
    pub const DECIMALS: i128 = 10_000_000;
    pub const START: u64 = 1_700_000_000;
    pub const HOUR: u64 = 3_600;
    pub const DAY: u64 = 86_400;
    pub const NATIVE_USD: i128 = 250 * 100_000_000;
    pub const FIVE_USD: i128 = 5 * 100_000_000;
    pub const MAX_SUPPLY: i128 = 1_000_000 * DECIMALS;
}
