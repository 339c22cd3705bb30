#![no_std]
#![allow(clippy::too_many_arguments)]

mod contract;
mod errors;
mod events;
mod price;
mod storage;
mod types;
mod vesting;


pub use access_control::Role;
pub use contract::{TokenSaleContract, TokenSaleContractClient};
pub use errors::{Error, ErrorCategory};
pub use events::{Claims, Purchase};
pub use price::{PriceSource, PriceSourceClient};
pub use types::{Phase, SaleConfig, VestingEntry};
