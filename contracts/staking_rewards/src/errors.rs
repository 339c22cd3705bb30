use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    ZeroAmount = 3,
    InvalidAmount = 4,
    InvalidDuration = 5,
    InsufficientStake = 6,
    RewardTooHigh = 7,
    PeriodAlreadyStarted = 8,
    Overflow = 9,
}

impl Error {
    pub fn reason(&self) -> &'static str {
        match self {
            Error::AlreadyInitialized => "StakingRewards: already initialized",
            Error::NotInitialized => "StakingRewards: not initialized",
            Error::ZeroAmount => "Cannot stake 0",
            Error::InvalidAmount => "Reward cannot be negative",
            Error::InvalidDuration => "Rewards duration must be greater than zero",
            Error::InsufficientStake => "Cannot withdraw more than staked",
            Error::RewardTooHigh => "Provided reward too high",
            Error::PeriodAlreadyStarted => {
                "Previous rewards period must be complete before changing the duration for the new period"
            }
            Error::Overflow => "Arithmetic overflow",
        }
    }
}
