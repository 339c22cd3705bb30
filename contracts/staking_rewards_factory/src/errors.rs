use access_control::AccessControlError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    AccessDenied = 3,
    InvalidAmount = 4,
    PoolAlreadyExists = 5,
    PoolNotFound = 6,
    PoolInitFailed = 7,
    PeriodAlreadyStarted = 8,
    NotReady = 9,
    NoPools = 10,
    Overflow = 11,
    LastAdmin = 12,
}

impl Error {
    pub fn reason(&self) -> &'static str {
        match self {
            Error::AlreadyInitialized => "Initializable: contract is already initialized",
            Error::NotInitialized => "StakingRewardsFactory: not initialized",
            Error::AccessDenied => "AccessControl: account is missing role DEFAULT_ADMIN_ROLE",
            Error::InvalidAmount => "StakingRewardsFactory: invalid reward amount or duration",
            Error::PoolAlreadyExists => "StakingRewardsFactory::deploy: already deployed",
            Error::PoolNotFound => "StakingRewardsFactory::notifyRewardAmount: not deployed",
            Error::PoolInitFailed => "StakingRewardsFactory::deploy: pool rejected initialization",
            Error::PeriodAlreadyStarted => "StakingRewardsFactory::update: period already started",
            Error::NotReady => "StakingRewardsFactory::notifyRewardAmounts: not ready",
            Error::NoPools => "StakingRewardsFactory::notifyRewardAmounts: called before any deploys",
            Error::Overflow => "Arithmetic overflow",
            Error::LastAdmin => "AccessControl: cannot revoke the last admin",
        }
    }
}

impl From<AccessControlError> for Error {
    fn from(err: AccessControlError) -> Self {
        match err {
            AccessControlError::MissingRole => Error::AccessDenied,
            AccessControlError::AdminAlreadySet => Error::AlreadyInitialized,
            AccessControlError::LastAdmin => Error::LastAdmin,
        }
    }
}
