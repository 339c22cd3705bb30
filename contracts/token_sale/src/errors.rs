use access_control::AccessControlError;
use soroban_sdk::{contracterror, contracttype};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lifecycle (1–2) ---
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // --- Authorization (3–5) ---
    AccessDenied = 3,
    PrivatePhaseForbidden = 4,
    NotBeneficiary = 5,

    // --- Input validation (6–10) ---
    InvalidEndTime = 6,
    InvalidAmount = 7,
    InvalidDiscount = 8,
    BelowMinimumEntry = 9,
    InsufficientPayment = 10,

    // --- Supply (11–12) ---
    InsufficientSupply = 11,
    PhaseSupplyExceeded = 12,

    // --- Phase state (13–15) ---
    PhaseNotOver = 13,
    PhaseExpired = 14,
    NoActivePhase = 15,

    // --- Vesting (16–18) ---
    NotYetUnlocked = 16,
    AlreadyClaimed = 17,
    VestingNotFound = 18,

    // --- Collaborators and arithmetic (19–20) ---
    PriceUnavailable = 19,
    Overflow = 20,

    // --- Funding and roles (21–22) ---
    SaleUnderfunded = 21,
    LastAdmin = 22,
}

/// Coarse failure classes reported alongside a specific code.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum ErrorCategory {
    Lifecycle,
    AccessDenied,
    PermissionScope,
    InvalidInput,
    SupplyExceeded,
    StateConflict,
    TimingViolation,
    AlreadyProcessed,
    NotFound,
    External,
    Arithmetic,
}

impl Error {
    /// Revert reason shown to callers. Wording matches the strings the sale
    /// has always emitted so off-chain tooling keeps matching on them.
    pub fn reason(&self) -> &'static str {
        match self {
            Error::AlreadyInitialized => "Initializable: contract is already initialized",
            Error::NotInitialized => "Sale is not initialized",
            Error::AccessDenied => "AccessControl: account is missing role DEFAULT_ADMIN_ROLE",
            Error::PrivatePhaseForbidden => "This phase is private",
            Error::NotBeneficiary => "TokenTimelock: caller is not the beneficiary",
            Error::InvalidEndTime => "The end of the phase should be greater than now",
            Error::InvalidAmount => "Amount must be greater than zero",
            Error::InvalidDiscount => "Discount cannot be greater than 100%",
            Error::BelowMinimumEntry => "There are too few tokens",
            Error::InsufficientPayment => "Not enough ETH/BNB",
            Error::InsufficientSupply | Error::PhaseSupplyExceeded => "Not enough supply to mint",
            Error::PhaseNotOver => "This phase isn't over",
            Error::PhaseExpired => "This phase is over, wait for the next",
            Error::NoActivePhase => "There is no open phase",
            Error::NotYetUnlocked => "TokenTimelock: current time is before release time",
            Error::AlreadyClaimed => "TokenTimelock: tokens already released",
            Error::VestingNotFound => "TokenTimelock: unknown purchase id",
            Error::PriceUnavailable => "Price feed unavailable",
            Error::Overflow => "Arithmetic overflow",
            Error::SaleUnderfunded => "Sale does not hold enough tokens",
            Error::LastAdmin => "AccessControl: cannot revoke the last admin",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::AlreadyInitialized | Error::NotInitialized => ErrorCategory::Lifecycle,
            Error::AccessDenied | Error::NotBeneficiary => ErrorCategory::AccessDenied,
            Error::PrivatePhaseForbidden => ErrorCategory::PermissionScope,
            Error::InvalidEndTime
            | Error::InvalidAmount
            | Error::InvalidDiscount
            | Error::BelowMinimumEntry
            | Error::InsufficientPayment => ErrorCategory::InvalidInput,
            Error::InsufficientSupply | Error::PhaseSupplyExceeded | Error::SaleUnderfunded => {
                ErrorCategory::SupplyExceeded
            }
            Error::PhaseNotOver | Error::NoActivePhase | Error::LastAdmin => {
                ErrorCategory::StateConflict
            }
            Error::PhaseExpired | Error::NotYetUnlocked => ErrorCategory::TimingViolation,
            Error::AlreadyClaimed => ErrorCategory::AlreadyProcessed,
            Error::VestingNotFound => ErrorCategory::NotFound,
            Error::PriceUnavailable => ErrorCategory::External,
            Error::Overflow => ErrorCategory::Arithmetic,
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
