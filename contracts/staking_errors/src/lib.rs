#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by domain for monitoring, alerting, and dashboards.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `StakingError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Pool and stake record lookup errors (codes 1-99).
    Ledger,
    /// Caller identity and permission errors (codes 100-199).
    Authorization,
    /// Malformed amount or rate arguments (codes 200-299).
    Validation,
    /// Depositor position errors (codes 300-399).
    Position,
    /// Pool liquidity errors (codes 400-499).
    Liquidity,
    /// Reward-rate policy errors (codes 500-599).
    RatePolicy,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  StakingError
/// @notice Error enum returned by every staking pool entry point.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1  -  99  : Ledger
///   100 - 199 : Authorization
///   200 - 299 : Validation
///   300 - 399 : Position
///   400 - 499 : Liquidity
///   500 - 599 : RatePolicy
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StakingError {
    // --- Ledger (1-99) ---
    /// The pool has not been initialized, or the depositor has no stake record.
    NotFound = 1,

    /// `initialize` was called on a pool that already exists.
    AlreadyInitialized = 2,

    // --- Authorization (100-199) ---
    /// Caller is not the pool admin.
    Unauthorized = 100,

    // --- Validation (200-299) ---
    /// Amount argument is zero or otherwise out of range.
    InvalidAmount = 200,

    /// Proposed rate is zero or exceeds 10000 basis points.
    RateOutOfRange = 201,

    // --- Position (300-399) ---
    /// Withdrawal exceeds the depositor's principal or the pool's total staked.
    InsufficientPrincipal = 300,

    /// The reward for this position has already been paid.
    AlreadyClaimed = 301,

    /// The computed reward rounds down to zero.
    ZeroReward = 302,

    // --- Liquidity (400-499) ---
    /// Payout exceeds the pool's available funds.
    InsufficientLiquidity = 400,

    // --- RatePolicy (500-599) ---
    /// Rate changes are locked until the bootstrap period ends.
    BootstrapLocked = 500,

    // --- Arithmetic (700-799) ---
    /// An intermediate or stored value would exceed its representable range.
    ArithmeticOverflow = 700,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every StakingError variant.
/// @dev    Use this for structured logging, monitoring, and off-chain display.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for StakingError {
    fn category(&self) -> ErrorCategory {
        match self {
            StakingError::NotFound | StakingError::AlreadyInitialized => ErrorCategory::Ledger,
            StakingError::Unauthorized => ErrorCategory::Authorization,
            StakingError::InvalidAmount | StakingError::RateOutOfRange => {
                ErrorCategory::Validation
            }
            StakingError::InsufficientPrincipal
            | StakingError::AlreadyClaimed
            | StakingError::ZeroReward => ErrorCategory::Position,
            StakingError::InsufficientLiquidity => ErrorCategory::Liquidity,
            StakingError::BootstrapLocked => ErrorCategory::RatePolicy,
            StakingError::ArithmeticOverflow => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            StakingError::NotFound => "Pool or stake record does not exist",
            StakingError::AlreadyInitialized => "Pool has already been initialized",
            StakingError::Unauthorized => "Caller is not the pool admin",
            StakingError::InvalidAmount => "Amount must be strictly positive (> 0)",
            StakingError::RateOutOfRange => "Rate must be in range 1-10000 bps",
            StakingError::InsufficientPrincipal => {
                "Withdrawal exceeds staked principal or pool total"
            }
            StakingError::AlreadyClaimed => "Reward has already been claimed for this stake",
            StakingError::ZeroReward => "Accrued reward rounds down to zero",
            StakingError::InsufficientLiquidity => "Pool funds cannot cover the payout",
            StakingError::BootstrapLocked => "Rate is locked during the bootstrap period",
            StakingError::ArithmeticOverflow => "Integer overflow in checked arithmetic",
        }
    }
}
