//! Reward policy constants.

/// Rate applied to every claim made before the bootstrap period ends (20 %).
pub const INITIAL_RATE_BPS: u64 = 2_000;

/// Upper bound for an admin-set rate (100 %).
pub const MAX_RATE_BPS: u64 = 10_000;

/// Basis-point denominator.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Length of the bootstrap period: 90 days in milliseconds.
pub const BOOTSTRAP_DURATION_MS: u64 = 90 * 86_400 * MS_PER_SECOND;

/// 365-day year used by the reward formula.
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

pub const MS_PER_SECOND: u64 = 1_000;
