//! Overflow-safe arithmetic for ledger balances and reward accrual.
//!
//! Every helper reports overflow as `StakingError::ArithmeticOverflow` instead of
//! wrapping or panicking, so a failing computation aborts the operation cleanly.

use crate::constants::{BPS_DENOMINATOR, MS_PER_SECOND, SECONDS_PER_YEAR};
use staking_errors::StakingError;

/// Checked `u64` addition.
#[inline]
pub fn add_u64(a: u64, b: u64) -> Result<u64, StakingError> {
    a.checked_add(b).ok_or(StakingError::ArithmeticOverflow)
}

/// Checked `u64` multiplication.
#[inline]
pub fn mul_u64(a: u64, b: u64) -> Result<u64, StakingError> {
    a.checked_mul(b).ok_or(StakingError::ArithmeticOverflow)
}

/// Whole seconds between two millisecond timestamps; the sub-second remainder
/// is discarded. A `now` earlier than `since` counts as zero elapsed time.
#[inline]
#[must_use]
pub fn elapsed_seconds(since_ms: u64, now_ms: u64) -> u64 {
    now_ms.saturating_sub(since_ms) / MS_PER_SECOND
}

/// Simple-interest reward:
/// `floor(principal * rate_bps * elapsed_seconds / (10_000 * SECONDS_PER_YEAR))`.
///
/// The numerator is built in `u128` with checked multiplication; a numerator
/// beyond `u128` or a quotient beyond `u64` is an overflow.
pub fn accrued_reward(
    principal: u64,
    rate_bps: u64,
    elapsed_seconds: u64,
) -> Result<u64, StakingError> {
    let numerator = (principal as u128)
        .checked_mul(rate_bps as u128)
        .and_then(|v| v.checked_mul(elapsed_seconds as u128))
        .ok_or(StakingError::ArithmeticOverflow)?;
    let denominator = (BPS_DENOMINATOR as u128) * (SECONDS_PER_YEAR as u128);
    u64::try_from(numerator / denominator).map_err(|_| StakingError::ArithmeticOverflow)
}
