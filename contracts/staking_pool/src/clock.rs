use crate::constants::MS_PER_SECOND;
use crate::math;
use soroban_sdk::Env;
use staking_errors::StakingError;

/// Ledger close time in milliseconds. The host clock has second resolution.
pub fn now_ms(e: &Env) -> Result<u64, StakingError> {
    math::mul_u64(e.ledger().timestamp(), MS_PER_SECOND)
}
