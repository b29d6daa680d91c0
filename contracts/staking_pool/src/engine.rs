//! Accounting engine.
//!
//! Pure state transitions over the pool ledger and at most one stake record.
//! Every function validates all of its preconditions against borrowed state
//! and, only if they all hold, returns a [`Transition`] describing the new
//! state. Nothing here touches storage, tokens or the event stream; the
//! contract layer commits a transition as one unit.

use crate::constants::{BOOTSTRAP_DURATION_MS, INITIAL_RATE_BPS, MAX_RATE_BPS};
use crate::events::LedgerEvent;
use crate::math;
use crate::types::{PoolLedger, StakeRecord};
use soroban_sdk::Address;
use staking_errors::StakingError;

/// What to do with the caller's stake record when committing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StakeSlot {
    /// Leave storage as is.
    Keep,
    /// Store this record.
    Write(StakeRecord),
    /// Principal reached zero; delete the record.
    Remove,
}

/// Token movement between custody and the caller of the operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Movement {
    None,
    /// Pull this amount from the caller into custody.
    Inflow(u64),
    /// Pay this amount out of custody to the caller.
    Outflow(u64),
}

/// The full effect of one successful operation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transition {
    pub pool: PoolLedger,
    pub stake: StakeSlot,
    pub movement: Movement,
    pub event: LedgerEvent,
}

fn ensure_admin(pool: &PoolLedger, caller: &Address) -> Result<(), StakingError> {
    if pool.admin != *caller {
        return Err(StakingError::Unauthorized);
    }
    Ok(())
}

fn ensure_positive(amount: u64) -> Result<(), StakingError> {
    if amount == 0 {
        return Err(StakingError::InvalidAmount);
    }
    Ok(())
}

fn ensure_liquidity(pool: &PoolLedger, payout: u64) -> Result<(), StakingError> {
    if pool.available_funds < payout {
        return Err(StakingError::InsufficientLiquidity);
    }
    Ok(())
}

/// Rate used by a claim at `now`: the fixed initial rate until the pool's
/// bootstrap boundary, the admin-set rate from then on.
#[must_use]
pub fn applicable_rate(pool: &PoolLedger, now: u64) -> u64 {
    if now >= pool.initial_rate_end_at {
        pool.rate_bps
    } else {
        INITIAL_RATE_BPS
    }
}

/// Reward `record` has accrued at `now`, ignoring claim status and liquidity.
pub fn accrued_reward(
    pool: &PoolLedger,
    record: &StakeRecord,
    now: u64,
) -> Result<u64, StakingError> {
    let elapsed = math::elapsed_seconds(record.deposited_at, now);
    math::accrued_reward(record.principal, applicable_rate(pool, now), elapsed)
}

/// Create a fresh ledger owned by `admin`, seeded with `initial_funds`.
pub fn initialize(
    admin: &Address,
    initial_funds: u64,
    now: u64,
) -> Result<Transition, StakingError> {
    let initial_rate_end_at = math::add_u64(now, BOOTSTRAP_DURATION_MS)?;
    let pool = PoolLedger {
        total_staked: 0,
        available_funds: initial_funds,
        rate_bps: INITIAL_RATE_BPS,
        admin: admin.clone(),
        initial_rate_end_at,
    };
    Ok(Transition {
        pool,
        stake: StakeSlot::Keep,
        movement: Movement::Inflow(initial_funds),
        event: LedgerEvent::PoolInitialized {
            admin: admin.clone(),
            initial_funds,
            initial_rate_end_at,
        },
    })
}

/// Add `amount` to `depositor`'s position.
///
/// A top-up restarts `deposited_at` for the whole balance and leaves
/// `reward_claimed` as it was.
pub fn deposit(
    pool: &PoolLedger,
    record: Option<&StakeRecord>,
    depositor: &Address,
    amount: u64,
    now: u64,
) -> Result<Transition, StakingError> {
    ensure_positive(amount)?;

    let updated = match record {
        Some(existing) => StakeRecord {
            principal: math::add_u64(existing.principal, amount)?,
            deposited_at: now,
            reward_claimed: existing.reward_claimed,
        },
        None => StakeRecord {
            principal: amount,
            deposited_at: now,
            reward_claimed: false,
        },
    };

    let mut next = pool.clone();
    next.total_staked = math::add_u64(pool.total_staked, amount)?;
    next.available_funds = math::add_u64(pool.available_funds, amount)?;

    Ok(Transition {
        pool: next,
        stake: StakeSlot::Write(updated),
        movement: Movement::Inflow(amount),
        event: LedgerEvent::Staked {
            depositor: depositor.clone(),
            amount,
        },
    })
}

/// Return `amount` of principal to `depositor`; the record is removed when it
/// reaches zero.
pub fn withdraw(
    pool: &PoolLedger,
    record: Option<&StakeRecord>,
    depositor: &Address,
    amount: u64,
) -> Result<Transition, StakingError> {
    ensure_positive(amount)?;
    let existing = record.ok_or(StakingError::NotFound)?;
    if existing.principal < amount || pool.total_staked < amount {
        return Err(StakingError::InsufficientPrincipal);
    }
    ensure_liquidity(pool, amount)?;

    let remaining = existing.principal - amount;
    let stake = if remaining == 0 {
        StakeSlot::Remove
    } else {
        StakeSlot::Write(StakeRecord {
            principal: remaining,
            ..existing.clone()
        })
    };

    let mut next = pool.clone();
    next.total_staked -= amount;
    next.available_funds -= amount;

    Ok(Transition {
        pool: next,
        stake,
        movement: Movement::Outflow(amount),
        event: LedgerEvent::Unstaked {
            depositor: depositor.clone(),
            amount,
        },
    })
}

/// Pay the accrued reward for `depositor`'s position. Single use per position.
pub fn claim_reward(
    pool: &PoolLedger,
    record: Option<&StakeRecord>,
    depositor: &Address,
    now: u64,
) -> Result<Transition, StakingError> {
    let existing = record.ok_or(StakingError::NotFound)?;
    if existing.reward_claimed {
        return Err(StakingError::AlreadyClaimed);
    }

    let reward = accrued_reward(pool, existing, now)?;
    if reward == 0 {
        return Err(StakingError::ZeroReward);
    }
    ensure_liquidity(pool, reward)?;

    let mut next = pool.clone();
    next.available_funds -= reward;

    Ok(Transition {
        pool: next,
        stake: StakeSlot::Write(StakeRecord {
            reward_claimed: true,
            ..existing.clone()
        }),
        movement: Movement::Outflow(reward),
        event: LedgerEvent::RewardClaimed {
            depositor: depositor.clone(),
            reward,
        },
    })
}

/// Admin adds reward liquidity. Principal is untouched.
pub fn fund_pool(
    pool: &PoolLedger,
    caller: &Address,
    amount: u64,
) -> Result<Transition, StakingError> {
    ensure_admin(pool, caller)?;
    ensure_positive(amount)?;

    let mut next = pool.clone();
    next.available_funds = math::add_u64(pool.available_funds, amount)?;

    Ok(Transition {
        pool: next,
        stake: StakeSlot::Keep,
        movement: Movement::Inflow(amount),
        event: LedgerEvent::PoolFunded {
            admin: caller.clone(),
            amount,
        },
    })
}

/// Admin removes liquidity.
///
/// Bounded only by `available_funds`, not by `total_staked`: draining below the
/// depositors' principal leaves later unstake and claim calls failing with
/// `InsufficientLiquidity` until the pool is funded again.
pub fn withdraw_pool(
    pool: &PoolLedger,
    caller: &Address,
    amount: u64,
) -> Result<Transition, StakingError> {
    ensure_admin(pool, caller)?;
    ensure_positive(amount)?;
    ensure_liquidity(pool, amount)?;

    let mut next = pool.clone();
    next.available_funds -= amount;

    Ok(Transition {
        pool: next,
        stake: StakeSlot::Keep,
        movement: Movement::Outflow(amount),
        event: LedgerEvent::PoolWithdrawn {
            admin: caller.clone(),
            amount,
        },
    })
}

/// Admin replaces the post-bootstrap rate.
pub fn set_rate(
    pool: &PoolLedger,
    caller: &Address,
    new_rate_bps: u64,
    now: u64,
) -> Result<Transition, StakingError> {
    ensure_admin(pool, caller)?;
    if new_rate_bps == 0 || new_rate_bps > MAX_RATE_BPS {
        return Err(StakingError::RateOutOfRange);
    }
    if now < pool.initial_rate_end_at {
        return Err(StakingError::BootstrapLocked);
    }

    let mut next = pool.clone();
    next.rate_bps = new_rate_bps;

    Ok(Transition {
        pool: next,
        stake: StakeSlot::Keep,
        movement: Movement::None,
        event: LedgerEvent::RateChanged {
            old: pool.rate_bps,
            new: new_rate_bps,
        },
    })
}
