//! Staking Pool Contract
//!
//! Depositors stake a single token into a shared pool and may claim a
//! simple-interest reward once per position. The admin funds and drains reward
//! liquidity and, after a fixed bootstrap period, sets the annual rate.
//!
//! ## Key design decisions
//!
//! - **Pure accounting engine**: `engine` validates and computes every
//!   transition from borrowed state; this module only loads, commits and
//!   publishes.
//! - **All-or-nothing**: every precondition is checked before the first write;
//!   an `Err` leaves ledger, registry and custody untouched.
//! - **Custody mirrors the ledger**: every change to `available_funds` moves the
//!   same number of tokens in the same call.
//! - **Top-ups restart the clock**: a deposit resets `deposited_at` for the
//!   whole balance and never clears `reward_claimed`.
//! - **Admin drain is unbounded by principal**: `admin_withdraw` only checks
//!   `available_funds`, so the admin can leave the pool unable to repay stakers.

#![no_std]

mod clock;
mod constants;
mod engine;
mod events;
mod math;
mod storage;
mod token_custody;
mod types;

pub use constants::{
    BOOTSTRAP_DURATION_MS, INITIAL_RATE_BPS, MAX_RATE_BPS, SECONDS_PER_YEAR,
};
pub use staking_errors::StakingError;
pub use types::{PoolLedger, StakeRecord};

use engine::{Movement, StakeSlot, Transition};
use soroban_sdk::{contract, contractimpl, Address, Env};

#[cfg(test)]
mod test_helpers;




#[cfg(test)]
mod test_events;

// ─── Helpers ───────────────────────────────────────────────────────────────

/// Apply `transition` on behalf of `caller`: tokens in, state, tokens out,
/// then the descriptor.
fn commit(e: &Env, caller: &Address, transition: &Transition) -> Result<(), StakingError> {
    if let Movement::Inflow(amount) = transition.movement {
        token_custody::transfer_into_contract(e, caller, amount)?;
    }

    storage::save_pool(e, &transition.pool);
    match &transition.stake {
        StakeSlot::Keep => {}
        StakeSlot::Write(record) => storage::save_stake(e, caller, record),
        StakeSlot::Remove => storage::remove_stake(e, caller),
    }

    if let Movement::Outflow(amount) = transition.movement {
        token_custody::transfer_from_contract(e, caller, amount)?;
    }

    events::publish(e, &transition.event);
    Ok(())
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct StakingPool;

#[contractimpl]
impl StakingPool {
    // ── Setup ──────────────────────────────────────────────────────────────

    /// Create the pool. `admin` becomes the permanent admin and seeds custody
    /// with `initial_funds` of `token` (may be 0; requires prior approval).
    pub fn initialize(
        e: Env,
        admin: Address,
        token: Address,
        initial_funds: u64,
    ) -> Result<PoolLedger, StakingError> {
        if storage::has_pool(&e) {
            return Err(StakingError::AlreadyInitialized);
        }
        admin.require_auth();

        let now = clock::now_ms(&e)?;
        let transition = engine::initialize(&admin, initial_funds, now)?;
        storage::set_token(&e, &token);
        commit(&e, &admin, &transition)?;
        Ok(transition.pool)
    }

    // ── Depositor operations ───────────────────────────────────────────────

    /// Stake `amount` (requires prior approval). Returns the merged record.
    pub fn stake(e: Env, depositor: Address, amount: u64) -> Result<StakeRecord, StakingError> {
        depositor.require_auth();

        let pool = storage::load_pool(&e)?;
        let record = storage::load_stake(&e, &depositor);
        let now = clock::now_ms(&e)?;
        let transition = engine::deposit(&pool, record.as_ref(), &depositor, amount, now)?;
        commit(&e, &depositor, &transition)?;

        match transition.stake {
            StakeSlot::Write(updated) => Ok(updated),
            StakeSlot::Keep | StakeSlot::Remove => Err(StakingError::NotFound),
        }
    }

    /// Withdraw `amount` of principal. Returns the principal left staked;
    /// at 0 the stake record is gone.
    pub fn unstake(e: Env, depositor: Address, amount: u64) -> Result<u64, StakingError> {
        depositor.require_auth();

        let pool = storage::load_pool(&e)?;
        let record = storage::load_stake(&e, &depositor);
        let transition = engine::withdraw(&pool, record.as_ref(), &depositor, amount)?;
        commit(&e, &depositor, &transition)?;

        Ok(match transition.stake {
            StakeSlot::Write(updated) => updated.principal,
            StakeSlot::Keep | StakeSlot::Remove => 0,
        })
    }

    /// Claim the reward accrued since the last deposit. Returns the amount paid.
    pub fn claim(e: Env, depositor: Address) -> Result<u64, StakingError> {
        depositor.require_auth();

        let pool = storage::load_pool(&e)?;
        let record = storage::load_stake(&e, &depositor);
        let now = clock::now_ms(&e)?;
        let transition = engine::claim_reward(&pool, record.as_ref(), &depositor, now)?;
        commit(&e, &depositor, &transition)?;

        Ok(match transition.movement {
            Movement::Outflow(reward) => reward,
            Movement::Inflow(_) | Movement::None => 0,
        })
    }

    // ── Admin operations ───────────────────────────────────────────────────

    /// Add reward liquidity. Returns the new `available_funds`.
    pub fn admin_fund(e: Env, admin: Address, amount: u64) -> Result<u64, StakingError> {
        admin.require_auth();

        let pool = storage::load_pool(&e)?;
        let transition = engine::fund_pool(&pool, &admin, amount)?;
        commit(&e, &admin, &transition)?;
        Ok(transition.pool.available_funds)
    }

    /// Remove liquidity to the admin. Returns the new `available_funds`.
    pub fn admin_withdraw(e: Env, admin: Address, amount: u64) -> Result<u64, StakingError> {
        admin.require_auth();

        let pool = storage::load_pool(&e)?;
        let transition = engine::withdraw_pool(&pool, &admin, amount)?;
        commit(&e, &admin, &transition)?;
        Ok(transition.pool.available_funds)
    }

    /// Replace the post-bootstrap rate. Returns the previous rate.
    pub fn admin_set_rate(e: Env, admin: Address, new_rate: u64) -> Result<u64, StakingError> {
        admin.require_auth();

        let pool = storage::load_pool(&e)?;
        let now = clock::now_ms(&e)?;
        let transition = engine::set_rate(&pool, &admin, new_rate, now)?;
        commit(&e, &admin, &transition)?;
        Ok(pool.rate_bps)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn get_pool(e: Env) -> Result<PoolLedger, StakingError> {
        storage::load_pool(&e)
    }

    /// `None` when `depositor` has nothing staked.
    pub fn get_stake(e: Env, depositor: Address) -> Option<StakeRecord> {
        storage::load_stake(&e, &depositor)
    }

    pub fn get_token(e: Env) -> Result<Address, StakingError> {
        storage::get_token(&e)
    }

    /// Token balance actually held by the pool contract.
    pub fn get_custody(e: Env) -> Result<i128, StakingError> {
        token_custody::custody_balance(&e)
    }

    /// Rate a claim made now would use.
    pub fn current_rate(e: Env) -> Result<u64, StakingError> {
        let pool = storage::load_pool(&e)?;
        let now = clock::now_ms(&e)?;
        Ok(engine::applicable_rate(&pool, now))
    }

    /// Reward a claim made now would pay, before the liquidity check.
    /// Returns 0 when there is no position or its reward was already claimed.
    pub fn pending_reward(e: Env, depositor: Address) -> Result<u64, StakingError> {
        let pool = storage::load_pool(&e)?;
        let now = clock::now_ms(&e)?;
        match storage::load_stake(&e, &depositor) {
            Some(record) if !record.reward_claimed => engine::accrued_reward(&pool, &record, now),
            _ => Ok(0),
        }
    }
}
