//! Key-value access to the pool ledger and the stake registry.

use crate::types::{DataKey, PoolLedger, StakeRecord};
use soroban_sdk::{Address, Env};
use staking_errors::StakingError;

pub fn has_pool(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Pool)
}

pub fn load_pool(e: &Env) -> Result<PoolLedger, StakingError> {
    e.storage()
        .instance()
        .get(&DataKey::Pool)
        .ok_or(StakingError::NotFound)
}

pub fn save_pool(e: &Env, pool: &PoolLedger) {
    e.storage().instance().set(&DataKey::Pool, pool);
}

pub fn get_token(e: &Env) -> Result<Address, StakingError> {
    e.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(StakingError::NotFound)
}

pub fn set_token(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::Token, token);
}

/// `None` means the depositor has no principal in the pool.
pub fn load_stake(e: &Env, depositor: &Address) -> Option<StakeRecord> {
    e.storage()
        .persistent()
        .get(&DataKey::Stake(depositor.clone()))
}

pub fn save_stake(e: &Env, depositor: &Address, record: &StakeRecord) {
    e.storage()
        .persistent()
        .set(&DataKey::Stake(depositor.clone()), record);
}

pub fn remove_stake(e: &Env, depositor: &Address) {
    e.storage()
        .persistent()
        .remove(&DataKey::Stake(depositor.clone()));
}
