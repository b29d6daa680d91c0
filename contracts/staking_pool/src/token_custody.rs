//! Token custody for the pool.
//! The contract's balance in the configured token backs `available_funds`.

use crate::storage;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env};
use staking_errors::StakingError;

fn token_client(e: &Env) -> Result<TokenClient<'_>, StakingError> {
    let token = storage::get_token(e)?;
    Ok(TokenClient::new(e, &token))
}

/// @notice Pulls `amount` from `from` into the pool contract.
/// @dev Requires prior approval for the pool contract as spender.
pub fn transfer_into_contract(e: &Env, from: &Address, amount: u64) -> Result<(), StakingError> {
    if amount == 0 {
        return Ok(());
    }
    let contract = e.current_contract_address();
    token_client(e)?.transfer_from(&contract, from, &contract, &i128::from(amount));
    Ok(())
}

/// @notice Pays `amount` out of the pool contract to `recipient`.
pub fn transfer_from_contract(
    e: &Env,
    recipient: &Address,
    amount: u64,
) -> Result<(), StakingError> {
    if amount == 0 {
        return Ok(());
    }
    let contract = e.current_contract_address();
    token_client(e)?.transfer(&contract, recipient, &i128::from(amount));
    Ok(())
}

/// @notice Current custody balance held by the pool contract.
pub fn custody_balance(e: &Env) -> Result<i128, StakingError> {
    let contract = e.current_contract_address();
    Ok(token_client(e)?.balance(&contract))
}
