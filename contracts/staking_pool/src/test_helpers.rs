//! Shared test helpers for staking_pool tests.

#![cfg(test)]

use crate::{StakingPool, StakingPoolClient};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};

/// Default mint: large enough for all test scenarios.
pub const DEFAULT_MINT: i128 = 100_000_000_000_000;

/// Seed liquidity used by `setup`.
pub const INITIAL_FUNDS: u64 = 1_000_000;

/// One day in seconds (ledger timestamps are in seconds).
pub const ONE_DAY: u64 = 86_400;
/// 365 days in seconds.
pub const ONE_YEAR: u64 = 31_536_000;
/// Bootstrap period in seconds.
pub const BOOTSTRAP_SECS: u64 = 90 * ONE_DAY;

pub struct Fixture<'a> {
    pub client: StakingPoolClient<'a>,
    pub token: TokenClient<'a>,
    pub asset_admin: StellarAssetClient<'a>,
    pub admin: Address,
    pub alice: Address,
    pub bob: Address,
    pub contract_id: Address,
}

impl<'a> Fixture<'a> {
    /// Generates a funded, approving account.
    pub fn new_depositor(&self, e: &Env) -> Address {
        let user = Address::generate(e);
        fund_and_approve(e, &self.asset_admin, &self.token, &user, &self.contract_id);
        user
    }

    pub fn custody(&self) -> i128 {
        self.token.balance(&self.contract_id)
    }
}

fn fund_and_approve(
    e: &Env,
    asset_admin: &StellarAssetClient,
    token: &TokenClient,
    user: &Address,
    spender: &Address,
) {
    asset_admin.set_authorized(user, &true);
    asset_admin.mint(user, &DEFAULT_MINT);
    let expiry_ledger = e.ledger().sequence().saturating_add(10_000);
    token.approve(user, spender, &DEFAULT_MINT, &expiry_ledger);
}

/// Registers the pool and a Stellar asset without initializing the pool.
pub fn setup_uninitialized(e: &Env) -> Fixture<'_> {
    e.mock_all_auths();

    let contract_id = e.register(StakingPool, ());
    let client = StakingPoolClient::new(e, &contract_id);
    let admin = Address::generate(e);
    let alice = Address::generate(e);
    let bob = Address::generate(e);

    let issuer = Address::generate(e);
    let stellar_asset = e.register_stellar_asset_contract_v2(issuer).address();
    let asset_admin = StellarAssetClient::new(e, &stellar_asset);
    let token = TokenClient::new(e, &stellar_asset);

    for user in [&admin, &alice, &bob] {
        fund_and_approve(e, &asset_admin, &token, user, &contract_id);
    }

    Fixture {
        client,
        token,
        asset_admin,
        admin,
        alice,
        bob,
        contract_id,
    }
}

/// Full setup at ledger time 0: pool initialized by `admin` with `INITIAL_FUNDS`.
pub fn setup(e: &Env) -> Fixture<'_> {
    setup_with_funds(e, INITIAL_FUNDS)
}

pub fn setup_with_funds(e: &Env, initial_funds: u64) -> Fixture<'_> {
    let f = setup_uninitialized(e);
    f.client
        .initialize(&f.admin, &f.token.address, &initial_funds);
    f
}

/// Sets the ledger clock to `secs`.
pub fn set_time(e: &Env, secs: u64) {
    e.ledger().with_mut(|li| li.timestamp = secs);
}

/// Moves the ledger clock forward by `secs`.
pub fn advance(e: &Env, secs: u64) {
    e.ledger().with_mut(|li| li.timestamp += secs);
}
