#![cfg(test)]

use crate::test_helpers::*;
use crate::{BOOTSTRAP_DURATION_MS, INITIAL_RATE_BPS};
use soroban_sdk::testutils::Events;
use soroban_sdk::{Address, Env, FromVal, Symbol, Val, Vec};

/// Most recent event published by the pool contract (token events ignored).
fn last_pool_event(e: &Env, contract_id: &Address) -> (Vec<Val>, Val) {
    let ev = e
        .events()
        .all()
        .into_iter()
        .rev()
        .find(|ev| ev.0 == *contract_id)
        .unwrap();
    (ev.1, ev.2)
}

fn topic_name(e: &Env, topics: &Vec<Val>) -> Symbol {
    Symbol::from_val(e, &topics.get(0).unwrap())
}

fn topic_address(e: &Env, topics: &Vec<Val>) -> Address {
    Address::from_val(e, &topics.get(1).unwrap())
}

#[test]
fn test_initialize_event() {
    let e = Env::default();
    let f = setup(&e);

    let (topics, data) = last_pool_event(&e, &f.contract_id);
    assert_eq!(topic_name(&e, &topics), Symbol::new(&e, "pool_initialized"));
    assert_eq!(topic_address(&e, &topics), f.admin);
    assert_eq!(
        <(u64, u64)>::from_val(&e, &data),
        (INITIAL_FUNDS, BOOTSTRAP_DURATION_MS)
    );
}

#[test]
fn test_depositor_lifecycle_events() {
    let e = Env::default();
    let f = setup(&e);

    f.client.stake(&f.alice, &500_000);
    let (topics, data) = last_pool_event(&e, &f.contract_id);
    assert_eq!(topic_name(&e, &topics), Symbol::new(&e, "staked"));
    assert_eq!(topic_address(&e, &topics), f.alice);
    assert_eq!(u64::from_val(&e, &data), 500_000);

    advance(&e, ONE_YEAR);
    f.client.claim(&f.alice);
    let (topics, data) = last_pool_event(&e, &f.contract_id);
    assert_eq!(topic_name(&e, &topics), Symbol::new(&e, "reward_claimed"));
    assert_eq!(topic_address(&e, &topics), f.alice);
    assert_eq!(u64::from_val(&e, &data), 100_000);

    f.client.unstake(&f.alice, &200_000);
    let (topics, data) = last_pool_event(&e, &f.contract_id);
    assert_eq!(topic_name(&e, &topics), Symbol::new(&e, "unstaked"));
    assert_eq!(topic_address(&e, &topics), f.alice);
    assert_eq!(u64::from_val(&e, &data), 200_000);
}

#[test]
fn test_admin_events() {
    let e = Env::default();
    let f = setup(&e);

    f.client.admin_fund(&f.admin, &7_000);
    let (topics, data) = last_pool_event(&e, &f.contract_id);
    assert_eq!(topic_name(&e, &topics), Symbol::new(&e, "pool_funded"));
    assert_eq!(topic_address(&e, &topics), f.admin);
    assert_eq!(u64::from_val(&e, &data), 7_000);

    f.client.admin_withdraw(&f.admin, &3_000);
    let (topics, data) = last_pool_event(&e, &f.contract_id);
    assert_eq!(topic_name(&e, &topics), Symbol::new(&e, "pool_withdrawn"));
    assert_eq!(u64::from_val(&e, &data), 3_000);

    set_time(&e, BOOTSTRAP_SECS);
    f.client.admin_set_rate(&f.admin, &1_500);
    let (topics, data) = last_pool_event(&e, &f.contract_id);
    assert_eq!(topics.len(), 1);
    assert_eq!(topic_name(&e, &topics), Symbol::new(&e, "rate_changed"));
    assert_eq!(
        <(u64, u64)>::from_val(&e, &data),
        (INITIAL_RATE_BPS, 1_500)
    );
}
