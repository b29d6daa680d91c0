use soroban_sdk::{Address, Env, Symbol};

/// Descriptor produced by each successful ledger operation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LedgerEvent {
    PoolInitialized {
        admin: Address,
        initial_funds: u64,
        initial_rate_end_at: u64,
    },
    Staked {
        depositor: Address,
        amount: u64,
    },
    Unstaked {
        depositor: Address,
        amount: u64,
    },
    RewardClaimed {
        depositor: Address,
        reward: u64,
    },
    PoolFunded {
        admin: Address,
        amount: u64,
    },
    PoolWithdrawn {
        admin: Address,
        amount: u64,
    },
    RateChanged {
        old: u64,
        new: u64,
    },
}

/// Deliver `event` to the host event stream.
///
/// | descriptor        | topics                           | data                              |
/// |-------------------|----------------------------------|-----------------------------------|
/// | `PoolInitialized` | `"pool_initialized"`, admin      | `(initial_funds, initial_rate_end_at)` |
/// | `Staked`          | `"staked"`, depositor            | `amount`                          |
/// | `Unstaked`        | `"unstaked"`, depositor          | `amount`                          |
/// | `RewardClaimed`   | `"reward_claimed"`, depositor    | `reward`                          |
/// | `PoolFunded`      | `"pool_funded"`, admin           | `amount`                          |
/// | `PoolWithdrawn`   | `"pool_withdrawn"`, admin        | `amount`                          |
/// | `RateChanged`     | `"rate_changed"`                 | `(old, new)`                      |
pub fn publish(e: &Env, event: &LedgerEvent) {
    match event {
        LedgerEvent::PoolInitialized {
            admin,
            initial_funds,
            initial_rate_end_at,
        } => {
            let topics = (Symbol::new(e, "pool_initialized"), admin.clone());
            e.events()
                .publish(topics, (*initial_funds, *initial_rate_end_at));
        }
        LedgerEvent::Staked { depositor, amount } => {
            let topics = (Symbol::new(e, "staked"), depositor.clone());
            e.events().publish(topics, *amount);
        }
        LedgerEvent::Unstaked { depositor, amount } => {
            let topics = (Symbol::new(e, "unstaked"), depositor.clone());
            e.events().publish(topics, *amount);
        }
        LedgerEvent::RewardClaimed { depositor, reward } => {
            let topics = (Symbol::new(e, "reward_claimed"), depositor.clone());
            e.events().publish(topics, *reward);
        }
        LedgerEvent::PoolFunded { admin, amount } => {
            let topics = (Symbol::new(e, "pool_funded"), admin.clone());
            e.events().publish(topics, *amount);
        }
        LedgerEvent::PoolWithdrawn { admin, amount } => {
            let topics = (Symbol::new(e, "pool_withdrawn"), admin.clone());
            e.events().publish(topics, *amount);
        }
        LedgerEvent::RateChanged { old, new } => {
            e.events()
                .publish((Symbol::new(e, "rate_changed"),), (*old, *new));
        }
    }
}
