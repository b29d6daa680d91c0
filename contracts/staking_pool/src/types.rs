use soroban_sdk::{contracttype, Address};

// ─── Pool state ────────────────────────────────────────────────────────────

/// Aggregate accounting for the pool held by this contract instance.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolLedger {
    /// Sum of every outstanding `StakeRecord.principal`.
    pub total_staked: u64,
    /// Token units held in custody, usable for principal and reward payouts.
    pub available_funds: u64,
    /// Annualized reward rate in basis points, applied after bootstrap.
    pub rate_bps: u64,
    /// Sole authority for funding, withdrawal and rate changes. Never changes.
    pub admin: Address,
    /// End of the bootstrap period (ms). Before it, rewards use the initial rate.
    pub initial_rate_end_at: u64,
}

// ─── Stake state ───────────────────────────────────────────────────────────

/// A single depositor's position. Only stored while `principal > 0`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeRecord {
    /// Currently staked quantity.
    pub principal: u64,
    /// Time (ms) of the most recent deposit; a top-up restarts the whole balance.
    pub deposited_at: u64,
    /// true once the reward for this position has been paid.
    pub reward_claimed: bool,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
pub enum DataKey {
    /// The pool ledger (PoolLedger).
    Pool,
    /// Token contract backing custody.
    Token,
    /// Per-depositor stake record.
    Stake(Address),
}
