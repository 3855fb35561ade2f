//! State definitions for the fund relay contract.
//!
//! The relay persists only the three collaborator addresses fixed at
//! instantiation. `PENDING_FORWARD` exists solely between the sink
//! submessage and its settlement reply within a single transaction; it is
//! removed in the reply and rolled back with everything else on failure,
//! so it never survives an invocation.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

/// Contract configuration, immutable after instantiation
#[cw_serde]
pub struct Config {
    /// CW20 token the relay custodies and forwards
    pub asset: Addr,
    /// Downstream action sink granted the spending allowance
    pub sink: Addr,
    /// Authority contract reporting the currently delegated caller
    pub authority: Addr,
}

/// In-flight forward, recorded before the sink call and consumed by the
/// settlement reply
#[cw_serde]
pub struct PendingForward {
    /// Recipient of any residual balance
    pub recipient: Addr,
    /// Allowance granted to the sink for this invocation
    pub granted: Uint128,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:fund-relay";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = "1.0.0";

/// Reply id for the allowance grant (dispatched only on error)
pub const GRANT_REPLY_ID: u64 = 1;

/// Reply id for the sink invocation (dispatched only on success)
pub const INVOKE_REPLY_ID: u64 = 2;

/// Reply id for the allowance reset (dispatched only on error)
pub const REVOKE_REPLY_ID: u64 = 3;

// ============================================================================
// Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Transient record bridging the sink submessage and its reply
pub const PENDING_FORWARD: Item<PendingForward> = Item::new("pending_forward");
