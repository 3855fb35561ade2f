//! Message types for the fund relay contract.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// CW20 token contract the relay custodies and forwards
    pub asset: String,
    /// Downstream action sink contract
    pub sink: String,
    /// Authority contract reporting the currently delegated caller
    pub authority: String,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Forward the relay's entire current token balance into the action sink.
    ///
    /// Authorization: the authority's current delegate only.
    ///
    /// The amount is deliberately not a parameter: it is read from the
    /// relay's live balance at execution time, because the upstream
    /// cross-chain delivery size is not known in advance and a
    /// caller-supplied amount would be a spoofing vector.
    Forward {
        /// Logical position name, passed through to the sink
        name: String,
        /// Market identifier, passed through to the sink
        market_id: u64,
        /// Lock duration in seconds, passed through to the sink
        lock_duration: u64,
        /// Recipient of any balance the sink leaves unconsumed
        recipient: String,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the three collaborator addresses
    #[returns(ConfigResponse)]
    Config {},

    /// Returns the relay's current token balance, i.e. the amount the next
    /// `Forward` would derive
    #[returns(ForwardableBalanceResponse)]
    ForwardableBalance {},
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    /// CW20 token the relay custodies
    pub asset: Addr,
    /// Downstream action sink
    pub sink: Addr,
    /// Authority contract
    pub authority: Addr,
}

#[cw_serde]
pub struct ForwardableBalanceResponse {
    /// Current relay balance in the asset token
    pub amount: Uint128,
}
