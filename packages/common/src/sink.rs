//! Downstream action sink interface.
//!
//! The relay hands the sink a CW20 spending allowance and then invokes
//! `PerformAction`. The sink is expected (but not required) to pull up to
//! `amount` tokens from the relay via `Cw20ExecuteMsg::TransferFrom` while
//! this call is executing.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

/// Execute messages the relay sends to the action sink.
#[cw_serde]
pub enum SinkExecuteMsg {
    /// Perform the downstream business operation (e.g. buy and lock a
    /// market position) using the allowance the caller has already granted.
    PerformAction {
        /// Logical position name, forwarded verbatim from the relay caller
        name: String,
        /// Market identifier, forwarded verbatim
        market_id: u64,
        /// Amount granted to the sink; upper bound of what it may pull
        amount: Uint128,
        /// Lock duration in seconds, forwarded verbatim
        lock_duration: u64,
        /// Final beneficiary of the action, forwarded verbatim
        recipient: String,
    },
}
