//! Authority contract interface.
//!
//! The authority reports the single address currently delegated to trigger
//! the relay. The delegate can rotate over time, so the relay queries this
//! on every privileged call instead of caching the address.

use cosmwasm_schema::{cw_serde, QueryResponses};

/// Query messages the relay sends to the authority contract.
#[cw_serde]
#[derive(QueryResponses)]
pub enum AuthorityQueryMsg {
    /// Returns the currently delegated caller address.
    #[returns(DelegateResponse)]
    Delegate {},
}

/// Response to [`AuthorityQueryMsg::Delegate`].
#[cw_serde]
pub struct DelegateResponse {
    /// Address currently authorized to invoke the relay
    pub delegate: String,
}
