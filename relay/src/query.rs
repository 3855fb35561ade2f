//! Query message handlers and live-state lookups against the asset.

use cosmwasm_std::{Addr, Deps, StdResult, Uint128};
use cw20::{AllowanceResponse, BalanceResponse, Cw20QueryMsg};

use crate::msg::{ConfigResponse, ForwardableBalanceResponse};
use crate::state::CONFIG;

/// Query the collaborator addresses.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        asset: config.asset,
        sink: config.sink,
        authority: config.authority,
    })
}

/// Query the relay's current asset balance (what the next forward would derive).
pub fn query_forwardable_balance(
    deps: Deps,
    relay: &Addr,
) -> StdResult<ForwardableBalanceResponse> {
    let config = CONFIG.load(deps.storage)?;
    let amount = query_asset_balance(deps, &config.asset, relay)?;
    Ok(ForwardableBalanceResponse { amount })
}

/// Live CW20 balance of `holder`.
pub fn query_asset_balance(deps: Deps, asset: &Addr, holder: &Addr) -> StdResult<Uint128> {
    let response: BalanceResponse = deps.querier.query_wasm_smart(
        asset,
        &Cw20QueryMsg::Balance {
            address: holder.to_string(),
        },
    )?;
    Ok(response.balance)
}

/// Live CW20 allowance from `owner` to `spender`.
pub fn query_sink_allowance(
    deps: Deps,
    asset: &Addr,
    owner: &Addr,
    spender: &Addr,
) -> StdResult<Uint128> {
    let response: AllowanceResponse = deps.querier.query_wasm_smart(
        asset,
        &Cw20QueryMsg::Allowance {
            owner: owner.to_string(),
            spender: spender.to_string(),
        },
    )?;
    Ok(response.allowance)
}
