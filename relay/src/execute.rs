//! Forward flow handlers.
//!
//! `Forward` runs as one atomic transaction in three stages:
//! 1. `execute_forward` — access guard, balance measurement, allowance grant,
//!    sink invocation (both as submessages)
//! 2. `reply_settle` — after the sink returns, reset the allowance to zero
//!    and sweep any residual balance to the recipient
//! 3. `reply_grant_error` / `reply_revoke_error` — relabel asset rejections
//!    as `GrantFailed` / `RevokeFailed`; the returned error aborts the whole
//!    transaction

use cosmwasm_std::{
    to_json_binary, DepsMut, Env, MessageInfo, Reply, Response, SubMsg, SubMsgResult, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use common::{AuthorityQueryMsg, DelegateResponse, SinkExecuteMsg};

use crate::error::ContractError;
use crate::query::{query_asset_balance, query_sink_allowance};
use crate::state::{
    PendingForward, CONFIG, GRANT_REPLY_ID, INVOKE_REPLY_ID, PENDING_FORWARD, REVOKE_REPLY_ID,
};

// ============================================================================
// Forward — Delegated caller only
// ============================================================================

/// Forward the relay's entire balance into the action sink.
///
/// The amount is read from the live CW20 balance, never from the caller:
/// the upstream delivery size is only known at execution time.
pub fn execute_forward(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    name: String,
    market_id: u64,
    lock_duration: u64,
    recipient: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    // Access guard: the delegate can rotate, so query the authority on every
    // entry instead of caching the address.
    let delegate: DelegateResponse = deps
        .querier
        .query_wasm_smart(&config.authority, &AuthorityQueryMsg::Delegate {})?;
    let delegate = deps.api.addr_validate(&delegate.delegate)?;
    if info.sender != delegate {
        return Err(ContractError::Unauthorized);
    }

    let recipient_addr = deps.api.addr_validate(&recipient)?;

    let amount = query_asset_balance(deps.as_ref(), &config.asset, &env.contract.address)?;
    if amount.is_zero() {
        return Err(ContractError::NothingToForward);
    }

    // A residual allowance from an earlier run would silently widen the
    // grant below. Checked, not assumed absent.
    let residual = query_sink_allowance(
        deps.as_ref(),
        &config.asset,
        &env.contract.address,
        &config.sink,
    )?;
    if !residual.is_zero() {
        return Err(ContractError::GrantFailed {
            reason: format!("residual allowance of {} already granted to sink", residual),
        });
    }

    PENDING_FORWARD.save(
        deps.storage,
        &PendingForward {
            recipient: recipient_addr.clone(),
            granted: amount,
        },
    )?;

    let grant = SubMsg::reply_on_error(
        WasmMsg::Execute {
            contract_addr: config.asset.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::IncreaseAllowance {
                spender: config.sink.to_string(),
                amount,
                expires: None,
            })?,
            funds: vec![],
        },
        GRANT_REPLY_ID,
    );

    // reply_on_success: a sink failure propagates unhandled and aborts the
    // transaction; a success continues in `reply_settle`.
    let invoke = SubMsg::reply_on_success(
        WasmMsg::Execute {
            contract_addr: config.sink.to_string(),
            msg: to_json_binary(&SinkExecuteMsg::PerformAction {
                name: name.clone(),
                market_id,
                amount,
                lock_duration,
                recipient: recipient_addr.to_string(),
            })?,
            funds: vec![],
        },
        INVOKE_REPLY_ID,
    );

    Ok(Response::new()
        .add_submessage(grant)
        .add_submessage(invoke)
        .add_attribute("action", "forward")
        .add_attribute("name", name)
        .add_attribute("market_id", market_id.to_string())
        .add_attribute("lock_duration", lock_duration.to_string())
        .add_attribute("amount", amount)
        .add_attribute("recipient", recipient_addr))
}

// ============================================================================
// Settlement — after the sink returns
// ============================================================================

/// Reset the sink's allowance to zero and sweep the residual balance.
///
/// Allowance and balance are re-queried from the asset here: the sink may
/// have pulled any portion of the grant, and only live state is trusted.
pub fn reply_settle(deps: DepsMut, env: Env) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let pending = PENDING_FORWARD.load(deps.storage)?;
    PENDING_FORWARD.remove(deps.storage);

    let residual_grant = query_sink_allowance(
        deps.as_ref(),
        &config.asset,
        &env.contract.address,
        &config.sink,
    )?;
    let residue = query_asset_balance(deps.as_ref(), &config.asset, &env.contract.address)?;
    let consumed = pending.granted.saturating_sub(residual_grant);

    // Always sent, even when the sink consumed everything: the allowance is
    // reset to zero on every exit path rather than only when a residual is
    // detected.
    let revoke = SubMsg::reply_on_error(
        WasmMsg::Execute {
            contract_addr: config.asset.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::DecreaseAllowance {
                spender: config.sink.to_string(),
                amount: residual_grant,
                expires: None,
            })?,
            funds: vec![],
        },
        REVOKE_REPLY_ID,
    );

    let mut response = Response::new().add_submessage(revoke);

    // Fail open on partial consumption: a sink that pulls less than the
    // grant is a normal outcome, and the leftover goes to the recipient.
    if !residue.is_zero() {
        response = response.add_message(WasmMsg::Execute {
            contract_addr: config.asset.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                recipient: pending.recipient.to_string(),
                amount: residue,
            })?,
            funds: vec![],
        });
    }

    Ok(response
        .add_attribute("action", "forward_settle")
        .add_attribute("granted", pending.granted)
        .add_attribute("consumed", consumed)
        .add_attribute("residue", residue)
        .add_attribute("recipient", pending.recipient))
}

// ============================================================================
// Error replies
// ============================================================================

/// The asset rejected the allowance grant.
pub fn reply_grant_error(msg: Reply) -> Result<Response, ContractError> {
    let reason = match msg.result {
        SubMsgResult::Err(reason) => reason,
        // reply_on_error is never dispatched on success
        SubMsgResult::Ok(_) => return Ok(Response::new()),
    };
    Err(ContractError::GrantFailed { reason })
}

/// The asset rejected resetting the allowance after the sink call.
pub fn reply_revoke_error(msg: Reply) -> Result<Response, ContractError> {
    let reason = match msg.result {
        SubMsgResult::Err(reason) => reason,
        SubMsgResult::Ok(_) => return Ok(Response::new()),
    };
    Err(ContractError::RevokeFailed { reason })
}
