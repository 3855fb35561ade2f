//! Fund Relay Contract - Entry Points
//!
//! Entry points dispatch to:
//! - `execute` - the forward flow handlers
//! - `query` - query handlers
//!
//! The `reply` entry point carries the second half of the forward flow: the
//! allowance reset and residue sweep run in the reply of the sink
//! invocation, inside the same transaction.

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{execute_forward, reply_grant_error, reply_revoke_error, reply_settle};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{query_config, query_forwardable_balance};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, GRANT_REPLY_ID, INVOKE_REPLY_ID,
    REVOKE_REPLY_ID,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let asset = deps.api.addr_validate(&msg.asset)?;
    let sink = deps.api.addr_validate(&msg.sink)?;
    let authority = deps.api.addr_validate(&msg.authority)?;

    if asset == sink {
        return Err(ContractError::InvalidCollaborator {
            reason: "asset and sink must be distinct contracts".to_string(),
        });
    }

    let config = Config {
        asset,
        sink,
        authority,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("asset", config.asset)
        .add_attribute("sink", config.sink)
        .add_attribute("authority", config.authority))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Forward {
            name,
            market_id,
            lock_duration,
            recipient,
        } => execute_forward(deps, env, info, name, market_id, lock_duration, recipient),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        GRANT_REPLY_ID => reply_grant_error(msg),
        INVOKE_REPLY_ID => reply_settle(deps, env),
        REVOKE_REPLY_ID => reply_revoke_error(msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::ForwardableBalance {} => {
            to_json_binary(&query_forwardable_balance(deps, &env.contract.address)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
