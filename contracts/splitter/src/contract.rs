use cosmwasm_std::{
    entry_point, to_binary, Addr, BankMsg, Binary, Coin, CosmosMsg, Deps, DepsMut, Env, Event,
    MessageInfo, Response, StdResult,
};

use crate::admin::{execute_set_administrator, is_administrator, require_administrator};
use crate::error::ContractError;
use crate::msg::{
    AdminResponse, ConfigResponse, DistributionResponse, ExecuteMsg, InstantiateMsg,
    IsAdministratorResponse, QueryMsg, SplitMsg, SplitsResponse,
};
use crate::split::{distribute, retained, validate_splits};
use crate::state::{Split, State, STATE};

use cw2::set_contract_version;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:cw-disper-splitter";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let state = State {
        admin: deps.api.addr_validate(&msg.admin)?,
        native_coin: msg.native_coin,
        splits: vec![],
    };
    STATE.save(deps.storage, &state)?;

    let res = Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", state.admin)
        .add_attribute("native_coin", state.native_coin);
    Ok(res)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Deposit {} => execute_deposit(info),
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, env, info),
        ExecuteMsg::SetSplits { splits } => execute_set_splits(deps, info, splits),
        ExecuteMsg::SetAdministrator { address } => {
            execute_set_administrator(deps, info, address)
        }
    }
}

/// Funds attached to the call are already in the contract balance.
pub fn execute_deposit(info: MessageInfo) -> Result<Response, ContractError> {
    let res = Response::new()
        .add_attribute("action", "deposit")
        .add_attribute("sender", info.sender);
    Ok(res)
}

pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let state = STATE.load(deps.storage)?;
    let balance = deps
        .querier
        .query_balance(env.contract.address, state.native_coin.to_owned())?
        .amount;

    let transfers = distribute(balance, &state.splits);
    let left = retained(balance, &transfers);

    let mut res = Response::new()
        .add_attribute("action", "withdraw")
        .add_attribute("sender", info.sender)
        .add_attribute("balance", balance)
        .add_attribute("distributed", balance - left)
        .add_attribute("retained", left);

    // the bank module rejects empty sends
    for (transfer, split) in transfers.into_iter().zip(state.splits.iter()) {
        if transfer.amount.is_zero() {
            continue;
        }
        res = res
            .add_event(
                Event::new("transfer")
                    .add_attribute("recipient", transfer.recipient.as_str())
                    .add_attribute("amount", transfer.amount)
                    .add_attribute("share", split.share.to_string()),
            )
            .add_message(CosmosMsg::Bank(BankMsg::Send {
                to_address: transfer.recipient.into(),
                amount: vec![Coin {
                    denom: state.native_coin.to_owned(),
                    amount: transfer.amount,
                }],
            }));
    }

    Ok(res)
}

pub fn execute_set_splits(
    deps: DepsMut,
    info: MessageInfo,
    splits: Vec<SplitMsg>,
) -> Result<Response, ContractError> {
    let mut state = require_administrator(deps.storage, &info.sender)?;

    let splits = splits
        .into_iter()
        .map(|split| -> StdResult<Split> {
            Ok(Split {
                recipient: deps.api.addr_validate(&split.address)?,
                share: split.pct,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;
    validate_splits(&splits)?;

    state.splits = splits;
    STATE.save(deps.storage, &state)?;

    let res = Response::new()
        .add_attribute("action", "set_splits")
        .add_attribute("sender", info.sender)
        .add_attribute("splits", state.splits.len().to_string());
    Ok(res)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Admin {} => to_binary(&query_admin(deps)?),
        QueryMsg::IsAdministrator { address } => {
            to_binary(&query_is_administrator(deps, address)?)
        }
        QueryMsg::Splits {} => to_binary(&query_splits(deps)?),
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
        QueryMsg::Distribution {} => to_binary(&query_distribution(deps, env)?),
    }
}

fn query_admin(deps: Deps) -> StdResult<AdminResponse> {
    let state = STATE.load(deps.storage)?;
    Ok(AdminResponse { admin: state.admin })
}

fn query_is_administrator(deps: Deps, address: String) -> StdResult<IsAdministratorResponse> {
    let state = STATE.load(deps.storage)?;
    let is_admin = is_administrator(&state, &Addr::unchecked(address));
    Ok(IsAdministratorResponse { is_admin })
}

fn query_splits(deps: Deps) -> StdResult<SplitsResponse> {
    let state = STATE.load(deps.storage)?;
    Ok(SplitsResponse {
        splits: state.splits,
    })
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let state = STATE.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: state.admin,
        native_coin: state.native_coin,
    })
}

fn query_distribution(deps: Deps, env: Env) -> StdResult<DistributionResponse> {
    let state = STATE.load(deps.storage)?;
    let balance = deps
        .querier
        .query_balance(env.contract.address, state.native_coin)?
        .amount;
    let transfers = distribute(balance, &state.splits);
    let retained = retained(balance, &transfers);

    Ok(DistributionResponse {
        balance,
        transfers,
        retained,
    })
}
