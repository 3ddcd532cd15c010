use cosmwasm_std::{Addr, DepsMut, MessageInfo, Response, Storage};

use crate::error::ContractError;
use crate::state::{State, STATE};

pub fn is_administrator(state: &State, candidate: &Addr) -> bool {
    state.admin == *candidate
}

/// Loads the state and fails with `NotAdmin` unless `caller` holds the admin role.
/// Admin-only handlers call this before anything else.
pub fn require_administrator(
    storage: &dyn Storage,
    caller: &Addr,
) -> Result<State, ContractError> {
    let state = STATE.load(storage)?;
    if !is_administrator(&state, caller) {
        return Err(ContractError::NotAdmin {});
    }
    Ok(state)
}

/// The new admin is only checked for being a well formed address.
pub fn execute_set_administrator(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let mut state = require_administrator(deps.storage, &info.sender)?;

    let new_admin = deps.api.addr_validate(&address)?;
    state.admin = new_admin.clone();
    STATE.save(deps.storage, &state)?;

    let res = Response::new()
        .add_attribute("action", "set_administrator")
        .add_attribute("sender", info.sender)
        .add_attribute("admin", new_admin);
    Ok(res)
}
