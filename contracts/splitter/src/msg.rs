use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::split::Transfer;
use crate::state::Split;

#[cw_serde]
pub struct InstantiateMsg {
    /// Address allowed to update splits and hand over the admin role
    pub admin: String,
    /// Denom distributed on withdraw
    pub native_coin: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Accept funds into the contract balance
    Deposit {},
    /// Send the whole balance to the recipients by their shares
    Withdraw {},
    /// Only admin. Replace the split table, shares must sum to 1000
    SetSplits { splits: Vec<SplitMsg> },
    /// Only admin. Hand over the admin role
    SetAdministrator { address: String },
}

#[cw_serde]
pub struct SplitMsg {
    pub address: String,
    /// Share in per mille
    pub pct: u32,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(AdminResponse)]
    Admin {},
    #[returns(IsAdministratorResponse)]
    IsAdministrator { address: String },
    /// Returns the split table in order
    #[returns(SplitsResponse)]
    Splits {},
    #[returns(ConfigResponse)]
    Config {},
    /// Transfers a withdraw would emit with the current balance
    #[returns(DistributionResponse)]
    Distribution {},
}

#[cw_serde]
pub struct AdminResponse {
    pub admin: Addr,
}

#[cw_serde]
pub struct IsAdministratorResponse {
    pub is_admin: bool,
}

#[cw_serde]
pub struct SplitsResponse {
    pub splits: Vec<Split>,
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub native_coin: String,
}

#[cw_serde]
pub struct DistributionResponse {
    pub balance: Uint128,
    pub transfers: Vec<Transfer>,
    pub retained: Uint128,
}
