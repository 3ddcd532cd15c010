//! Split table validation and balance distribution.
//!
//! Every share is applied to the same balance snapshot and rounded down on its
//! own, so the distributed total can be lower than the balance. That dust is
//! not redistributed; it stays in the contract until a later withdraw.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};

use crate::error::ContractError;
use crate::state::Split;

/// Shares of a split table must add up to exactly this many units.
pub const PER_MILLE: u32 = 1000;

#[cw_serde]
pub struct Transfer {
    pub recipient: Addr,
    pub amount: Uint128,
}

/// Sums the shares in table order and fails unless the total is 1000.
/// An empty table sums to zero and is rejected.
pub fn validate_splits(splits: &[Split]) -> Result<(), ContractError> {
    let total: u64 = splits.iter().map(|split| u64::from(split.share)).sum();
    if total != u64::from(PER_MILLE) {
        return Err(ContractError::InvalidSplits { total });
    }
    Ok(())
}

/// One transfer per entry, in table order, each `floor(balance * share / 1000)`.
/// Zero amounts are kept so the result lines up with the table.
///
/// `splits` must have passed `validate_splits`: a share above 1000 can push an
/// amount past `Uint128::MAX`, and `multiply_ratio` panics on that.
pub(crate) fn distribute(balance: Uint128, splits: &[Split]) -> Vec<Transfer> {
    splits
        .iter()
        .map(|split| Transfer {
            recipient: split.recipient.clone(),
            // multiply_ratio widens to 256 bits, so balance * share cannot overflow
            amount: balance.multiply_ratio(split.share, PER_MILLE),
        })
        .collect()
}

/// Part of `balance` left over after `transfers` computed by `distribute`.
pub(crate) fn retained(balance: Uint128, transfers: &[Transfer]) -> Uint128 {
    let distributed = transfers
        .iter()
        .fold(Uint128::zero(), |total, transfer| total + transfer.amount);
    balance.saturating_sub(distributed)
}
