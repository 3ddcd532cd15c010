pub mod admin;
pub mod contract;
pub mod error;
pub mod msg;
pub mod split;
pub mod state;

pub use crate::error::ContractError;
