use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Sender is not the administrator")]
    NotAdmin {},

    #[error("Invalid splits: shares sum to {total} per mille, expected 1000")]
    InvalidSplits { total: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            "Sender is not the administrator",
            ContractError::NotAdmin {}.to_string()
        );
        assert_eq!(
            "Invalid splits: shares sum to 1001 per mille, expected 1000",
            ContractError::InvalidSplits { total: 1001 }.to_string()
        );
        let err: ContractError = StdError::generic_err("boom").into();
        assert_eq!("Generic error: boom", err.to_string());
    }
}
