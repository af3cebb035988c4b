use cosmwasm_std::{Addr, OverflowError, StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

/// ## Description
/// This enum describes rescue contract errors!
#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Doubling assets in rescue request")]
    DoublingAssets {},

    #[error("Desired amount for {token} must exceed the pair's stuck balance: desired {desired}, stuck {stuck}")]
    InsufficientDesiredAmount {
        token: Addr,
        desired: Uint128,
        stuck: Uint128,
    },

    #[error("Invalid native amount: expected {expected}, actual {actual}")]
    InvalidNativeAmount { expected: Uint128, actual: Uint128 },

    #[error("Cannot migrate from different contract type: {previous_contract}")]
    CannotMigrate { previous_contract: String },

    #[error("Semver parsing error: {0}")]
    SemVer(String),
}

impl From<OverflowError> for ContractError {
    fn from(o: OverflowError) -> Self {
        StdError::from(o).into()
    }
}

impl From<semver::Error> for ContractError {
    fn from(err: semver::Error) -> Self {
        Self::SemVer(err.to_string())
    }
}
