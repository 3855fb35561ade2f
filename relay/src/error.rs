//! Error types for the fund relay contract.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: caller is not the authority's current delegate")]
    Unauthorized,

    #[error("Nothing to forward: relay holds no tokens")]
    NothingToForward,

    #[error("Grant failed: {reason}")]
    GrantFailed { reason: String },

    #[error("Revoke failed: {reason}")]
    RevokeFailed { reason: String },

    #[error("Invalid collaborator: {reason}")]
    InvalidCollaborator { reason: String },

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },
}
