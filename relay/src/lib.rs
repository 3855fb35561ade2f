//! Fund Relay Contract - Forwarding Bridged Deposits into an Action Sink
//!
//! This contract custodies tokens delivered by an upstream cross-chain
//! message-delivery system and forwards them, in a single transaction,
//! into a downstream action sink under a bounded, revocable CW20 allowance.
//!
//! # Forward Flow
//! 1. The authority's delegated caller invokes `Forward`
//! 2. The relay re-checks the delegate and reads its live token balance
//! 3. It grants the sink an allowance of exactly that balance
//! 4. It invokes the sink, which pulls some or all of the allowance
//! 5. On the success reply it resets the allowance to zero
//! 6. Any residual balance is transferred to the caller-supplied recipient
//!
//! # Security
//! - Caller identity re-queried from the authority on every entry
//! - Amount derived from live balance, never caller-supplied
//! - Allowance reset unconditionally after the sink returns
//! - Any failure aborts the whole transaction with no partial state

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
