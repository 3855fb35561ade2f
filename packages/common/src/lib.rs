//! Common - Shared Interface Types for the Fund Relay Contracts
//!
//! This package defines the message types of the relay's external
//! collaborators: the downstream action sink and the authority contract
//! that reports the currently delegated caller. Both the relay and the
//! integration test mocks speak these types.

pub mod authority;
pub mod sink;

pub use authority::{AuthorityQueryMsg, DelegateResponse};
pub use sink::SinkExecuteMsg;
