//! Implementation blocks for the client state machine.

pub mod client_state;
pub mod master_reference;
