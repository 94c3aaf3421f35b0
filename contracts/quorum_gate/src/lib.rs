#![no_std]

mod errors;
mod events;
mod gate;
mod receiver;
mod storage;
mod types;

pub use crate::errors::GateError;
pub use crate::gate::{QuorumGate, QuorumGateClient};
pub use crate::receiver::{ActionReceiver, ActionReceiverClient};
pub use crate::types::Proposal;
