use soroban_sdk::{contractclient, Address, Bytes, Env};

/// Hook a Wasm target contract implements to receive a non-empty proposal payload.
///
/// Account and asset-contract targets never see the payload; the value
/// transfer is the whole action for them.
///
/// The gate transfers the proposal value before invoking the hook, so the
/// target already holds the funds when `on_gate_call` runs. A hook that traps
/// or returns an error fails the whole execution.
#[contractclient(name = "ActionReceiverClient")]
pub trait ActionReceiver {
    fn on_gate_call(env: Env, gate: Address, value: i128, payload: Bytes);
}
