use soroban_sdk::{contracttype, Address, Bytes};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Owners,
    Owner(Address),
    Threshold,
    NativeAsset,
    TxCount,
    Tx(u64),
    Approval(u64, Address),
}

/// A proposed external action: move `value` of the native asset to `target`
/// and, when `payload` is non-empty, hand it to the target's receiver hook.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub proposer: Address,
    pub target: Address,
    pub value: i128,
    pub payload: Bytes,
    pub executed: bool,
    pub approval_count: u32,
}
