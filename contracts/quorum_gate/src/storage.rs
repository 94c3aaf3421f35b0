use soroban_sdk::{Address, Env, Vec};

use crate::errors::GateError;
use crate::types::{DataKey, Proposal};

const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn require_initialized(env: &Env) -> Result<(), GateError> {
    if !is_initialized(env) {
        return Err(GateError::NotInitialized);
    }
    Ok(())
}

/// Sets one membership flag per owner, failing on the first repeated address.
pub fn write_owners(env: &Env, owners: &Vec<Address>) -> Result<(), GateError> {
    let instance = env.storage().instance();
    for owner in owners.iter() {
        let key = DataKey::Owner(owner);
        if instance.has(&key) {
            return Err(GateError::InvalidOwnerSet);
        }
        instance.set(&key, &true);
    }
    instance.set(&DataKey::Owners, owners);
    Ok(())
}

/// Writes the rest of the immutable configuration once the owners are stored.
pub fn write_config(env: &Env, threshold: u32, native_asset: &Address) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Initialized, &true);
    instance.set(&DataKey::Threshold, &threshold);
    instance.set(&DataKey::NativeAsset, native_asset);
    instance.set(&DataKey::TxCount, &0u64);
}

pub fn owners(env: &Env) -> Result<Vec<Address>, GateError> {
    env.storage()
        .instance()
        .get(&DataKey::Owners)
        .ok_or(GateError::NotInitialized)
}

pub fn is_owner(env: &Env, account: &Address) -> bool {
    env.storage()
        .instance()
        .has(&DataKey::Owner(account.clone()))
}

pub fn threshold(env: &Env) -> Result<u32, GateError> {
    env.storage()
        .instance()
        .get(&DataKey::Threshold)
        .ok_or(GateError::NotInitialized)
}

pub fn native_asset(env: &Env) -> Result<Address, GateError> {
    env.storage()
        .instance()
        .get(&DataKey::NativeAsset)
        .ok_or(GateError::NotInitialized)
}

pub fn tx_count(env: &Env) -> Result<u64, GateError> {
    env.storage()
        .instance()
        .get(&DataKey::TxCount)
        .ok_or(GateError::NotInitialized)
}

pub fn set_tx_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::TxCount, &count);
}

pub fn load_tx(env: &Env, id: u64) -> Result<Proposal, GateError> {
    env.storage()
        .persistent()
        .get(&DataKey::Tx(id))
        .ok_or(GateError::NotFound)
}

/// Loads a proposal for a state-changing call and extends the TTL of the
/// proposal and of every approval recorded on it.
pub fn touch_tx(env: &Env, id: u64) -> Result<Proposal, GateError> {
    let proposal = load_tx(env, id)?;
    extend_persistent(env, &DataKey::Tx(id));

    for owner in owners(env)?.iter() {
        if has_approval(env, id, &owner) {
            extend_persistent(env, &DataKey::Approval(id, owner));
        }
    }
    Ok(proposal)
}

pub fn save_tx(env: &Env, proposal: &Proposal) {
    let key = DataKey::Tx(proposal.id);
    env.storage().persistent().set(&key, proposal);
    extend_persistent(env, &key);
}

pub fn has_approval(env: &Env, id: u64, owner: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Approval(id, owner.clone()))
}

pub fn set_approval(env: &Env, id: u64, owner: &Address) {
    let key = DataKey::Approval(id, owner.clone());
    env.storage().persistent().set(&key, &true);
    extend_persistent(env, &key);
}

pub fn remove_approval(env: &Env, id: u64, owner: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Approval(id, owner.clone()));
}
