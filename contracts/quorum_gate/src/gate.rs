use soroban_sdk::{contract, contractimpl, log, token, Address, Bytes, Env, Executable, Vec};

use crate::errors::GateError;
use crate::events::{ApprovalCancelled, Approved, Deposited, Executed, Initialized, Proposed};
use crate::receiver::ActionReceiverClient;
use crate::storage;
use crate::types::Proposal;

#[contract]
pub struct QuorumGate;

#[contractimpl]
impl QuorumGate {
    pub fn initialize(
        env: Env,
        owners: Vec<Address>,
        threshold: u32,
        native_asset: Address,
    ) -> Result<(), GateError> {
        if storage::is_initialized(&env) {
            return Err(GateError::AlreadyInitialized);
        }

        if owners.is_empty() {
            return Err(GateError::InvalidOwnerSet);
        }

        // A failed call discards the flags written so far
        storage::write_owners(&env, &owners)?;

        if threshold == 0 || threshold > owners.len() {
            return Err(GateError::InvalidThreshold);
        }

        storage::write_config(&env, threshold, &native_asset);
        storage::extend_instance(&env);

        Initialized {
            threshold,
            owner_count: owners.len(),
        }
        .publish(&env);
        log!(&env, "gate initialized", owners.len(), threshold);

        Ok(())
    }

    /// Moves `amount` of the native asset from `from` into the gate. Anyone may deposit.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), GateError> {
        storage::require_initialized(&env)?;
        from.require_auth();

        if amount < 0 {
            return Err(GateError::InvalidAmount);
        }

        if amount > 0 {
            let asset = storage::native_asset(&env)?;
            let token_client = token::Client::new(&env, &asset);
            token_client.transfer(&from, &env.current_contract_address(), &amount);
        }

        storage::extend_instance(&env);
        Deposited { from, amount }.publish(&env);

        Ok(())
    }

    pub fn propose_tx(
        env: Env,
        caller: Address,
        target: Address,
        value: i128,
        payload: Bytes,
    ) -> Result<u64, GateError> {
        Self::require_owner(&env, &caller)?;

        if value < 0 {
            return Err(GateError::InvalidAmount);
        }

        let id = storage::tx_count(&env)?;
        let proposal = Proposal {
            id,
            proposer: caller.clone(),
            target: target.clone(),
            value,
            payload,
            executed: false,
            approval_count: 0,
        };

        storage::save_tx(&env, &proposal);
        storage::set_tx_count(&env, id + 1);
        storage::extend_instance(&env);

        Proposed {
            id,
            proposer: caller,
            target,
            value,
        }
        .publish(&env);
        log!(&env, "proposal created", id, value);

        Ok(id)
    }

    pub fn approve_tx(env: Env, caller: Address, id: u64) -> Result<(), GateError> {
        Self::require_owner(&env, &caller)?;

        let mut proposal = storage::touch_tx(&env, id)?;
        if proposal.executed {
            return Err(GateError::AlreadyExecuted);
        }

        if storage::has_approval(&env, id, &caller) {
            return Err(GateError::AlreadyApproved);
        }

        storage::set_approval(&env, id, &caller);
        proposal.approval_count += 1;
        storage::save_tx(&env, &proposal);
        storage::extend_instance(&env);

        Approved { id, owner: caller }.publish(&env);
        log!(&env, "proposal approved", id, proposal.approval_count);

        Ok(())
    }

    /// Withdraws the caller's approval. Fails with `NotApproved` when there is none to withdraw.
    pub fn cancel_approval(env: Env, caller: Address, id: u64) -> Result<(), GateError> {
        Self::require_owner(&env, &caller)?;

        let mut proposal = storage::touch_tx(&env, id)?;
        if proposal.executed {
            return Err(GateError::AlreadyExecuted);
        }

        if !storage::has_approval(&env, id, &caller) {
            return Err(GateError::NotApproved);
        }

        storage::remove_approval(&env, id, &caller);
        proposal.approval_count -= 1;
        storage::save_tx(&env, &proposal);
        storage::extend_instance(&env);

        ApprovalCancelled { id, owner: caller }.publish(&env);
        log!(&env, "approval cancelled", id, proposal.approval_count);

        Ok(())
    }

    /// Runs an approved proposal.
    ///
    /// The proposal is marked executed before the external action starts, so a
    /// re-entrant call for the same id fails with `AlreadyExecuted`. Any failure
    /// of the action returns `ExternalActionFailed` and the host discards every
    /// write of this invocation, the executed flag included.
    pub fn execute_tx(env: Env, caller: Address, id: u64) -> Result<(), GateError> {
        Self::require_owner(&env, &caller)?;

        let mut proposal = storage::touch_tx(&env, id)?;
        if proposal.executed {
            return Err(GateError::AlreadyExecuted);
        }

        let threshold = storage::threshold(&env)?;
        if proposal.approval_count < threshold {
            return Err(GateError::InsufficientApprovals);
        }

        proposal.executed = true;
        storage::save_tx(&env, &proposal);

        Self::perform_action(&env, &proposal)?;

        storage::extend_instance(&env);
        Executed {
            id,
            executor: caller,
        }
        .publish(&env);
        log!(&env, "proposal executed", id);

        Ok(())
    }

    pub fn get_owners(env: Env) -> Result<Vec<Address>, GateError> {
        storage::owners(&env)
    }

    pub fn is_owner(env: Env, account: Address) -> Result<bool, GateError> {
        storage::require_initialized(&env)?;
        Ok(storage::is_owner(&env, &account))
    }

    pub fn num_required_approvals(env: Env) -> Result<u32, GateError> {
        storage::threshold(&env)
    }

    pub fn get_tx_count(env: Env) -> Result<u64, GateError> {
        storage::tx_count(&env)
    }

    pub fn get_tx(env: Env, id: u64) -> Result<Proposal, GateError> {
        storage::require_initialized(&env)?;
        storage::load_tx(&env, id)
    }

    pub fn has_approved(env: Env, id: u64, owner: Address) -> Result<bool, GateError> {
        storage::require_initialized(&env)?;
        storage::load_tx(&env, id)?;
        Ok(storage::has_approval(&env, id, &owner))
    }

    pub fn native_asset(env: Env) -> Result<Address, GateError> {
        storage::native_asset(&env)
    }

    /// Native asset held by the gate.
    pub fn balance(env: Env) -> Result<i128, GateError> {
        let asset = storage::native_asset(&env)?;
        let token_client = token::Client::new(&env, &asset);
        Ok(token_client.balance(&env.current_contract_address()))
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), GateError> {
        storage::require_initialized(env)?;
        caller.require_auth();

        if !storage::is_owner(env, caller) {
            return Err(GateError::Unauthorized);
        }
        Ok(())
    }

    fn perform_action(env: &Env, proposal: &Proposal) -> Result<(), GateError> {
        let gate = env.current_contract_address();

        if proposal.value > 0 {
            let asset = storage::native_asset(env)?;
            let token_client = token::Client::new(env, &asset);
            let transfer = token_client.try_transfer(&gate, &proposal.target, &proposal.value);
            if !matches!(transfer, Ok(Ok(()))) {
                log!(env, "value transfer failed", proposal.id);
                return Err(GateError::ExternalActionFailed);
            }
        }

        // Accounts and asset contracts take the value alone; only Wasm contracts get the hook
        let callable = matches!(proposal.target.executable(), Some(Executable::Wasm(_)));
        if callable && !proposal.payload.is_empty() {
            let receiver = ActionReceiverClient::new(env, &proposal.target);
            let call = receiver.try_on_gate_call(&gate, &proposal.value, &proposal.payload);
            if !matches!(call, Ok(Ok(()))) {
                log!(env, "target call failed", proposal.id);
                return Err(GateError::ExternalActionFailed);
            }
        }

        Ok(())
    }
}
