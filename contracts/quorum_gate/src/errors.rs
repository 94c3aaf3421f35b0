use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum GateError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidOwnerSet = 3,
    InvalidThreshold = 4,
    Unauthorized = 5,
    NotFound = 6,
    AlreadyApproved = 7,
    NotApproved = 8,
    AlreadyExecuted = 9,
    InsufficientApprovals = 10,
    InvalidAmount = 11,
    ExternalActionFailed = 12,
}
