use pinocchio::program_error::ProgramError;

/// Vault and transfer-hook failures, surfaced as `ProgramError::Custom(code)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum VaultError {
    AlreadyWhitelisted = 0,
    NotWhitelisted = 1,
    ExceedsLimit = 2,
    InsufficientFunds = 3,
    ArithmeticOverflow = 4,
    Unauthorized = 5,
    NotTransferring = 6,
    DepositNotReceived = 7,
    PendingWithdrawal = 8,
}

// map internal errors to standard program error
pub fn to_program_error(err: VaultError) -> ProgramError {
    ProgramError::Custom(err as u32)
}

impl From<VaultError> for ProgramError {
    fn from(err: VaultError) -> Self {
        to_program_error(err)
    }
}
