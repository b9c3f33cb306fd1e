use pinocchio::{account_info::AccountInfo, msg, program_error::ProgramError, ProgramResult};

/// Liveness check: no accounts, no payload, no state change.
pub fn process_initialize(_accounts: &[AccountInfo], payload: &[u8]) -> ProgramResult {
    if !payload.is_empty() {
        return Err(ProgramError::InvalidInstructionData);
    }
    msg!("Whitelist vault program is live");
    Ok(())
}
