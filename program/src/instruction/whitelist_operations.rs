use pinocchio::{
    account_info::AccountInfo, msg, program_error::ProgramError, pubkey::{self, Pubkey},
    ProgramResult,
};

use crate::{
    error::VaultError,
    helpers::{next_account_info, read_pubkey},
    state::{VaultState, Whitelist},
};

pub fn parse_user(payload: &[u8]) -> Result<Pubkey, ProgramError> {
    if payload.len() != 32 {
        return Err(ProgramError::InvalidInstructionData);
    }
    read_pubkey(payload)
}

/// Resolve the whitelist record an admin operation targets.
///
/// Accounts:
/// 0. `[writable, signer]` Admin (must be the vault authority)
/// 1. `[writable]` Whitelist PDA `["whitelist", user]`
/// 2. `[]` Vault state
/// 3. `[]` User wallet
/// 4. `[]` System program
fn admin_whitelist<'a>(
    accounts: &'a [AccountInfo],
    user: &Pubkey,
) -> Result<&'a mut Whitelist, ProgramError> {
    let iter = &mut accounts.iter();
    let admin = next_account_info(iter)?;
    let whitelist = next_account_info(iter)?;
    let vault_state = next_account_info(iter)?;
    let user_info = next_account_info(iter)?;

    VaultState::load_checked(vault_state)?.require_authority(admin)?;

    if user_info.key() != user {
        return Err(ProgramError::InvalidArgument);
    }

    Whitelist::load_checked_mut(whitelist, user)
}

pub fn process_add_to_whitelist(accounts: &[AccountInfo], user: Pubkey) -> ProgramResult {
    let record = admin_whitelist(accounts, &user)?;
    if record.is_whitelisted() {
        return Err(VaultError::AlreadyWhitelisted.into());
    }
    record.set_whitelisted(true);

    msg!("Whitelisted:");
    pubkey::log(&user);
    Ok(())
}

pub fn process_remove_from_whitelist(accounts: &[AccountInfo], user: Pubkey) -> ProgramResult {
    let record = admin_whitelist(accounts, &user)?;
    if !record.is_whitelisted() {
        return Err(VaultError::NotWhitelisted.into());
    }
    record.set_whitelisted(false);

    msg!("Removed from whitelist:");
    pubkey::log(&user);
    Ok(())
}
