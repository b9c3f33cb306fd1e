use pinocchio::{
    account_info::AccountInfo,
    instruction::Signer,
    program_error::ProgramError,
    pubkey::{create_program_address, Pubkey},
    sysvars::{rent::Rent, Sysvar},
    ProgramResult,
};
use pinocchio_system::instructions::CreateAccount;

use crate::error::VaultError;
use crate::helpers::constant::{SYSTEM_PROGRAM_ID, TOKEN_2022_PROGRAM_ID};
use crate::ID;

pub fn next_account_info<'a, I: Iterator<Item = &'a AccountInfo>>(
    iter: &mut I,
) -> Result<&'a AccountInfo, ProgramError> {
    iter.next().ok_or(ProgramError::NotEnoughAccountKeys)
}

#[inline]
pub fn require_signer(account: &AccountInfo) -> ProgramResult {
    if !account.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }
    Ok(())
}

#[inline]
pub fn require_writable(account: &AccountInfo) -> ProgramResult {
    if !account.is_writable() {
        return Err(ProgramError::InvalidAccountData);
    }
    Ok(())
}

pub fn require_token_2022(token_program: &AccountInfo) -> ProgramResult {
    if token_program.key() != &TOKEN_2022_PROGRAM_ID {
        return Err(ProgramError::IncorrectProgramId);
    }
    Ok(())
}

pub fn require_system_program(system_program: &AccountInfo) -> ProgramResult {
    if system_program.key() != &SYSTEM_PROGRAM_ID {
        return Err(ProgramError::IncorrectProgramId);
    }
    Ok(())
}

/// Re-derive a PDA of this program from `seeds` + `bump` and compare it to `account`.
pub fn verify_pda(account: &AccountInfo, seeds: &[&[u8]], bump: u8) -> ProgramResult {
    let bump = [bump];
    let expected = match seeds {
        [a] => create_program_address(&[*a, bump.as_slice()], &ID),
        [a, b] => create_program_address(&[*a, *b, bump.as_slice()], &ID),
        _ => return Err(ProgramError::InvalidSeeds),
    }
    .map_err(|_| ProgramError::InvalidSeeds)?;
    if account.key() != &expected {
        return Err(ProgramError::InvalidSeeds);
    }
    Ok(())
}

/// System-program CreateAccount sized for `space`, funded to rent exemption by `payer`.
pub fn create_pda_account(
    payer: &AccountInfo,
    account: &AccountInfo,
    space: usize,
    owner: &Pubkey,
    signer: Signer,
) -> ProgramResult {
    if account.lamports() != 0 || !account.data_is_empty() {
        return Err(ProgramError::AccountAlreadyInitialized);
    }
    let lamports = Rent::get()?.minimum_balance(space);
    CreateAccount {
        from: payer,
        to: account,
        lamports,
        space: space as u64,
        owner,
    }
    .invoke_signed(&[signer])
}

#[inline]
pub(crate) fn checked_add(a: u64, b: u64) -> Result<u64, ProgramError> {
    a.checked_add(b)
        .ok_or_else(|| VaultError::ArithmeticOverflow.into())
}

#[inline]
pub(crate) fn checked_sub(a: u64, b: u64) -> Result<u64, ProgramError> {
    a.checked_sub(b)
        .ok_or_else(|| VaultError::ArithmeticOverflow.into())
}

#[inline]
pub fn read_u64(data: &[u8]) -> Result<u64, ProgramError> {
    let bytes: [u8; 8] = data
        .get(..8)
        .and_then(|s| s.try_into().ok())
        .ok_or(ProgramError::InvalidInstructionData)?;
    Ok(u64::from_le_bytes(bytes))
}

#[inline]
pub fn read_pubkey(data: &[u8]) -> Result<Pubkey, ProgramError> {
    data.get(..32)
        .and_then(|s| s.try_into().ok())
        .ok_or(ProgramError::InvalidInstructionData)
}
