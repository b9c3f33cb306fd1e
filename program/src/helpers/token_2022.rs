//! Token-2022 plumbing: raw CPI builders for the handful of instructions the
//! vault issues, and read-only views over token account bytes.
//!
//! `pinocchio-token` only targets the legacy token program id, so the
//! instruction bytes for Token-2022 are laid out here by hand.

use pinocchio::{
    account_info::AccountInfo,
    cpi::{invoke, invoke_signed},
    instruction::{AccountMeta, Instruction, Signer},
    program_error::ProgramError,
    pubkey::Pubkey,
    ProgramResult,
};

use crate::helpers::constant::*;

pub fn initialize_metadata_pointer(
    mint: &AccountInfo,
    authority: &Pubkey,
    metadata_address: &Pubkey,
) -> ProgramResult {
    let mut data = [0u8; 66];
    data[0] = TOKEN_IX_METADATA_POINTER_EXTENSION;
    data[1] = EXTENSION_IX_INITIALIZE;
    data[2..34].copy_from_slice(authority);
    data[34..66].copy_from_slice(metadata_address);

    let accounts = [AccountMeta::writable(mint.key())];
    let ix = Instruction {
        program_id: &TOKEN_2022_PROGRAM_ID,
        accounts: &accounts,
        data: &data,
    };
    invoke(&ix, &[mint])
}

pub fn initialize_transfer_hook(
    mint: &AccountInfo,
    authority: &Pubkey,
    hook_program_id: &Pubkey,
) -> ProgramResult {
    let mut data = [0u8; 66];
    data[0] = TOKEN_IX_TRANSFER_HOOK_EXTENSION;
    data[1] = EXTENSION_IX_INITIALIZE;
    data[2..34].copy_from_slice(authority);
    data[34..66].copy_from_slice(hook_program_id);

    let accounts = [AccountMeta::writable(mint.key())];
    let ix = Instruction {
        program_id: &TOKEN_2022_PROGRAM_ID,
        accounts: &accounts,
        data: &data,
    };
    invoke(&ix, &[mint])
}

/// InitializeMint2 with no freeze authority.
pub fn initialize_mint2(
    mint: &AccountInfo,
    mint_authority: &Pubkey,
    decimals: u8,
) -> ProgramResult {
    // [tag, decimals, mint_authority, freeze_authority COption tag (None)]
    let mut data = [0u8; 35];
    data[0] = TOKEN_IX_INITIALIZE_MINT_2;
    data[1] = decimals;
    data[2..34].copy_from_slice(mint_authority);

    let accounts = [AccountMeta::writable(mint.key())];
    let ix = Instruction {
        program_id: &TOKEN_2022_PROGRAM_ID,
        accounts: &accounts,
        data: &data,
    };
    invoke(&ix, &[mint])
}

pub fn initialize_account3(
    account: &AccountInfo,
    mint: &AccountInfo,
    owner: &Pubkey,
) -> ProgramResult {
    let mut data = [0u8; 33];
    data[0] = TOKEN_IX_INITIALIZE_ACCOUNT_3;
    data[1..33].copy_from_slice(owner);

    let accounts = [
        AccountMeta::writable(account.key()),
        AccountMeta::readonly(mint.key()),
    ];
    let ix = Instruction {
        program_id: &TOKEN_2022_PROGRAM_ID,
        accounts: &accounts,
        data: &data,
    };
    invoke(&ix, &[account, mint])
}

pub fn mint_to(
    mint: &AccountInfo,
    destination: &AccountInfo,
    authority: &AccountInfo,
    amount: u64,
    signer: Signer,
) -> ProgramResult {
    let mut data = [0u8; 9];
    data[0] = TOKEN_IX_MINT_TO;
    data[1..9].copy_from_slice(&amount.to_le_bytes());

    let accounts = [
        AccountMeta::writable(mint.key()),
        AccountMeta::writable(destination.key()),
        AccountMeta::readonly_signer(authority.key()),
    ];
    let ix = Instruction {
        program_id: &TOKEN_2022_PROGRAM_ID,
        accounts: &accounts,
        data: &data,
    };
    invoke_signed(&ix, &[mint, destination, authority], &[signer])
}

/// Approve `delegate` to move `amount` out of `source`, with `owner` signing as a PDA.
pub fn approve(
    source: &AccountInfo,
    delegate: &AccountInfo,
    owner: &AccountInfo,
    amount: u64,
    signer: Signer,
) -> ProgramResult {
    let mut data = [0u8; 9];
    data[0] = TOKEN_IX_APPROVE;
    data[1..9].copy_from_slice(&amount.to_le_bytes());

    let accounts = [
        AccountMeta::writable(source.key()),
        AccountMeta::readonly(delegate.key()),
        AccountMeta::readonly_signer(owner.key()),
    ];
    let ix = Instruction {
        program_id: &TOKEN_2022_PROGRAM_ID,
        accounts: &accounts,
        data: &data,
    };
    invoke_signed(&ix, &[source, delegate, owner], &[signer])
}

const ACCOUNT_TYPE_ACCOUNT: u8 = 2;
const ACCOUNT_STATE_UNINITIALIZED: u8 = 0;

/// Borrowed view over a Token-2022 token account's bytes.
pub struct TokenAccountView<'a> {
    data: &'a [u8],
}

impl<'a> TokenAccountView<'a> {
    pub fn new(data: &'a [u8]) -> Result<Self, ProgramError> {
        if data.len() < BASE_ACCOUNT_LEN || data[108] == ACCOUNT_STATE_UNINITIALIZED {
            return Err(ProgramError::InvalidAccountData);
        }
        Ok(Self { data })
    }

    pub fn mint(&self) -> &'a [u8] {
        &self.data[0..32]
    }

    pub fn owner(&self) -> &'a [u8] {
        &self.data[32..64]
    }

    pub fn amount(&self) -> u64 {
        read_le_u64(&self.data[64..72])
    }

    /// COption<Pubkey> at 72..108.
    pub fn delegate(&self) -> Option<&'a [u8]> {
        match self.data[72..76] {
            [1, 0, 0, 0] => Some(&self.data[76..108]),
            _ => None,
        }
    }

    /// Zero when no delegate is set.
    pub fn delegated_amount(&self) -> u64 {
        read_le_u64(&self.data[121..129])
    }

    /// Value of the TransferHookAccount `transferring` flag.
    pub fn transferring(&self) -> Result<bool, ProgramError> {
        let value = self
            .extension(EXT_TRANSFER_HOOK_ACCOUNT)?
            .first()
            .ok_or(ProgramError::InvalidAccountData)?;
        Ok(*value != 0)
    }

    fn extension(&self, extension_type: u16) -> Result<&'a [u8], ProgramError> {
        let data = self.data;
        if data.len() <= BASE_ACCOUNT_LEN || data[BASE_ACCOUNT_LEN] != ACCOUNT_TYPE_ACCOUNT {
            return Err(ProgramError::InvalidAccountData);
        }

        let mut offset = BASE_ACCOUNT_LEN + ACCOUNT_TYPE_LEN;
        while offset + TLV_HEADER_LEN <= data.len() {
            let ty = u16::from_le_bytes([data[offset], data[offset + 1]]);
            let len = u16::from_le_bytes([data[offset + 2], data[offset + 3]]) as usize;
            // Uninitialized marks the end of the written entries
            if ty == 0 {
                break;
            }
            let start = offset + TLV_HEADER_LEN;
            let end = start + len;
            if end > data.len() {
                return Err(ProgramError::InvalidAccountData);
            }
            if ty == extension_type {
                return Ok(&data[start..end]);
            }
            offset = end;
        }
        Err(ProgramError::InvalidAccountData)
    }
}

#[inline]
fn read_le_u64(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(bytes);
    u64::from_le_bytes(buf)
}
