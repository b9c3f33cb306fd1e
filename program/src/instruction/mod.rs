use pinocchio::program_error::ProgramError;
use shank::ShankInstruction;

use crate::helpers::EXECUTE_DISCRIMINATOR;

pub mod initialize;
pub use initialize::*;

pub mod initialize_vault;
pub use initialize_vault::*;

pub mod initialize_whitelist;
pub use initialize_whitelist::*;

pub mod whitelist_operations;
pub use whitelist_operations::*;

pub mod initialize_extra_account_meta_list;
pub use initialize_extra_account_meta_list::*;

pub mod deposit;
pub use deposit::*;

pub mod withdraw;
pub use withdraw::*;

pub mod transfer_hook;
pub use transfer_hook::*;

#[derive(ShankInstruction, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum VaultInstruction {
    /// No-op liveness check; takes no accounts.
    Initialize,

    #[account(0, writable, signer, name = "authority", desc = "Vault admin, pays for every account")]
    #[account(1, writable, name = "mint", desc = "Mint PDA [\"mint\"]")]
    #[account(2, name = "metadata", desc = "Metadata PDA [\"metadata\"]")]
    #[account(3, writable, name = "vault", desc = "Vault token account PDA [\"vault\", mint]")]
    #[account(4, writable, name = "vault_state", desc = "Vault state PDA [\"vault_state\"]")]
    #[account(5, name = "token_program", desc = "Token-2022")]
    #[account(6, name = "system_program", desc = "System program")]
    InitializeVault,

    #[account(0, writable, signer, name = "admin", desc = "Vault authority, pays for the record")]
    #[account(1, writable, name = "whitelist", desc = "Whitelist PDA [\"whitelist\", user]")]
    #[account(2, name = "vault_state", desc = "Vault state PDA")]
    #[account(3, name = "system_program", desc = "System program")]
    InitializeWhitelist,

    #[account(0, writable, signer, name = "admin", desc = "Vault authority")]
    #[account(1, writable, name = "whitelist", desc = "Whitelist PDA [\"whitelist\", user]")]
    #[account(2, name = "vault_state", desc = "Vault state PDA")]
    #[account(3, name = "user", desc = "Whitelisted wallet")]
    #[account(4, name = "system_program", desc = "System program")]
    AddToWhitelist,

    #[account(0, writable, signer, name = "admin", desc = "Vault authority")]
    #[account(1, writable, name = "whitelist", desc = "Whitelist PDA [\"whitelist\", user]")]
    #[account(2, name = "vault_state", desc = "Vault state PDA")]
    #[account(3, name = "user", desc = "Whitelisted wallet")]
    #[account(4, name = "system_program", desc = "System program")]
    RemoveFromWhitelist,

    #[account(0, writable, signer, name = "payer", desc = "Pays for the list account")]
    #[account(1, writable, name = "extra_account_meta_list", desc = "PDA [\"extra-account-metas\", mint]")]
    #[account(2, name = "mint", desc = "Mint carrying the transfer hook")]
    #[account(3, name = "system_program", desc = "System program")]
    InitializeExtraAccountMetaList,

    #[account(0, writable, signer, name = "user", desc = "Depositor")]
    #[account(1, name = "mint", desc = "Vault mint")]
    #[account(2, writable, name = "user_token_account", desc = "Depositor's token account")]
    #[account(3, writable, name = "vault", desc = "Vault token account")]
    #[account(4, writable, name = "vault_state", desc = "Vault state PDA")]
    #[account(5, writable, name = "whitelist", desc = "Depositor's whitelist PDA")]
    #[account(6, name = "token_program", desc = "Token-2022")]
    Deposit,

    #[account(0, writable, signer, name = "user", desc = "Withdrawer, becomes the vault delegate")]
    #[account(1, name = "mint", desc = "Vault mint")]
    #[account(2, writable, name = "vault", desc = "Vault token account")]
    #[account(3, writable, name = "vault_state", desc = "Vault state PDA")]
    #[account(4, writable, name = "whitelist", desc = "Withdrawer's whitelist PDA")]
    #[account(5, name = "token_program", desc = "Token-2022")]
    Withdraw,

    /// SPL transfer-hook Execute; decoded from its 8-byte discriminator.
    #[account(0, name = "source_token", desc = "Source token account")]
    #[account(1, name = "mint", desc = "Mint")]
    #[account(2, name = "destination_token", desc = "Destination token account")]
    #[account(3, name = "owner", desc = "Source owner or delegate")]
    #[account(4, name = "extra_account_meta_list", desc = "PDA [\"extra-account-metas\", mint]")]
    #[account(5, name = "source_whitelist", desc = "Whitelist PDA of the source owner")]
    #[account(6, name = "dest_whitelist", desc = "Whitelist PDA of the destination owner")]
    TransferHook,
}

impl TryFrom<&u8> for VaultInstruction {
    type Error = ProgramError;

    fn try_from(value: &u8) -> Result<Self, Self::Error> {
        match *value {
            0 => Ok(VaultInstruction::Initialize),
            1 => Ok(VaultInstruction::InitializeVault),
            2 => Ok(VaultInstruction::InitializeWhitelist),
            3 => Ok(VaultInstruction::AddToWhitelist),
            4 => Ok(VaultInstruction::RemoveFromWhitelist),
            5 => Ok(VaultInstruction::InitializeExtraAccountMetaList),
            6 => Ok(VaultInstruction::Deposit),
            7 => Ok(VaultInstruction::Withdraw),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}

/// Split instruction data into the instruction and its payload.
///
/// Token-2022 calls the hook with the interface's 8-byte Execute
/// discriminator; that is checked before the one-byte tags.
pub fn decode(data: &[u8]) -> Result<(VaultInstruction, &[u8]), ProgramError> {
    if let Some(payload) = data.strip_prefix(&EXECUTE_DISCRIMINATOR[..]) {
        return Ok((VaultInstruction::TransferHook, payload));
    }
    let (disc, payload) = data
        .split_first()
        .ok_or(ProgramError::InvalidInstructionData)?;
    Ok((VaultInstruction::try_from(disc)?, payload))
}

/// Payload carrying a single u64, such as an amount.
pub fn parse_amount(payload: &[u8]) -> Result<u64, ProgramError> {
    if payload.len() != 8 {
        return Err(ProgramError::InvalidInstructionData);
    }
    crate::helpers::read_u64(payload)
}
