use crate::instruction::{self, VaultInstruction};
use pinocchio::{
    account_info::AccountInfo, msg, program_entrypoint, program_error::ProgramError,
    pubkey::Pubkey, ProgramResult,
};

// Entrypoint macro
program_entrypoint!(process_instruction);

#[inline(always)]
fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if *program_id != crate::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    let (ix, payload) = instruction::decode(instruction_data)?;

    match ix {
        VaultInstruction::Initialize => {
            msg!("Instruction: Initialize");
            instruction::initialize::process_initialize(accounts, payload)
        }

        // --------------------------------------------------------------------
        // Vault
        // --------------------------------------------------------------------
        VaultInstruction::InitializeVault => {
            msg!("Instruction: InitializeVault");
            let args = instruction::InitializeVaultArgs::parse(payload)?;
            instruction::initialize_vault::process_initialize_vault(accounts, args)
        }
        VaultInstruction::Deposit => {
            msg!("Instruction: Deposit");
            let amount = instruction::parse_amount(payload)?;
            instruction::deposit::process_deposit(accounts, amount)
        }
        VaultInstruction::Withdraw => {
            msg!("Instruction: Withdraw");
            let amount = instruction::parse_amount(payload)?;
            instruction::withdraw::process_withdraw(accounts, amount)
        }

        // --------------------------------------------------------------------
        // Whitelist
        // --------------------------------------------------------------------
        VaultInstruction::InitializeWhitelist => {
            msg!("Instruction: InitializeWhitelist");
            let args = instruction::InitializeWhitelistArgs::parse(payload)?;
            instruction::initialize_whitelist::process_initialize_whitelist(accounts, args)
        }
        VaultInstruction::AddToWhitelist => {
            msg!("Instruction: AddToWhitelist");
            let user = instruction::parse_user(payload)?;
            instruction::whitelist_operations::process_add_to_whitelist(accounts, user)
        }
        VaultInstruction::RemoveFromWhitelist => {
            msg!("Instruction: RemoveFromWhitelist");
            let user = instruction::parse_user(payload)?;
            instruction::whitelist_operations::process_remove_from_whitelist(accounts, user)
        }

        // --------------------------------------------------------------------
        // Transfer hook
        // --------------------------------------------------------------------
        VaultInstruction::InitializeExtraAccountMetaList => {
            msg!("Instruction: InitializeExtraAccountMetaList");
            let bump = instruction::parse_bump(payload)?;
            instruction::process_initialize_extra_account_meta_list(accounts, bump)
        }
        VaultInstruction::TransferHook => {
            msg!("Instruction: TransferHook");
            let amount = instruction::parse_amount(payload)?;
            instruction::transfer_hook::process_transfer_hook(accounts, amount)
        }
    }
}
