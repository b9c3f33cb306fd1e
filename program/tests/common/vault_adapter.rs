use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};
use whitelist_vault::helpers::{
    EXECUTE_DISCRIMINATOR, EXTRA_ACCOUNT_METAS_SEED, MINT_DECIMALS, METADATA_SEED, MINT_SEED,
    TOKEN_2022_PROGRAM_ID, VAULT_SEED, VAULT_STATE_SEED, WHITELIST_SEED,
};

const TOKEN_IX_TRANSFER_CHECKED: u8 = 12;

pub fn program_id() -> Pubkey {
    Pubkey::new_from_array(whitelist_vault::ID)
}

pub fn token_2022_id() -> Pubkey {
    Pubkey::new_from_array(TOKEN_2022_PROGRAM_ID)
}

#[derive(Clone, Copy, Debug)]
pub struct VaultPdas {
    pub mint: Pubkey,
    pub mint_bump: u8,
    pub metadata: Pubkey,
    pub metadata_bump: u8,
    pub vault: Pubkey,
    pub vault_bump: u8,
    pub vault_state: Pubkey,
    pub state_bump: u8,
    pub extra_account_metas: Pubkey,
    pub extra_metas_bump: u8,
}

pub fn vault_pdas() -> VaultPdas {
    let pid = program_id();
    let (mint, mint_bump) = Pubkey::find_program_address(&[MINT_SEED], &pid);
    let (metadata, metadata_bump) = Pubkey::find_program_address(&[METADATA_SEED], &pid);
    let (vault, vault_bump) = Pubkey::find_program_address(&[VAULT_SEED, mint.as_ref()], &pid);
    let (vault_state, state_bump) = Pubkey::find_program_address(&[VAULT_STATE_SEED], &pid);
    let (extra_account_metas, extra_metas_bump) =
        Pubkey::find_program_address(&[EXTRA_ACCOUNT_METAS_SEED, mint.as_ref()], &pid);
    VaultPdas {
        mint,
        mint_bump,
        metadata,
        metadata_bump,
        vault,
        vault_bump,
        vault_state,
        state_bump,
        extra_account_metas,
        extra_metas_bump,
    }
}

pub fn whitelist_pda(user: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[WHITELIST_SEED, user.as_ref()], &program_id())
}

/// Raw Token-2022 account for the vault mint carrying the TransferHookAccount extension.
pub fn token_account_data(mint: &Pubkey, owner: &Pubkey, amount: u64) -> Vec<u8> {
    let mut data = vec![0u8; whitelist_vault::helpers::VAULT_ACCOUNT_LEN];
    data[0..32].copy_from_slice(mint.as_ref());
    data[32..64].copy_from_slice(owner.as_ref());
    data[64..72].copy_from_slice(&amount.to_le_bytes());
    data[108] = 1; // AccountState::Initialized
    data[165] = 2; // AccountType::Account
    data[166..168]
        .copy_from_slice(&whitelist_vault::helpers::EXT_TRANSFER_HOOK_ACCOUNT.to_le_bytes());
    data[168..170].copy_from_slice(&1u16.to_le_bytes());
    data
}

pub mod ixn {
    use super::*;

    pub fn initialize() -> Instruction {
        Instruction {
            program_id: program_id(),
            accounts: vec![],
            data: vec![0],
        }
    }

    pub fn initialize_vault(authority: &Pubkey, initial_supply: u64) -> Instruction {
        let p = vault_pdas();
        let mut data = Vec::with_capacity(1 + 12);
        data.push(1);
        data.extend_from_slice(&initial_supply.to_le_bytes());
        data.extend_from_slice(&[p.mint_bump, p.metadata_bump, p.vault_bump, p.state_bump]);
        Instruction {
            program_id: program_id(),
            accounts: vec![
                AccountMeta::new(*authority, true),
                AccountMeta::new(p.mint, false),
                AccountMeta::new_readonly(p.metadata, false),
                AccountMeta::new(p.vault, false),
                AccountMeta::new(p.vault_state, false),
                AccountMeta::new_readonly(token_2022_id(), false),
                AccountMeta::new_readonly(system_program::id(), false),
            ],
            data,
        }
    }

    pub fn initialize_whitelist(admin: &Pubkey, user: &Pubkey, limit: u64) -> Instruction {
        let (whitelist, bump) = whitelist_pda(user);
        let mut data = Vec::with_capacity(1 + 41);
        data.push(2);
        data.extend_from_slice(user.as_ref());
        data.extend_from_slice(&limit.to_le_bytes());
        data.push(bump);
        Instruction {
            program_id: program_id(),
            accounts: vec![
                AccountMeta::new(*admin, true),
                AccountMeta::new(whitelist, false),
                AccountMeta::new_readonly(vault_pdas().vault_state, false),
                AccountMeta::new_readonly(system_program::id(), false),
            ],
            data,
        }
    }

    fn admin_whitelist_op(tag: u8, admin: &Pubkey, user: &Pubkey) -> Instruction {
        let mut data = Vec::with_capacity(1 + 32);
        data.push(tag);
        data.extend_from_slice(user.as_ref());
        Instruction {
            program_id: program_id(),
            accounts: vec![
                AccountMeta::new(*admin, true),
                AccountMeta::new(whitelist_pda(user).0, false),
                AccountMeta::new_readonly(vault_pdas().vault_state, false),
                AccountMeta::new_readonly(*user, false),
                AccountMeta::new_readonly(system_program::id(), false),
            ],
            data,
        }
    }

    pub fn add_to_whitelist(admin: &Pubkey, user: &Pubkey) -> Instruction {
        admin_whitelist_op(3, admin, user)
    }

    pub fn remove_from_whitelist(admin: &Pubkey, user: &Pubkey) -> Instruction {
        admin_whitelist_op(4, admin, user)
    }

    pub fn initialize_extra_account_meta_list(payer: &Pubkey) -> Instruction {
        let p = vault_pdas();
        Instruction {
            program_id: program_id(),
            accounts: vec![
                AccountMeta::new(*payer, true),
                AccountMeta::new(p.extra_account_metas, false),
                AccountMeta::new_readonly(p.mint, false),
                AccountMeta::new_readonly(system_program::id(), false),
            ],
            data: vec![5, p.extra_metas_bump],
        }
    }

    pub fn deposit(user: &Pubkey, user_token_account: &Pubkey, amount: u64) -> Instruction {
        let p = vault_pdas();
        let mut data = vec![6];
        data.extend_from_slice(&amount.to_le_bytes());
        Instruction {
            program_id: program_id(),
            accounts: vec![
                AccountMeta::new(*user, true),
                AccountMeta::new_readonly(p.mint, false),
                AccountMeta::new(*user_token_account, false),
                AccountMeta::new(p.vault, false),
                AccountMeta::new(p.vault_state, false),
                AccountMeta::new(whitelist_pda(user).0, false),
                AccountMeta::new_readonly(token_2022_id(), false),
            ],
            data,
        }
    }

    pub fn withdraw(user: &Pubkey, amount: u64) -> Instruction {
        let p = vault_pdas();
        let mut data = vec![7];
        data.extend_from_slice(&amount.to_le_bytes());
        Instruction {
            program_id: program_id(),
            accounts: vec![
                AccountMeta::new(*user, true),
                AccountMeta::new_readonly(p.mint, false),
                AccountMeta::new(p.vault, false),
                AccountMeta::new(p.vault_state, false),
                AccountMeta::new(whitelist_pda(user).0, false),
                AccountMeta::new_readonly(token_2022_id(), false),
            ],
            data,
        }
    }

    /// Hook Execute sent straight to the program, bypassing Token-2022.
    pub fn execute(
        source: &Pubkey,
        destination: &Pubkey,
        authority: &Pubkey,
        source_owner: &Pubkey,
        destination_owner: &Pubkey,
        amount: u64,
    ) -> Instruction {
        let p = vault_pdas();
        let mut data = EXECUTE_DISCRIMINATOR.to_vec();
        data.extend_from_slice(&amount.to_le_bytes());
        Instruction {
            program_id: program_id(),
            accounts: vec![
                AccountMeta::new_readonly(*source, false),
                AccountMeta::new_readonly(p.mint, false),
                AccountMeta::new_readonly(*destination, false),
                AccountMeta::new_readonly(*authority, false),
                AccountMeta::new_readonly(p.extra_account_metas, false),
                AccountMeta::new_readonly(whitelist_pda(source_owner).0, false),
                AccountMeta::new_readonly(whitelist_pda(destination_owner).0, false),
            ],
            data,
        }
    }

    /// Token-2022 `TransferChecked` with the hook's extra accounts appended
    /// the way the offchain resolver lays them out.
    pub fn transfer_checked(
        source: &Pubkey,
        destination: &Pubkey,
        authority: &Pubkey,
        source_owner: &Pubkey,
        destination_owner: &Pubkey,
        amount: u64,
    ) -> Instruction {
        let p = vault_pdas();
        let mut data = Vec::with_capacity(10);
        data.push(TOKEN_IX_TRANSFER_CHECKED);
        data.extend_from_slice(&amount.to_le_bytes());
        data.push(MINT_DECIMALS);
        Instruction {
            program_id: token_2022_id(),
            accounts: vec![
                AccountMeta::new(*source, false),
                AccountMeta::new_readonly(p.mint, false),
                AccountMeta::new(*destination, false),
                AccountMeta::new_readonly(*authority, true),
                AccountMeta::new_readonly(whitelist_pda(source_owner).0, false),
                AccountMeta::new_readonly(whitelist_pda(destination_owner).0, false),
                AccountMeta::new_readonly(program_id(), false),
                AccountMeta::new_readonly(p.extra_account_metas, false),
            ],
            data,
        }
    }
}
