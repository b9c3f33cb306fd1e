use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    msg,
    program_error::ProgramError,
    pubkey,
    ProgramResult,
};
use pinocchio_log::log;

use crate::{
    helpers::{token_2022, *},
    state::VaultState,
    ID,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitializeVaultArgs {
    pub initial_supply: u64,
    pub mint_bump: u8,
    pub metadata_bump: u8,
    pub vault_bump: u8,
    pub state_bump: u8,
}

impl InitializeVaultArgs {
    pub const LEN: usize = 8 + 4;

    pub fn parse(payload: &[u8]) -> Result<Self, ProgramError> {
        if payload.len() != Self::LEN {
            return Err(ProgramError::InvalidInstructionData);
        }
        Ok(Self {
            initial_supply: read_u64(&payload[0..8])?,
            mint_bump: payload[8],
            metadata_bump: payload[9],
            vault_bump: payload[10],
            state_bump: payload[11],
        })
    }
}

/// Create the Token-2022 mint (TransferHook + MetadataPointer), the vault
/// token account and the vault state, then mint the initial supply.
///
/// Accounts (exactly 7):
/// 0. `[writable, signer]` Authority, pays for everything
/// 1. `[writable]` Mint PDA `["mint"]`
/// 2. `[]` Metadata PDA `["metadata"]`
/// 3. `[writable]` Vault token account PDA `["vault", mint]`
/// 4. `[writable]` Vault state PDA `["vault_state"]`
/// 5. `[]` Token-2022 program
/// 6. `[]` System program
pub fn process_initialize_vault(
    accounts: &[AccountInfo],
    args: InitializeVaultArgs,
) -> ProgramResult {
    let [authority, mint, metadata, vault, vault_state, token_program, system_program, _rest @ ..] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    require_signer(authority)?;
    require_writable(mint)?;
    require_writable(vault)?;
    require_writable(vault_state)?;
    require_token_2022(token_program)?;
    require_system_program(system_program)?;

    verify_pda(mint, &[MINT_SEED], args.mint_bump)?;
    verify_pda(metadata, &[METADATA_SEED], args.metadata_bump)?;
    verify_pda(vault, &[VAULT_SEED, mint.key()], args.vault_bump)?;
    verify_pda(vault_state, &[VAULT_STATE_SEED], args.state_bump)?;

    // Mint: allocate for both extensions, initialize extensions, then the mint itself
    let mint_bump = [args.mint_bump];
    let mint_seeds = [Seed::from(MINT_SEED), Seed::from(&mint_bump)];
    create_pda_account(
        authority,
        mint,
        MINT_WITH_EXTENSIONS_LEN,
        &TOKEN_2022_PROGRAM_ID,
        Signer::from(&mint_seeds),
    )?;
    token_2022::initialize_metadata_pointer(mint, vault_state.key(), metadata.key())?;
    token_2022::initialize_transfer_hook(mint, vault_state.key(), &ID)?;
    token_2022::initialize_mint2(mint, vault_state.key(), MINT_DECIMALS)?;

    // Vault token account, owned by vault_state
    let vault_bump = [args.vault_bump];
    let vault_seeds = [
        Seed::from(VAULT_SEED),
        Seed::from(mint.key()),
        Seed::from(&vault_bump),
    ];
    create_pda_account(
        authority,
        vault,
        VAULT_ACCOUNT_LEN,
        &TOKEN_2022_PROGRAM_ID,
        Signer::from(&vault_seeds),
    )?;
    token_2022::initialize_account3(vault, mint, vault_state.key())?;

    let state_bump = [args.state_bump];
    let state_seeds = [Seed::from(VAULT_STATE_SEED), Seed::from(&state_bump)];
    create_pda_account(
        authority,
        vault_state,
        VaultState::LEN,
        &ID,
        Signer::from(&state_seeds),
    )?;
    VaultState::init(
        vault_state,
        VaultState::new(
            *mint.key(),
            *authority.key(),
            args.initial_supply,
            args.vault_bump,
            args.state_bump,
            args.mint_bump,
        ),
    )?;

    msg!("Vault initialized with mint:");
    pubkey::log(mint.key());
    msg!("Metadata pointer:");
    pubkey::log(metadata.key());
    msg!("Vault token account:");
    pubkey::log(vault.key());
    log!("Initial supply: {}", args.initial_supply);

    if args.initial_supply > 0 {
        token_2022::mint_to(
            mint,
            vault,
            vault_state,
            args.initial_supply,
            Signer::from(&state_seeds),
        )?;
        log!("Minted {} tokens to vault", args.initial_supply);
    }

    Ok(())
}
