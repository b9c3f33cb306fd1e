use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    msg,
    program_error::ProgramError,
    pubkey::{self, Pubkey},
    ProgramResult,
};
use pinocchio_log::log;

use crate::{
    helpers::*,
    state::{VaultState, Whitelist},
    ID,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitializeWhitelistArgs {
    pub user: Pubkey,
    /// Per-transfer limit
    pub amount: u64,
    pub bump: u8,
}

impl InitializeWhitelistArgs {
    pub const LEN: usize = 32 + 8 + 1;

    pub fn parse(payload: &[u8]) -> Result<Self, ProgramError> {
        if payload.len() != Self::LEN {
            return Err(ProgramError::InvalidInstructionData);
        }
        Ok(Self {
            user: read_pubkey(&payload[0..32])?,
            amount: read_u64(&payload[32..40])?,
            bump: payload[40],
        })
    }
}

/// Create an unapproved whitelist record for `user`.
///
/// Accounts:
/// 0. `[writable, signer]` Admin (vault authority), pays rent
/// 1. `[writable]` Whitelist PDA `["whitelist", user]`
/// 2. `[]` Vault state
/// 3. `[]` System program
pub fn process_initialize_whitelist(
    accounts: &[AccountInfo],
    args: InitializeWhitelistArgs,
) -> ProgramResult {
    let [admin, whitelist, vault_state, system_program, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    require_writable(whitelist)?;
    require_system_program(system_program)?;
    VaultState::load_checked(vault_state)?.require_authority(admin)?;

    verify_pda(whitelist, &[WHITELIST_SEED, &args.user], args.bump)?;

    let bump = [args.bump];
    let seeds = [
        Seed::from(WHITELIST_SEED),
        Seed::from(&args.user),
        Seed::from(&bump),
    ];
    create_pda_account(admin, whitelist, Whitelist::LEN, &ID, Signer::from(&seeds))?;
    Whitelist::init(whitelist, Whitelist::new(args.user, args.amount, args.bump))?;

    msg!("Whitelist record created for:");
    pubkey::log(&args.user);
    log!("Transfer limit: {}", args.amount);
    Ok(())
}
