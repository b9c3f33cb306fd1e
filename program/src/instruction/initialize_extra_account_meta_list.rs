use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    msg,
    program_error::ProgramError,
    ProgramResult,
};

use crate::{
    helpers::{extra_metas::*, *},
    ID,
};

pub fn parse_bump(payload: &[u8]) -> Result<u8, ProgramError> {
    match payload {
        [bump] => Ok(*bump),
        _ => Err(ProgramError::InvalidInstructionData),
    }
}

/// Create the `["extra-account-metas", mint]` account Token-2022 reads to
/// resolve the whitelist accounts for Execute.
///
/// Accounts:
/// 0. `[writable, signer]` Payer
/// 1. `[writable]` ExtraAccountMetaList PDA
/// 2. `[]` Mint (Token-2022)
/// 3. `[]` System program
pub fn process_initialize_extra_account_meta_list(
    accounts: &[AccountInfo],
    bump: u8,
) -> ProgramResult {
    let [payer, extra_account_meta_list, mint, system_program, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    require_signer(payer)?;
    require_writable(extra_account_meta_list)?;
    require_system_program(system_program)?;
    if mint.owner() != &TOKEN_2022_PROGRAM_ID {
        return Err(ProgramError::InvalidAccountOwner);
    }

    verify_pda(extra_account_meta_list, &[EXTRA_ACCOUNT_METAS_SEED, mint.key()], bump)?;

    let bump = [bump];
    let seeds = [
        Seed::from(EXTRA_ACCOUNT_METAS_SEED),
        Seed::from(mint.key()),
        Seed::from(&bump),
    ];
    create_pda_account(
        payer,
        extra_account_meta_list,
        EXTRA_ACCOUNT_METAS_LEN,
        &ID,
        Signer::from(&seeds),
    )?;

    let mut data = extra_account_meta_list.try_borrow_mut_data()?;
    write_whitelist_extra_metas(&mut data)?;

    msg!("Extra account metas written: source and destination whitelists");
    Ok(())
}
