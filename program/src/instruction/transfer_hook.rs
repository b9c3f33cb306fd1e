use pinocchio::{
    account_info::AccountInfo,
    msg,
    program_error::ProgramError,
    pubkey::{self, find_program_address, Pubkey},
    ProgramResult,
};

use crate::{
    error::VaultError,
    helpers::{token_2022::TokenAccountView, verify_pda, EXTRA_ACCOUNT_METAS_SEED, WHITELIST_SEED},
    state::Whitelist,
    ID,
};

/// Which side of a transfer satisfied the whitelist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferApproval {
    Source,
    Destination,
}

/// A transfer goes through when the source owner is whitelisted and within
/// its per-transfer limit, or when the destination owner is whitelisted.
pub fn check_transfer(
    source: Option<&Whitelist>,
    destination: Option<&Whitelist>,
    amount: u64,
) -> Result<TransferApproval, VaultError> {
    if source.is_some_and(|s| s.allows_outgoing(amount)) {
        return Ok(TransferApproval::Source);
    }
    if destination.is_some_and(|d| d.is_whitelisted()) {
        return Ok(TransferApproval::Destination);
    }
    match source {
        Some(s) if s.is_whitelisted() => Err(VaultError::ExceedsLimit),
        _ => Err(VaultError::NotWhitelisted),
    }
}

/// Whitelist record for `owner`, or `None` if this program never created it.
fn owner_whitelist<'a>(
    account: &'a AccountInfo,
    owner: &Pubkey,
) -> Result<Option<&'a Whitelist>, ProgramError> {
    match Whitelist::load_optional(account)? {
        Some(record) => {
            verify_pda(account, &[WHITELIST_SEED, owner], record.bump)?;
            if &record.address != owner {
                return Err(ProgramError::InvalidAccountData);
            }
            Ok(Some(record))
        }
        None => {
            let (expected, _) = find_program_address(&[WHITELIST_SEED, owner], &ID);
            if account.key() != &expected {
                return Err(ProgramError::InvalidSeeds);
            }
            Ok(None)
        }
    }
}

/// SPL transfer-hook Execute, invoked by Token-2022 during `TransferChecked`.
///
/// Accounts:
/// 0. `[]` Source token account
/// 1. `[]` Mint
/// 2. `[]` Destination token account
/// 3. `[]` Source owner or delegate
/// 4. `[]` ExtraAccountMetaList PDA
/// 5. `[]` Source owner's whitelist PDA
/// 6. `[]` Destination owner's whitelist PDA
pub fn process_transfer_hook(accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let [
        source_token,
        mint,
        destination_token,
        _owner,
        extra_account_meta_list,
        source_whitelist,
        dest_whitelist,
        _rest @ ..,
    ] = accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    let source_data = source_token.try_borrow_data()?;
    let source = TokenAccountView::new(&source_data)?;
    // Only Token-2022 sets the flag, and only for the duration of a transfer
    if !source.transferring()? {
        return Err(VaultError::NotTransferring.into());
    }

    let destination_data = destination_token.try_borrow_data()?;
    let destination = TokenAccountView::new(&destination_data)?;
    if source.mint() != mint.key() || destination.mint() != mint.key() {
        return Err(ProgramError::InvalidAccountData);
    }

    let (expected_list, _) = find_program_address(&[EXTRA_ACCOUNT_METAS_SEED, mint.key()], &ID);
    if extra_account_meta_list.key() != &expected_list {
        return Err(ProgramError::InvalidSeeds);
    }

    let source_owner: Pubkey = source
        .owner()
        .try_into()
        .map_err(|_| ProgramError::InvalidAccountData)?;
    let destination_owner: Pubkey = destination
        .owner()
        .try_into()
        .map_err(|_| ProgramError::InvalidAccountData)?;

    msg!("Source token owner:");
    pubkey::log(&source_owner);
    msg!("Destination token owner:");
    pubkey::log(&destination_owner);

    let source_record = owner_whitelist(source_whitelist, &source_owner)?;
    let dest_record = owner_whitelist(dest_whitelist, &destination_owner)?;

    match check_transfer(source_record, dest_record, amount)? {
        TransferApproval::Source => msg!("Transfer allowed: source is whitelisted"),
        TransferApproval::Destination => msg!("Transfer allowed: destination is whitelisted"),
    }
    Ok(())
}
