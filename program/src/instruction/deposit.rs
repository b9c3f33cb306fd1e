use pinocchio::{account_info::AccountInfo, program_error::ProgramError, ProgramResult};
use pinocchio_log::log;

use crate::{
    error::VaultError,
    helpers::{token_2022::TokenAccountView, *},
    state::{VaultState, Whitelist},
};

/// Credit the depositor's ledger with `amount`.
///
/// The tokens themselves arrive through a Token-2022 `TransferChecked` into
/// the vault placed earlier in the same transaction; the vault balance must
/// cover every existing obligation plus this deposit.
///
/// Accounts (exactly 7):
/// 0. `[writable, signer]` User
/// 1. `[]` Mint
/// 2. `[writable]` User token account
/// 3. `[writable]` Vault token account
/// 4. `[writable]` Vault state
/// 5. `[writable]` User whitelist PDA
/// 6. `[]` Token-2022 program
pub fn process_deposit(accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let [user, mint, user_token_account, vault, vault_state, whitelist, token_program, _rest @ ..] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    require_signer(user)?;
    require_token_2022(token_program)?;
    if amount == 0 {
        return Err(ProgramError::InvalidArgument);
    }

    let state = VaultState::load_checked_mut(vault_state)?;
    if mint.key() != &state.mint {
        return Err(ProgramError::InvalidAccountData);
    }
    verify_pda(vault, &[VAULT_SEED, mint.key()], state.vault_bump)?;

    let record = Whitelist::load_checked_mut(whitelist, user.key())?;

    if user_token_account.owner() != &TOKEN_2022_PROGRAM_ID
        || vault.owner() != &TOKEN_2022_PROGRAM_ID
    {
        return Err(ProgramError::InvalidAccountOwner);
    }
    {
        let data = user_token_account.try_borrow_data()?;
        let source = TokenAccountView::new(&data)?;
        if source.mint() != mint.key() || source.owner() != user.key() {
            return Err(ProgramError::InvalidAccountData);
        }
    }

    let available = {
        let data = vault.try_borrow_data()?;
        let vault_account = TokenAccountView::new(&data)?;
        vault_account
            .amount()
            .saturating_sub(vault_account.delegated_amount())
    };
    let new_total = checked_add(state.total_deposited(), amount)?;
    if available < new_total {
        return Err(VaultError::DepositNotReceived.into());
    }

    let new_balance = checked_add(record.deposited_amount(), amount)?;
    record.set_deposited_amount(new_balance);
    state.set_total_deposited(new_total);

    log!("Recorded deposit of {} tokens. New balance: {}", amount, new_balance);
    Ok(())
}
