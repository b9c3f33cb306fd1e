use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    program_error::ProgramError,
    pubkey::Pubkey,
    ProgramResult,
};
use pinocchio_log::log;

use crate::{
    error::VaultError,
    helpers::{
        token_2022::{self, TokenAccountView},
        *,
    },
    state::{VaultState, Whitelist},
};

/// Vault delegation after a withdraw of `amount` by `user`.
///
/// The vault carries one delegate at a time. An unspent approval for the
/// same user is topped up; one held by anyone else blocks the withdraw.
pub fn next_approval(
    delegate: Option<&[u8]>,
    delegated_amount: u64,
    user: &Pubkey,
    amount: u64,
) -> Result<u64, ProgramError> {
    match delegate {
        Some(pending) if delegated_amount != 0 => {
            if pending != user {
                return Err(VaultError::PendingWithdrawal.into());
            }
            checked_add(delegated_amount, amount)
        }
        _ => Ok(amount),
    }
}

/// Debit the user's ledger and approve them as delegate on the vault for
/// `amount`. The client must follow with a `TransferChecked` out of the
/// vault signed by the user; the hook admits it because the destination
/// owner is whitelisted.
///
/// Accounts (exactly 6):
/// 0. `[writable, signer]` User
/// 1. `[]` Mint
/// 2. `[writable]` Vault token account
/// 3. `[writable]` Vault state
/// 4. `[writable]` User whitelist PDA
/// 5. `[]` Token-2022 program
pub fn process_withdraw(accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let [user, mint, vault, vault_state, whitelist, token_program, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    require_signer(user)?;
    require_writable(vault)?;
    require_token_2022(token_program)?;

    let (state_bump, total_deposited) = {
        let state = VaultState::load_checked(vault_state)?;
        if mint.key() != &state.mint {
            return Err(ProgramError::InvalidAccountData);
        }
        verify_pda(vault, &[VAULT_SEED, mint.key()], state.vault_bump)?;
        (state.state_bump, state.total_deposited())
    };

    let balance = Whitelist::load_checked_mut(whitelist, user.key())?.deposited_amount();
    if balance < amount {
        return Err(VaultError::InsufficientFunds.into());
    }

    let approval = {
        let data = vault.try_borrow_data()?;
        let view = TokenAccountView::new(&data)?;
        next_approval(view.delegate(), view.delegated_amount(), user.key(), amount)?
    };

    let bump = [state_bump];
    let seeds = [Seed::from(VAULT_STATE_SEED), Seed::from(&bump)];
    token_2022::approve(vault, user, vault_state, approval, Signer::from(&seeds))?;

    let new_balance = checked_sub(balance, amount)?;
    Whitelist::load_mut(whitelist)?.set_deposited_amount(new_balance);
    VaultState::load_mut(vault_state)?.set_total_deposited(checked_sub(total_deposited, amount)?);

    log!("Approved withdrawal of {} tokens. New balance: {}", amount, new_balance);
    Ok(())
}
