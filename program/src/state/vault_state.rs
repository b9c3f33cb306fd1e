use pinocchio::{account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey};
use shank::ShankAccount;

use crate::error::VaultError;
use crate::helpers::{verify_pda, VAULT_STATE_SEED};
use crate::state::AccountTag;

/// Singleton vault configuration, PDA `["vault_state"]`.
///
/// Signs as mint authority, vault owner and extension authority.
#[derive(ShankAccount, Debug, Clone, PartialEq, Eq)]
#[repr(C)]
pub struct VaultState {
    pub tag: u8,
    /// The vault's Token-2022 mint
    pub mint: Pubkey,
    /// Admin allowed to manage whitelists
    pub authority: Pubkey,
    /// Tokens held by the vault that the program has accounted for (u64 LE)
    pub total_deposited: [u8; 8],
    pub vault_bump: u8,
    pub state_bump: u8,
    pub mint_bump: u8,
}

impl VaultState {
    pub const LEN: usize = core::mem::size_of::<VaultState>();

    pub fn new(
        mint: Pubkey,
        authority: Pubkey,
        total_deposited: u64,
        vault_bump: u8,
        state_bump: u8,
        mint_bump: u8,
    ) -> Self {
        Self {
            tag: AccountTag::VaultState as u8,
            mint,
            authority,
            total_deposited: total_deposited.to_le_bytes(),
            vault_bump,
            state_bump,
            mint_bump,
        }
    }

    #[inline]
    pub fn total_deposited(&self) -> u64 {
        u64::from_le_bytes(self.total_deposited)
    }

    #[inline]
    pub fn set_total_deposited(&mut self, value: u64) {
        self.total_deposited = value.to_le_bytes();
    }

    fn check(account: &AccountInfo) -> Result<(), ProgramError> {
        if account.owner() != &crate::ID {
            return Err(ProgramError::InvalidAccountOwner);
        }
        if account.data_len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        Ok(())
    }

    pub fn load(account: &AccountInfo) -> Result<&Self, ProgramError> {
        Self::check(account)?;
        // SAFETY: length checked above; every field has alignment 1.
        let state = unsafe { &*(account.borrow_data_unchecked().as_ptr() as *const Self) };
        if state.tag != AccountTag::VaultState as u8 {
            return Err(ProgramError::InvalidAccountData);
        }
        Ok(state)
    }

    pub fn load_mut(account: &AccountInfo) -> Result<&mut Self, ProgramError> {
        Self::check(account)?;
        if !account.is_writable() {
            return Err(ProgramError::InvalidAccountData);
        }
        // SAFETY: length checked above; every field has alignment 1.
        let state =
            unsafe { &mut *(account.borrow_mut_data_unchecked().as_mut_ptr() as *mut Self) };
        if state.tag != AccountTag::VaultState as u8 {
            return Err(ProgramError::InvalidAccountData);
        }
        Ok(state)
    }

    /// `load` plus re-deriving the `["vault_state"]` address from the stored bump.
    pub fn load_checked(account: &AccountInfo) -> Result<&Self, ProgramError> {
        let state = Self::load(account)?;
        verify_pda(account, &[VAULT_STATE_SEED], state.state_bump)?;
        Ok(state)
    }

    pub fn load_checked_mut(account: &AccountInfo) -> Result<&mut Self, ProgramError> {
        let state = Self::load_mut(account)?;
        verify_pda(account, &[VAULT_STATE_SEED], state.state_bump)?;
        Ok(state)
    }

    /// The vault authority must have signed as `admin`.
    pub fn require_authority(&self, admin: &AccountInfo) -> Result<(), ProgramError> {
        if !admin.is_signer() {
            return Err(ProgramError::MissingRequiredSignature);
        }
        if admin.key() != &self.authority {
            return Err(VaultError::Unauthorized.into());
        }
        Ok(())
    }

    /// Write a fresh state into a just-created account.
    pub fn init(account: &AccountInfo, state: VaultState) -> Result<(), ProgramError> {
        Self::check(account)?;
        // SAFETY: no other borrow of the freshly created account is live.
        let data = unsafe { account.borrow_mut_data_unchecked() };
        if data[0] != AccountTag::Uninitialized as u8 {
            return Err(ProgramError::AccountAlreadyInitialized);
        }
        // SAFETY: length checked above; every field has alignment 1.
        unsafe { *(data.as_mut_ptr() as *mut Self) = state };
        Ok(())
    }
}
