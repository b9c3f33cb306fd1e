use pinocchio::{account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey};
use shank::ShankAccount;

use crate::helpers::{verify_pda, WHITELIST_SEED};
use crate::state::AccountTag;

/// Per-user whitelist record, PDA `["whitelist", user]`.
#[derive(ShankAccount, Debug, Clone, PartialEq, Eq)]
#[repr(C)]
pub struct Whitelist {
    pub tag: u8,
    pub address: Pubkey,
    /// Per-transfer limit for transfers out of this user's token accounts (u64 LE)
    pub amount: [u8; 8],
    /// Ledger balance the user may withdraw from the vault (u64 LE)
    pub deposited_amount: [u8; 8],
    pub is_whitelisted: u8,
    pub bump: u8,
}

impl Whitelist {
    pub const LEN: usize = core::mem::size_of::<Whitelist>();

    pub fn new(address: Pubkey, amount: u64, bump: u8) -> Self {
        Self {
            tag: AccountTag::Whitelist as u8,
            address,
            amount: amount.to_le_bytes(),
            deposited_amount: [0; 8],
            is_whitelisted: 0,
            bump,
        }
    }

    #[inline]
    pub fn limit(&self) -> u64 {
        u64::from_le_bytes(self.amount)
    }

    #[inline]
    pub fn deposited_amount(&self) -> u64 {
        u64::from_le_bytes(self.deposited_amount)
    }

    #[inline]
    pub fn set_deposited_amount(&mut self, value: u64) {
        self.deposited_amount = value.to_le_bytes();
    }

    #[inline]
    pub fn is_whitelisted(&self) -> bool {
        self.is_whitelisted != 0
    }

    #[inline]
    pub fn set_whitelisted(&mut self, value: bool) {
        self.is_whitelisted = value as u8;
    }

    /// Whether this record lets `amount` leave the owner's account.
    #[inline]
    pub fn allows_outgoing(&self, amount: u64) -> bool {
        self.is_whitelisted() && amount <= self.limit()
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
        let record = unsafe { &*(account.borrow_data_unchecked().as_ptr() as *const Self) };
        if record.tag != AccountTag::Whitelist as u8 {
            return Err(ProgramError::InvalidAccountData);
        }
        Ok(record)
    }

    pub fn load_mut(account: &AccountInfo) -> Result<&mut Self, ProgramError> {
        Self::check(account)?;
        if !account.is_writable() {
            return Err(ProgramError::InvalidAccountData);
        }
        // SAFETY: length checked above; every field has alignment 1.
        let record =
            unsafe { &mut *(account.borrow_mut_data_unchecked().as_mut_ptr() as *mut Self) };
        if record.tag != AccountTag::Whitelist as u8 {
            return Err(ProgramError::InvalidAccountData);
        }
        Ok(record)
    }

    /// `load_mut` for `user`'s record, re-deriving `["whitelist", user]` from the stored bump.
    pub fn load_checked_mut<'a>(
        account: &'a AccountInfo,
        user: &Pubkey,
    ) -> Result<&'a mut Self, ProgramError> {
        let record = Self::load_mut(account)?;
        verify_pda(account, &[WHITELIST_SEED, user], record.bump)?;
        if &record.address != user {
            return Err(ProgramError::InvalidAccountData);
        }
        Ok(record)
    }

    /// Like `load`, but an account this program does not own reads as `None`.
    pub fn load_optional(account: &AccountInfo) -> Result<Option<&Self>, ProgramError> {
        if account.owner() != &crate::ID {
            return Ok(None);
        }
        Self::load(account).map(Some)
    }

    pub fn init(account: &AccountInfo, record: Whitelist) -> Result<(), ProgramError> {
        Self::check(account)?;
        // SAFETY: no other borrow of the freshly created account is live.
        let data = unsafe { account.borrow_mut_data_unchecked() };
        if data[0] != AccountTag::Uninitialized as u8 {
            return Err(ProgramError::AccountAlreadyInitialized);
        }
        // SAFETY: length checked above; every field has alignment 1.
        unsafe { *(data.as_mut_ptr() as *mut Self) = record };
        Ok(())
    }
}
