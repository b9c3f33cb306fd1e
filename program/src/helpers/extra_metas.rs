use pinocchio::program_error::ProgramError;

use crate::helpers::constant::{EXECUTE_DISCRIMINATOR, WHITELIST_SEED};

const EXTRA_ACCOUNT_META_LEN: usize = 35;
const TLV_DISCRIMINATOR_LEN: usize = 8;
const TLV_LENGTH_LEN: usize = 4;
const POD_SLICE_COUNT_LEN: usize = 4;

// ExtraAccountMeta discriminator: PDA derived from the hook program id.
const META_PDA_FROM_HOOK_PROGRAM: u8 = 1;
// Seed tags inside address_config
const SEED_LITERAL: u8 = 1;
const SEED_ACCOUNT_DATA: u8 = 4;

// Execute account indices whose owners seed the whitelist lookups.
pub const SOURCE_TOKEN_INDEX: u8 = 0;
pub const DESTINATION_TOKEN_INDEX: u8 = 2;
// Token account owner: bytes 32..64
const OWNER_OFFSET: u8 = 32;
const OWNER_LEN: u8 = 32;

pub const WHITELIST_META_COUNT: usize = 2;
pub const EXTRA_ACCOUNT_METAS_LEN: usize = TLV_DISCRIMINATOR_LEN
    + TLV_LENGTH_LEN
    + POD_SLICE_COUNT_LEN
    + EXTRA_ACCOUNT_META_LEN * WHITELIST_META_COUNT;

/// `["whitelist", owner of token account at index]` as an ExtraAccountMeta.
pub fn whitelist_meta(token_account_index: u8) -> [u8; EXTRA_ACCOUNT_META_LEN] {
    let mut meta = [0u8; EXTRA_ACCOUNT_META_LEN];
    meta[0] = META_PDA_FROM_HOOK_PROGRAM;

    let config = &mut meta[1..33];
    let mut at = 0;
    config[at] = SEED_LITERAL;
    config[at + 1] = WHITELIST_SEED.len() as u8;
    at += 2;
    config[at..at + WHITELIST_SEED.len()].copy_from_slice(WHITELIST_SEED);
    at += WHITELIST_SEED.len();
    config[at..at + 4].copy_from_slice(&[
        SEED_ACCOUNT_DATA,
        token_account_index,
        OWNER_OFFSET,
        OWNER_LEN,
    ]);

    // is_signer = false, is_writable = false
    meta
}

/// Write the ExtraAccountMetaList TLV for Execute into `dst`.
pub fn write_whitelist_extra_metas(dst: &mut [u8]) -> Result<(), ProgramError> {
    if dst.len() < EXTRA_ACCOUNT_METAS_LEN {
        return Err(ProgramError::AccountDataTooSmall);
    }

    let value_len = (POD_SLICE_COUNT_LEN + EXTRA_ACCOUNT_META_LEN * WHITELIST_META_COUNT) as u32;
    dst[0..8].copy_from_slice(&EXECUTE_DISCRIMINATOR);
    dst[8..12].copy_from_slice(&value_len.to_le_bytes());
    dst[12..16].copy_from_slice(&(WHITELIST_META_COUNT as u32).to_le_bytes());

    let first = 16;
    let second = first + EXTRA_ACCOUNT_META_LEN;
    dst[first..second].copy_from_slice(&whitelist_meta(SOURCE_TOKEN_INDEX));
    dst[second..second + EXTRA_ACCOUNT_META_LEN]
        .copy_from_slice(&whitelist_meta(DESTINATION_TOKEN_INDEX));
    Ok(())
}
