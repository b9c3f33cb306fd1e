use pinocchio::pubkey::Pubkey;

pub const MINT_SEED: &[u8] = b"mint";
pub const METADATA_SEED: &[u8] = b"metadata";
pub const VAULT_SEED: &[u8] = b"vault";
pub const VAULT_STATE_SEED: &[u8] = b"vault_state";
pub const WHITELIST_SEED: &[u8] = b"whitelist";
pub const EXTRA_ACCOUNT_METAS_SEED: &[u8] = b"extra-account-metas";

pub const MINT_DECIMALS: u8 = 9;

pub const TOKEN_2022_PROGRAM_ID: Pubkey =
    pinocchio_pubkey::pubkey!("TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb");
pub const SYSTEM_PROGRAM_ID: Pubkey = pinocchio_system::ID;

// Token-2022 base layouts. Extension TLV data starts after the account type byte.
pub const BASE_ACCOUNT_LEN: usize = 165;
pub const ACCOUNT_TYPE_LEN: usize = 1;
pub const TLV_HEADER_LEN: usize = 4;

// Mint with TransferHook (64) + MetadataPointer (64).
pub const MINT_WITH_EXTENSIONS_LEN: usize =
    BASE_ACCOUNT_LEN + ACCOUNT_TYPE_LEN + (TLV_HEADER_LEN + 64) * 2;
// Token account with TransferHookAccount (1).
pub const VAULT_ACCOUNT_LEN: usize = BASE_ACCOUNT_LEN + ACCOUNT_TYPE_LEN + TLV_HEADER_LEN + 1;

// Token-2022 extension type ids
pub const EXT_TRANSFER_HOOK_ACCOUNT: u16 = 15;

// Token-2022 instruction tags
pub const TOKEN_IX_APPROVE: u8 = 4;
pub const TOKEN_IX_MINT_TO: u8 = 7;
pub const TOKEN_IX_INITIALIZE_ACCOUNT_3: u8 = 18;
pub const TOKEN_IX_INITIALIZE_MINT_2: u8 = 20;
pub const TOKEN_IX_TRANSFER_HOOK_EXTENSION: u8 = 36;
pub const TOKEN_IX_METADATA_POINTER_EXTENSION: u8 = 39;
// Sub-instruction tag shared by both pointer-style extensions.
pub const EXTENSION_IX_INITIALIZE: u8 = 0;

// SPL transfer-hook Execute discriminator: sha256("spl-transfer-hook-interface:execute")[..8]
pub const EXECUTE_DISCRIMINATOR: [u8; 8] = [105, 37, 101, 197, 75, 251, 102, 26];
