pub mod vault_state; // VaultState
pub mod whitelist;   // Whitelist

pub use vault_state::VaultState;
pub use whitelist::Whitelist;

/// First byte of every account this program owns.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountTag {
    Uninitialized = 0,
    VaultState = 1,
    Whitelist = 2,
}
