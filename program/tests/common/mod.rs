#![allow(dead_code)]

use solana_program_test::{ProgramTest, ProgramTestBanksClientExt};
use std::{env, path::Path};

pub use solana_program_test::{BanksClient, BanksClientError, ProgramTestContext};
pub use solana_sdk::{
    account::Account,
    instruction::{Instruction, InstructionError},
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::{Transaction, TransactionError},
};

// Shared adapter for instruction encoding + PDA derivation
pub mod vault_adapter;
pub use vault_adapter::*;

pub const INITIAL_SUPPLY: u64 = 1_000_000_000; // 1 token at 9 decimals

pub fn program_test() -> ProgramTest {
    let deploy_dir = format!("{}/../target/deploy", env!("CARGO_MANIFEST_DIR"));
    env::set_var("BPF_OUT_DIR", &deploy_dir);
    let so_path = Path::new(&deploy_dir).join("whitelist_vault.so");
    assert!(
        so_path.exists(),
        "SBF artifact not found at {}.\nBuild first: `cargo-build-sbf --no-default-features --features sbf --manifest-path program/Cargo.toml`",
        so_path.display()
    );

    let mut pt = ProgramTest::default();
    pt.prefer_bpf(true);
    pt.set_compute_max_units(1_000_000);
    pt.add_upgradeable_program_to_genesis("whitelist_vault", &program_id());
    pt
}

/// Seed a Token-2022 account for the vault mint into genesis. The mint PDA
/// only exists after InitializeVault, but its address is fixed.
pub fn add_token_account(pt: &mut ProgramTest, owner: &Pubkey, amount: u64) -> Pubkey {
    let address = Pubkey::new_unique();
    pt.add_account(
        address,
        Account {
            lamports: 10_000_000,
            data: token_account_data(&vault_pdas().mint, owner, amount),
            owner: token_2022_id(),
            executable: false,
            rent_epoch: 0,
        },
    );
    address
}

pub fn add_funded_wallet(pt: &mut ProgramTest) -> Keypair {
    let wallet = Keypair::new();
    pt.add_account(
        wallet.pubkey(),
        Account {
            lamports: 10_000_000_000,
            data: vec![],
            owner: solana_sdk::system_program::id(),
            executable: false,
            rent_epoch: 0,
        },
    );
    wallet
}

pub async fn refresh_blockhash(ctx: &mut ProgramTestContext) {
    ctx.last_blockhash = ctx
        .banks_client
        .get_new_latest_blockhash(&ctx.last_blockhash)
        .await
        .unwrap();
}

/// Sign with the payer plus `extra` and process.
pub async fn send(
    ctx: &mut ProgramTestContext,
    ixs: &[Instruction],
    extra: &[&Keypair],
) -> Result<(), BanksClientError> {
    refresh_blockhash(ctx).await;
    let mut signers: Vec<&Keypair> = vec![&ctx.payer];
    signers.extend_from_slice(extra);
    let tx = Transaction::new_signed_with_payer(
        ixs,
        Some(&ctx.payer.pubkey()),
        &signers,
        ctx.last_blockhash,
    );
    ctx.banks_client.process_transaction(tx).await
}

/// Custom program error code carried by a failed transaction, if any.
pub fn custom_error(res: Result<(), BanksClientError>) -> Option<u32> {
    match res.err()?.unwrap() {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => Some(code),
        _ => None,
    }
}

pub async fn account_data(ctx: &mut ProgramTestContext, address: &Pubkey) -> Vec<u8> {
    ctx.banks_client
        .get_account(*address)
        .await
        .unwrap()
        .expect("account should exist")
        .data
}

pub async fn token_balance(ctx: &mut ProgramTestContext, token_account: &Pubkey) -> u64 {
    let data = account_data(ctx, token_account).await;
    u64::from_le_bytes(data[64..72].try_into().unwrap())
}

/// InitializeVault (payer as authority) followed by the extra-account-metas list.
pub async fn setup_vault(ctx: &mut ProgramTestContext) {
    let authority = ctx.payer.pubkey();
    send(
        ctx,
        &[
            ixn::initialize_vault(&authority, INITIAL_SUPPLY),
            ixn::initialize_extra_account_meta_list(&authority),
        ],
        &[],
    )
    .await
    .expect("vault setup should succeed");
}

/// Create `user`'s whitelist record with `limit` and optionally approve it.
pub async fn setup_whitelist(
    ctx: &mut ProgramTestContext,
    user: &Pubkey,
    limit: u64,
    approve: bool,
) {
    let admin = ctx.payer.pubkey();
    let mut ixs = vec![ixn::initialize_whitelist(&admin, user, limit)];
    if approve {
        ixs.push(ixn::add_to_whitelist(&admin, user));
    }
    send(ctx, &ixs, &[]).await.expect("whitelist setup should succeed");
}

pub async fn read_whitelist(
    ctx: &mut ProgramTestContext,
    user: &Pubkey,
) -> whitelist_vault::state::Whitelist {
    let data = account_data(ctx, &whitelist_pda(user).0).await;
    assert_eq!(data.len(), whitelist_vault::state::Whitelist::LEN);
    // Alignment 1, plain bytes
    unsafe { core::ptr::read_unaligned(data.as_ptr() as *const whitelist_vault::state::Whitelist) }
}

pub async fn read_vault_state(ctx: &mut ProgramTestContext) -> whitelist_vault::state::VaultState {
    let data = account_data(ctx, &vault_pdas().vault_state).await;
    assert_eq!(data.len(), whitelist_vault::state::VaultState::LEN);
    unsafe { core::ptr::read_unaligned(data.as_ptr() as *const whitelist_vault::state::VaultState) }
}
