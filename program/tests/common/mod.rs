#![allow(dead_code)]

use solana_program_test::{ProgramTest, ProgramTestBanksClientExt};
use std::{env, path::Path};

pub use solana_program_test::{BanksClient, ProgramTestContext};
pub use solana_sdk::{
    clock::Clock,
    instruction::{AccountMeta, Instruction, InstructionError},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    system_instruction, system_program,
    transaction::{Transaction, TransactionError},
};

pub fn program_id() -> Pubkey {
    Pubkey::new_from_array(civic_vote::ID)
}

pub fn program_test() -> ProgramTest {
    let deploy_dir = format!("{}/../target/deploy", env!("CARGO_MANIFEST_DIR"));
    env::set_var("BPF_OUT_DIR", &deploy_dir);
    let so_path = Path::new(&deploy_dir).join("civic_vote.so");
    assert!(
        so_path.exists(),
        "SBF artifact not found at {}.\nBuild first: `cargo-build-sbf --no-default-features --features sbf --manifest-path program/Cargo.toml`",
        so_path.display()
    );

    let mut pt = ProgramTest::default();
    pt.prefer_bpf(true);
    pt.add_upgradeable_program_to_genesis("civic_vote", &program_id());
    pt
}

pub async fn refresh_blockhash(ctx: &mut ProgramTestContext) {
    ctx.last_blockhash = ctx
        .banks_client
        .get_new_latest_blockhash(&ctx.last_blockhash)
        .await
        .unwrap();
}

pub async fn transfer(ctx: &mut ProgramTestContext, recipient: &Pubkey, amount: u64) {
    let tx = Transaction::new_signed_with_payer(
        &[system_instruction::transfer(&ctx.payer.pubkey(), recipient, amount)],
        Some(&ctx.payer.pubkey()),
        &[&ctx.payer],
        ctx.last_blockhash,
    );
    ctx.banks_client.process_transaction(tx).await.unwrap();
}

pub async fn now(ctx: &mut ProgramTestContext) -> i64 {
    ctx.banks_client
        .get_sysvar::<Clock>()
        .await
        .unwrap()
        .unix_timestamp
}

// ---------- Instruction builders ----------
pub mod ixn {
    use super::*;

    pub fn initialize() -> Instruction {
        Instruction {
            program_id: program_id(),
            accounts: vec![],
            data: vec![0],
        }
    }

    pub fn election_address(authority: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[b"election", authority.as_ref()], &program_id())
    }

    pub fn initialize_election(
        election: &Pubkey,
        authority: &Pubkey,
        start_ts: i64,
        end_ts: i64,
        vote_fee_lamports: u64,
    ) -> Instruction {
        let mut data = Vec::with_capacity(1 + 24);
        data.push(1);
        data.extend_from_slice(&start_ts.to_le_bytes());
        data.extend_from_slice(&end_ts.to_le_bytes());
        data.extend_from_slice(&vote_fee_lamports.to_le_bytes());
        Instruction {
            program_id: program_id(),
            accounts: vec![
                AccountMeta::new(*election, false),
                AccountMeta::new(*authority, true),
                AccountMeta::new_readonly(system_program::id(), false),
            ],
            data,
        }
    }
}

// ---------- Error helpers ----------
pub mod err {
    use super::*;
    use civic_vote::error::VoteError;
    use solana_program_test::BanksClientError;

    pub fn instruction_error(res: Result<(), BanksClientError>) -> InstructionError {
        match res.expect_err("transaction should fail").unwrap() {
            TransactionError::InstructionError(_, e) => e,
            other => panic!("unexpected transaction error: {:?}", other),
        }
    }

    pub fn is_vote_error(e: &InstructionError, expected: VoteError) -> bool {
        *e == InstructionError::Custom(expected.code())
    }
}
