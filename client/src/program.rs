//! Typed handle to the deployed civic_vote program

use crate::{instruction, pda, Provider};
use anyhow::{anyhow, Result};
use civic_vote::{error::VoteError, state::ElectionConfig};
use solana_rpc_client_api::{
    client_error::{Error as ClientError, ErrorKind as ClientErrorKind},
    request::{RpcError, RpcResponseErrorData},
};
use solana_sdk::{
    instruction::{Instruction, InstructionError},
    pubkey::Pubkey,
    signature::Signature,
    transaction::{Transaction, TransactionError},
};

/// Client for one deployment of the civic_vote program
pub struct CivicVote {
    provider: Provider,
    program_id: Pubkey,
}

impl CivicVote {
    /// Handle to the program at its declared id
    pub fn new(provider: Provider) -> Self {
        Self::with_program_id(provider, crate::ID)
    }

    /// Handle addressing `program_id` instead of the declared id.
    ///
    /// The program only accepts calls under its declared id, so this is
    /// useful for checking how the client fails against an address with no
    /// civic_vote deployment, not for talking to a redeployed copy.
    pub fn with_program_id(provider: Provider, program_id: Pubkey) -> Self {
        Self {
            provider,
            program_id,
        }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    /// The wallet paying for transactions
    pub fn payer(&self) -> Pubkey {
        self.provider.payer()
    }

    /// Election PDA of the provider wallet
    pub fn election_address(&self) -> Pubkey {
        pda::election(&self.program_id, &self.payer()).0
    }

    /// Call `initialize` and wait for confirmation
    pub async fn initialize(&self) -> Result<Signature> {
        self.send(instruction::initialize(&self.program_id)).await
    }

    /// Create the election config owned by the provider wallet
    pub async fn initialize_election(
        &self,
        start_ts: i64,
        end_ts: i64,
        vote_fee_lamports: u64,
    ) -> Result<Signature> {
        let ix = instruction::initialize_election(
            &self.program_id,
            &self.payer(),
            start_ts,
            end_ts,
            vote_fee_lamports,
        );
        self.send(ix).await
    }

    /// Fetch and decode the election config of `authority`
    pub async fn election(&self, authority: &Pubkey) -> Result<ElectionConfig> {
        let (address, _) = pda::election(&self.program_id, authority);
        let account = self.provider.rpc().get_account(&address).await?;
        if account.owner != self.program_id {
            return Err(anyhow!(
                "account {} is owned by {}, not {}",
                address,
                account.owner,
                self.program_id
            ));
        }
        ElectionConfig::unpack(&account.data)
            .map_err(|e| anyhow!("invalid election account {}: {:?}", address, e))
    }

    async fn send(&self, ix: Instruction) -> Result<Signature> {
        let rpc = self.provider.rpc();
        let wallet = self.provider.wallet();
        let blockhash = rpc.get_latest_blockhash().await?;
        let tx =
            Transaction::new_signed_with_payer(&[ix], Some(&self.payer()), &[wallet], blockhash);

        tracing::debug!(signature = %tx.signatures[0], "submitting transaction");
        rpc.send_and_confirm_transaction(&tx)
            .await
            .map_err(rejection)
    }
}

/// Wrap a failed send, keeping the client error (and its preflight logs) as
/// the source.
pub fn rejection(err: ClientError) -> anyhow::Error {
    let summary = err.get_transaction_error().map(|tx_err| {
        let described = describe(tx_err).to_string();
        match preflight_logs(&err) {
            Some(logs) => with_logs(described, logs),
            None => described,
        }
    });
    let err = anyhow::Error::new(err);
    match summary {
        Some(summary) => err.context(summary),
        None => err,
    }
}

fn preflight_logs(err: &ClientError) -> Option<&[String]> {
    match err.kind() {
        ClientErrorKind::RpcError(RpcError::RpcResponseError {
            data: RpcResponseErrorData::SendTransactionPreflightFailure(result),
            ..
        }) => result.logs.as_deref(),
        _ => None,
    }
}

fn with_logs(message: String, logs: &[String]) -> String {
    if logs.is_empty() {
        return message;
    }
    let mut out = message;
    out.push_str("\nprogram logs:");
    for line in logs {
        out.push_str("\n  ");
        out.push_str(line);
    }
    out
}

/// Readable error for a rejected transaction, naming custom program errors
pub fn describe(err: TransactionError) -> anyhow::Error {
    if let TransactionError::InstructionError(index, InstructionError::Custom(code)) = &err {
        if let Ok(vote_err) = VoteError::try_from(*code) {
            return anyhow!(
                "instruction {} failed: {:?} ({}): {}",
                index,
                vote_err,
                code,
                vote_err.message()
            );
        }
    }
    anyhow!("transaction failed: {}", err)
}
