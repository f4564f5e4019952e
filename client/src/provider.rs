//! Connection and signing identity taken from the ambient environment

use anyhow::{anyhow, Result};
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    pubkey::Pubkey,
    signature::Keypair,
    signer::{EncodableKey, Signer},
};
use std::{env, path::PathBuf};

/// Local validator RPC endpoint
pub const DEFAULT_URL: &str = "http://127.0.0.1:8899";

/// Environment variable holding the RPC endpoint
pub const PROVIDER_URL_ENV: &str = "ANCHOR_PROVIDER_URL";

/// Environment variable holding the wallet keypair path
pub const WALLET_ENV: &str = "ANCHOR_WALLET";

/// Where to connect and who signs
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    pub url: String,
    pub wallet: PathBuf,
    pub commitment: CommitmentConfig,
}

impl ProviderConfig {
    /// Read `ANCHOR_PROVIDER_URL` and `ANCHOR_WALLET`
    pub fn from_env() -> Result<Self> {
        Self::resolve(
            env::var(PROVIDER_URL_ENV).ok(),
            env::var(WALLET_ENV).ok().map(PathBuf::from),
        )
    }

    /// Fill unset values with the localnet endpoint and the solana CLI keypair
    pub fn resolve(url: Option<String>, wallet: Option<PathBuf>) -> Result<Self> {
        let url = url
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_URL.to_string());
        let wallet = match wallet {
            Some(path) => path,
            None => default_wallet()?,
        };

        Ok(Self {
            url,
            wallet,
            commitment: CommitmentConfig::confirmed(),
        })
    }
}

fn default_wallet() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(anyhow!("Home directory not found"))?;
    Ok(home.join(".config/solana/id.json"))
}

/// RPC client paired with the wallet that pays for and signs transactions
pub struct Provider {
    rpc: RpcClient,
    wallet: Keypair,
}

impl Provider {
    /// Provider configured from the environment
    pub fn env() -> Result<Self> {
        Self::new(ProviderConfig::from_env()?)
    }

    pub fn new(config: ProviderConfig) -> Result<Self> {
        let wallet = Keypair::read_from_file(&config.wallet).map_err(|e| {
            anyhow!("Error reading `{}`: {}", config.wallet.display(), e)
        })?;
        tracing::debug!(url = %config.url, wallet = %wallet.pubkey(), "provider");
        Ok(Self::with_keypair(config.url, wallet, config.commitment))
    }

    pub fn with_keypair(url: String, wallet: Keypair, commitment: CommitmentConfig) -> Self {
        Self {
            rpc: RpcClient::new_with_commitment(url, commitment),
            wallet,
        }
    }

    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    pub fn wallet(&self) -> &Keypair {
        &self.wallet
    }

    pub fn payer(&self) -> Pubkey {
        self.wallet.pubkey()
    }
}
