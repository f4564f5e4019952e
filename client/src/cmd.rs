//! Command line interface for the civic_vote program

use crate::{CivicVote, Provider, ProviderConfig};
use anyhow::Result;
use clap::{Parser, Subcommand};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use std::{
    io::Write,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Seconds in a day
const DAY: i64 = 86_400;

/// Command line interface for the civic_vote program
#[derive(Parser)]
pub struct App {
    #[clap(subcommand)]
    pub command: Command,

    /// RPC endpoint of the cluster
    #[clap(long, global = true, env = "ANCHOR_PROVIDER_URL")]
    pub url: Option<String>,

    /// Path to the wallet keypair
    #[clap(long, global = true, env = "ANCHOR_WALLET")]
    pub wallet: Option<PathBuf>,

    /// Verbosity level, repeat for more
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Program calls
#[derive(Subcommand)]
pub enum Command {
    /// Call `initialize` and print the transaction signature
    Initialize,

    /// Create the election config of the wallet
    InitElection {
        /// Unix timestamp voting opens at (default: a minute from now)
        #[clap(long)]
        start: Option<i64>,

        /// Unix timestamp voting closes at (default: a day after start)
        #[clap(long)]
        end: Option<i64>,

        /// Fee per vote in lamports
        #[clap(long, default_value = "0")]
        fee: u64,
    },

    /// Show an election config
    Election {
        /// The election authority (default: the wallet)
        #[clap(short, long)]
        authority: Option<Pubkey>,
    },
}

impl App {
    /// Run the application
    pub async fn run(&self) -> Result<()> {
        self.init_tracing()?;

        let config = ProviderConfig::resolve(self.url.clone(), self.wallet.clone())?;
        let provider = Provider::new(config)?;
        let program = CivicVote::new(provider);

        match &self.command {
            Command::Initialize => {
                let tx = program.initialize().await?;
                report_signature(&mut std::io::stdout().lock(), &tx)?;
            }
            Command::InitElection { start, end, fee } => {
                let (start, end) = election_window(*start, *end, unix_now()?);
                let tx = program.initialize_election(start, end, *fee).await?;
                tracing::info!(
                    election = %program.election_address(),
                    start,
                    end,
                    fee,
                    "election initialized: {}",
                    tx
                );
            }
            Command::Election { authority } => {
                let authority = authority.unwrap_or_else(|| program.payer());
                let config = program.election(&authority).await?;
                println!("authority:         {}", Pubkey::new_from_array(config.authority));
                println!("start_ts:          {}", config.start_ts());
                println!("end_ts:            {}", config.end_ts());
                println!("vote_fee_lamports: {}", config.vote_fee_lamports());
                println!("total_votes:       {}", config.total_votes());
                println!("bump:              {}", config.bump);
            }
        }

        Ok(())
    }

    fn init_tracing(&self) -> Result<()> {
        let level = match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };

        // If verbose flag is set above 0, use it; otherwise use RUST_LOG or default
        let filter = if self.verbose > 0 {
            EnvFilter::new(level)
        } else if let Ok(env) = std::env::var("RUST_LOG") {
            EnvFilter::new(env)
        } else {
            EnvFilter::new("info")
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()?;
        Ok(())
    }
}

fn unix_now() -> Result<i64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64)
}

/// The runner's report line. Written directly so log filtering never hides it.
fn report_signature(out: &mut impl Write, signature: &Signature) -> Result<()> {
    writeln!(out, "Your transaction signature {}", signature)?;
    Ok(())
}

/// Fill in a missing start (a minute from `now`) and end (a day after start).
/// Saturates instead of overflowing; the program rejects a degenerate window.
fn election_window(start: Option<i64>, end: Option<i64>, now: i64) -> (i64, i64) {
    let start = start.unwrap_or(now.saturating_add(60));
    let end = end.unwrap_or(start.saturating_add(DAY));
    (start, end)
}
