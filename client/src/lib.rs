//! Client for the civic_vote program
//!
//! - `Provider`: RPC endpoint and wallet taken from the environment
//! - `CivicVote`: typed handle to the deployed program
//! - `instruction` / `pda`: pure builders, usable without a cluster
#![cfg(not(target_os = "solana"))]

pub mod cmd;
pub mod instruction;
pub mod pda;
mod program;
mod provider;

pub use civic_vote::{error::VoteError, state::ElectionConfig};
pub use program::{describe, CivicVote};
pub use provider::{Provider, ProviderConfig, DEFAULT_URL};

use solana_sdk::pubkey::Pubkey;

/// The deployed program id
pub const ID: Pubkey = Pubkey::new_from_array(civic_vote::ID);
