pub mod election; // ElectionConfig

// Re-export the types so everyone can `use crate::state::{...}`.
pub use election::ElectionConfig;
