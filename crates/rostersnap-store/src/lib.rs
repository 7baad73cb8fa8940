//! rostersnap store - file persistence for snapshot chains
//!
//! Provides:
//! - Chain load/save as JSON with atomic temp→rename writes
//! - Live roster document loading
//! - Retention policy loading from TOML

pub mod atomic;
pub mod chain_file;
pub mod errors;
pub mod policy;

// Re-export key types
pub use chain_file::{load_chain, load_live_roster, save_chain};
pub use errors::Result;
pub use policy::load_policy;
