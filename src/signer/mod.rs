//! Credentials, configuration and request signing for INDX

pub mod config;
pub mod signer;

pub use config::Config;
pub use signer::IndxSigner;
