//! Type definitions for INDX API

pub mod api;
pub mod constants;
pub mod trading;

// Re-export commonly used types
pub use api::*;
pub use constants::*;
pub use trading::*;
