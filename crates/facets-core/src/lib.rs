//! # Facets Core
//!
//! Core types, typed keys, and error definitions shared by the Facets
//! eligibility data-access crates. Everything here is plumbing for the
//! query layer; the eligibility rules themselves live in the SQL text
//! carried by `facets-repository`.

pub mod dates;
pub mod error;
pub mod keys;
pub mod result;
pub mod telemetry;

pub use dates::*;
pub use error::*;
pub use keys::*;
pub use result::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
