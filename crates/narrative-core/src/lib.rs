//! # Narrative-Core
//!
//! Core types for the lead script generator: raw and canonical lead
//! records, the priority and archetype ("Company DNA") tags, the archetype
//! profile table and the field normalizer that turns arbitrarily named
//! input columns into a [`CanonicalLead`].

pub mod error;
pub mod normalizer;
pub mod profile;
pub mod types;

pub use error::{Error, Result};
pub use normalizer::*;
pub use profile::*;
pub use types::*;
