//! # Narrative-Agents
//!
//! Turns raw lead rows into prioritized, personalized outreach scripts.
//!
//! ## Pipeline
//!
//! Every row runs through the same three steps:
//!
//! 1. **Normalizer** (`narrative_core::normalize`): arbitrary columns → canonical lead
//! 2. **Classifier**: title → priority tier, size/company name → Company DNA
//! 3. **Synthesizer**: Company DNA templates → subject, email body, connection message
//!
//! ```text
//! RawRecord
//!     ↓
//! [Normalizer] → CanonicalLead
//!     ↓
//! [Classifier] → ClassifiedLead ("P1 - Hot", "Enterprise")
//!     ↓
//! [Synthesizer] ← OutreachParams (value prop, sender)
//!     ↓
//! ResultRow
//! ```
//!
//! The [`BatchRunner`] applies the pipeline to a whole table, preserving row
//! count and order.

pub mod classifier;
pub mod params;
pub mod runner;
pub mod synthesizer;
pub mod templates;

pub use classifier::*;
pub use params::*;
pub use runner::*;
pub use synthesizer::*;
pub use templates::*;
