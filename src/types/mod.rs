//! Core Domain Types
//!
//! Shared vocabulary for the whole crate: the unified error type, the idea
//! snapshot with its tag enumerations, and the founder profile.

pub mod error;
pub mod idea;
pub mod profile;

pub use error::{ErrorCategory, ForgeError, LlmError, Result};
pub use idea::{BusinessModel, Domain, IdeaSnapshot, ProblemSource, Technology};
pub use profile::{
    BudgetTier, FounderNetwork, FounderProfile, FounderResources, TimeCommitment,
};
