//! Query classification and prompt construction for the BlitzScan assistant.
//!
//! This crate maps free-form user questions (plus optional scan context) to
//! one of ten intent categories, renders the category-specific instruction
//! prompt for the downstream text-generation service, and drives the
//! conversational turn loop. Classification and composition are pure
//! functions; the caller owns all conversation state.

/// Fixed seven-tool catalog the assistant may recommend.
pub mod catalog;
/// Keyword-based intent classification.
pub mod classifier;
/// Per-intent prompt templates and the composition dispatcher.
pub mod prompts;
/// Keyword-group tool recommendation heuristic.
pub mod recommend;
/// Conversational turn engine.
pub mod session;
/// Per-intent follow-up suggestion tables.
pub mod suggestions;

pub use catalog::{ToolProfile, profile};
pub use classifier::{QueryIntent, classify, keywords};
pub use prompts::{Classification, compose, process_query};
pub use recommend::recommend_tools;
pub use session::{ChatEngine, TurnOutcome};
pub use suggestions::suggestions_for;
