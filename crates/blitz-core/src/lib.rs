//! Core types and traits for the BlitzScan conversational AI.
//!
//! This crate provides the shared data model (scan context, conversation
//! state), error handling, and the text-generation trait boundary used
//! across the BlitzScan AI workspace.

/// Error types and result definitions.
pub mod error;
/// Trait definitions for text-generation providers.
pub mod traits;
/// Core data types for scans, turns, and conversation context.
pub mod types;

pub use error::{Error, Result};
pub use traits::TextGenerator;
pub use types::{
    ChatTurn, ConversationContext, Expertise, FocusArea, ScanContext, ScanData, ScanKind, Sender,
};
