//! Conversational turn engine.
//!
//! Drives the request/response loop on top of a [`TextGenerator`]: each
//! user turn triggers exactly one classification, one prompt composition,
//! and one generator call, awaited to completion. The engine holds no
//! conversation state of its own; the caller owns the
//! [`ConversationContext`] and must serialize concurrent turns of the same
//! session.

use std::sync::Arc;

use blitz_core::{ConversationContext, Result, ScanContext, TextGenerator};
use tracing::{debug, info};

use crate::classifier::{QueryIntent, classify};
use crate::prompts::compose;
use crate::suggestions::suggestions_for;

/// Result of one completed conversation turn.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// Intent the turn was classified into.
    pub intent: QueryIntent,
    /// Response text from the generator.
    pub reply: String,
    /// Follow-up suggestion chips for the next turn.
    pub suggestions: &'static [&'static str],
}

/// Turn driver wrapping a text-generation provider.
pub struct ChatEngine {
    /// Downstream text-generation service.
    generator: Arc<dyn TextGenerator>,
}

impl ChatEngine {
    /// Creates an engine over the given generator.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Processes one free-text user turn.
    ///
    /// Classifies the text (keyword and contextual rules only; the forced
    /// report path requires [`Self::generate_report`]), composes the
    /// intent's prompt, calls the generator, and records the exchange in
    /// the transcript and topic window.
    ///
    /// # Errors
    ///
    /// Returns an error if the generator call fails. The context is not
    /// modified on failure.
    pub async fn process_turn(
        &self,
        context: &mut ConversationContext,
        user_text: &str,
    ) -> Result<TurnOutcome> {
        let intent = classify(user_text, None, None, Some(context));
        let prompt = compose(intent, user_text, None, None, Some(context));
        debug!(?intent, generator = self.generator.name(), "processing turn");

        let reply = self.generator.generate(&prompt, context).await?;

        context.push_user(user_text);
        context.record_topic(user_text);
        context.push_bot(reply.clone());

        Ok(TurnOutcome {
            intent,
            reply,
            suggestions: suggestions_for(intent),
        })
    }

    /// Generates a structured security report for a completed scan.
    ///
    /// This is the forced-classification path: the scan kind and payload
    /// are both present, so the intent is always
    /// [`QueryIntent::SecurityReport`]. The scan becomes the active scan of
    /// the conversation and the report is appended as a bot turn;
    /// persisting the report text stays with the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the generator call fails. The context is not
    /// modified on failure.
    pub async fn generate_report(
        &self,
        context: &mut ConversationContext,
        scan: ScanContext,
    ) -> Result<TurnOutcome> {
        let intent = classify("", Some(scan.kind), Some(&scan.data), Some(context));
        let prompt = compose(intent, "", Some(scan.kind), Some(&scan.data), Some(context));
        info!(kind = %scan.kind, url = %scan.url, "generating scan report");

        let reply = self.generator.generate(&prompt, context).await?;

        context.current_scan = Some(scan);
        context.push_bot(reply.clone());

        Ok(TurnOutcome {
            intent,
            reply,
            suggestions: suggestions_for(intent),
        })
    }
}
