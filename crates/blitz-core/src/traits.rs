use async_trait::async_trait;

use crate::{ConversationContext, Result};

/// Trait for text-generation services that turn a rendered prompt into a
/// natural-language response.
///
/// The contract is deliberately narrow: send a prompt string, receive a
/// response string. The conversation context travels alongside the prompt
/// because the concrete deployment mirrors the same state to the backend;
/// implementations may ignore it. Retries, timeouts, and cancellation
/// belong to the calling layer.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the unique identifier for this generator.
    fn name(&self) -> &'static str;

    /// Checks whether this generator is currently able to serve requests.
    async fn is_available(&self) -> bool;

    /// Generates a response for the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if the generator is unavailable, the request fails,
    /// or the response cannot be parsed.
    async fn generate(&self, prompt: &str, context: &ConversationContext) -> Result<String>;
}
