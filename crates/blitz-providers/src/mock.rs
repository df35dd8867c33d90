//! Mock text generator for testing conversation flows.
//!
//! Allows defining canned responses for prompt patterns, enabling
//! end-to-end testing of the turn engine without a real backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use blitz_core::{ConversationContext, Result, TextGenerator};

/// Locks a mutex, recovering the guard if a panicking test poisoned it.
fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Mock generator returning pre-defined responses based on prompt patterns.
#[derive(Clone, Default)]
pub struct MockProvider {
    /// Predefined responses keyed by prompt substring.
    responses: Arc<Mutex<HashMap<String, String>>>,
    /// Default response if no pattern matches.
    default_response: Arc<Mutex<Option<String>>>,
    /// Prompts received, for verification.
    call_history: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    /// Creates an empty mock generator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a pattern-based response.
    #[must_use]
    pub fn with_response(self, pattern: impl Into<String>, response: impl Into<String>) -> Self {
        {
            let mut responses = lock_or_recover(&self.responses);
            responses.insert(pattern.into(), response.into());
        }
        self
    }

    /// Sets the response for prompts that match no pattern.
    #[must_use]
    pub fn with_default_response(self, response: impl Into<String>) -> Self {
        {
            let mut default = lock_or_recover(&self.default_response);
            *default = Some(response.into());
        }
        self
    }

    /// Returns every prompt this mock has received, in order.
    #[must_use]
    pub fn call_history(&self) -> Vec<String> {
        lock_or_recover(&self.call_history).clone()
    }

    /// Number of generate calls made.
    #[must_use]
    pub fn call_count(&self) -> usize {
        lock_or_recover(&self.call_history).len()
    }

    /// Finds a canned response for the prompt: exact match first, then
    /// substring match.
    fn find_response(&self, prompt: &str) -> Option<String> {
        let responses = lock_or_recover(&self.responses);

        if let Some(response) = responses.get(prompt) {
            return Some(response.clone());
        }

        responses
            .iter()
            .find(|(pattern, _)| prompt.contains(pattern.as_str()))
            .map(|(_, response)| response.clone())
    }
}

#[async_trait]
impl TextGenerator for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn generate(&self, prompt: &str, _context: &ConversationContext) -> Result<String> {
        {
            let mut history = lock_or_recover(&self.call_history);
            history.push(prompt.to_owned());
        }

        let text = self.find_response(prompt).unwrap_or_else(|| {
            let default = lock_or_recover(&self.default_response);
            default
                .clone()
                .unwrap_or_else(|| format!("Mock response ({} bytes of prompt)", prompt.len()))
        });

        Ok(text)
    }
}
