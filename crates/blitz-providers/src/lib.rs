//! Text-generation providers for the BlitzScan assistant.
//!
//! Implementations of the [`blitz_core::TextGenerator`] boundary: an
//! HTTP-backed provider for the aggregator backend and a mock provider for
//! tests, plus the provider configuration loader.

/// HTTP provider for the aggregator backend.
pub mod backend;
/// Provider configuration loading.
pub mod config;
/// Mock provider for testing.
pub mod mock;

pub use backend::BackendProvider;
pub use config::ProviderConfig;
pub use mock::MockProvider;
