//! Quotegen - a Rust-based inspirational quote generator
//!
//! This library provides the core functionality: loading a topic-keyed
//! quote database (with a built-in fallback), resolving free-text input
//! to a topic, and sampling random quotes from it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod session;
pub mod store;
pub mod utils;

// Re-export core types for easier use
pub use self::core::{
    data::{Quote, QuoteDatabase},
    resolver::{self, ResolveError, SAMPLE_SIZE},
};
pub use session::{Notice, Session};
pub use store::{LoadOutcome, LoadSource, QuoteStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main library interface for external usage
pub struct QuoteGen {
    store: QuoteStore,
}

impl QuoteGen {
    /// Create a new QuoteGen instance with the given configuration
    pub fn new(config: config::Config) -> Self {
        Self {
            store: QuoteStore::new(config),
        }
    }

    /// Get the underlying store for direct access
    pub fn store(&self) -> &QuoteStore {
        &self.store
    }

    /// Perform the session's single load attempt and start a session
    pub async fn start_session(&self) -> Session {
        Session::start(self.store.load().await)
    }
}
