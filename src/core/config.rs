//! Configuration for batch product creation
//!
//! This module provides configuration types controlling how the creator registry
//! runs batch requests, including concurrency settings and thread pool management.

use serde::{Deserialize, Serialize};

/// Enumeration of supported concurrency modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConcurrencyMode {
    /// Products are created in order on the calling thread
    #[default]
    Sequential,
    /// Products are created concurrently on a Rayon pool
    Rayon,
}

/// Configuration for the catalogue and its creator registries
///
/// Holds the options that control how batches of products are created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueConfig {
    /// The concurrency mode to use for batch creation
    pub concurrency_mode: ConcurrencyMode,
    /// The size of the thread pool for parallel creation
    /// Only relevant when concurrency_mode is Rayon; `None` uses the global pool
    pub thread_pool_size: Option<usize>,
}

impl CatalogueConfig {
    /// Create a new configuration with default values
    ///
    /// Default configuration uses Sequential mode with no thread pool
    pub fn new() -> Self {
        Self {
            concurrency_mode: ConcurrencyMode::default(),
            thread_pool_size: None,
        }
    }

    /// Set the concurrency mode for batch creation
    pub fn with_concurrency(mut self, mode: ConcurrencyMode) -> Self {
        self.concurrency_mode = mode;
        self
    }

    /// Set the thread pool size for parallel creation
    ///
    /// # Note
    /// This setting only affects batches when concurrency_mode is Rayon
    pub fn with_thread_pool_size(mut self, size: usize) -> Self {
        self.thread_pool_size = Some(size);
        self
    }

    /// Whether batches should run on a Rayon pool
    pub fn is_parallel(&self) -> bool {
        self.concurrency_mode == ConcurrencyMode::Rayon
    }
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self::new()
    }
}
