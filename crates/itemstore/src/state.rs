//! Application state shared by all request handlers.
//!
//! Everything in here is read-only after construction: the store handle, the
//! two derived schemas and the configuration. Handlers receive it through
//! axum's `State` extractor instead of reaching for globals.

use std::sync::Arc;

use itemstore_core::schema::{item_fields, Schemas};
use itemstore_core::storage::ItemRepository;

use crate::config::Config;

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "dynamodb", feature = "inmemory"))]
compile_error!("Cannot enable both 'dynamodb' and 'inmemory' storage features");

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'dynamodb'");

/// Shared application state.
///
/// Cheap to clone: every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Item store.
    pub repo: Arc<dyn ItemRepository>,
    /// CREATE and UPDATE schemas of the items entity.
    pub schemas: Arc<Schemas>,
    /// Runtime configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates the state around a store backend.
    pub fn new(repo: Arc<dyn ItemRepository>, config: Config) -> Self {
        Self {
            repo,
            schemas: Arc::new(Schemas::new(&item_fields())),
            config: Arc::new(config),
        }
    }

    /// State backed by an empty in-memory store.
    #[cfg(any(test, feature = "inmemory"))]
    pub fn in_memory(config: Config) -> Self {
        Self::new(
            Arc::new(crate::storage::inmemory::InMemoryRepository::new()),
            config,
        )
    }
}

#[cfg(any(test, feature = "inmemory"))]
impl Default for AppState {
    fn default() -> Self {
        Self::in_memory(Config::default())
    }
}
