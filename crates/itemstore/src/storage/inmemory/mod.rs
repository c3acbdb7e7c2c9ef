//! In-memory storage backend for testing.
//!
//! This module provides an in-memory implementation of [`ItemRepository`]
//! that keeps items in a `BTreeMap` wrapped in `Arc<RwLock<_>>`. Scans walk
//! the map in identifier order, which makes cursors stable between pages.
//!
//! [`ItemRepository`]: itemstore_core::storage::ItemRepository
//!
//! # Example
//!
//! ```rust,ignore
//! use itemstore::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
