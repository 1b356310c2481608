//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of [`HeroRepository`]
//! that stores heroes in a HashMap wrapped in `Arc<RwLock<_>>`. It backs the
//! test suite and the `inmemory` feature, for running without a table store.
//!
//! # Example
//!
//! ```rust,ignore
//! use heroes::storage::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```
//!
//! [`HeroRepository`]: heroes_core::storage::HeroRepository

mod repository;

pub use repository::InMemoryRepository;
