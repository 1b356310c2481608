//! Storage backend implementations.
//!
//! This module provides concrete implementations of [`HeroRepository`]
//! defined in `heroes_core::storage`. The backend is selected at compile time
//! via feature flags.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//! - `inmemory`: process-local storage, for running without a table store
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! # Examples
//!
//! Build with DynamoDB (default):
//! ```bash
//! cargo build -p heroes
//! ```
//!
//! Build with the in-memory backend:
//! ```bash
//! cargo build -p heroes --no-default-features --features inmemory
//! ```
//!
//! [`HeroRepository`]: heroes_core::storage::HeroRepository

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!(
    "Features 'inmemory' and 'dynamodb' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'dynamodb' or 'inmemory' feature. \
    Example: cargo build -p heroes --no-default-features --features inmemory"
);

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

// Always built for tests so handler and service tests can run without a table.
#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;

#[cfg(any(test, feature = "inmemory"))]
pub use inmemory::InMemoryRepository;
