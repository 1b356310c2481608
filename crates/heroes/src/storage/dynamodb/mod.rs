//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of [`HeroRepository`]
//! using `aws-sdk-dynamodb`.
//!
//! [`HeroRepository`]: heroes_core::storage::HeroRepository

mod conversions;
mod error;
mod keys;
mod repository;

pub use repository::DynamoDbRepository;
