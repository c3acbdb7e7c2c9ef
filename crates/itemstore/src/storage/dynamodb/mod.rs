//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of [`ItemRepository`]
//! using `aws-sdk-dynamodb`. Items live in a single table whose partition key
//! is the string attribute `id`.
//!
//! [`ItemRepository`]: itemstore_core::storage::ItemRepository

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
