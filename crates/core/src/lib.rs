//! itemstore_core - functional core of the itemstore request pipeline.
//!
//! Pure data types and pure functions: schema derivation and validation,
//! update-expression construction, pagination cursors, identifiers and the
//! error taxonomy. The only I/O seam is the [`storage::ItemRepository`] trait.

pub mod error;
pub mod expression;
pub mod identifier;
pub mod pagination;
pub mod schema;
pub mod storage;
