//! Persistence layer for validation reports.
//!
//! [`store::ReportStore`] wraps a single SeaORM connection established at
//! process start. Reports are append-only: the schema has no update path and
//! the store exposes none.

pub mod entities;
pub mod error;
pub mod store;


pub use error::StorageError;
pub use store::ReportStore;
