//! Domain layer - core types and errors.
//!
//! This layer contains pure domain models and error types
//! without any I/O.

pub mod config;
pub mod error;
pub mod models;

pub use config::{AppConfig, ExportConfig, OutputConfig};
pub use error::{AppError, Result};
pub use models::{ComparisonResult, ListKind, RelationshipEntry, Report, Role, Statistics};
