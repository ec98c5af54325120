//! Infrastructure layer - external adapters (filesystem).
//!
//! This layer handles all I/O operations.

pub mod config;
pub mod exporter;
pub mod loader;

pub use config::{config_file_path, ensure_config_exists, load_config, render_config};
pub use exporter::{default_export_filename, export_list};
pub use loader::{load_document, parse_document};
