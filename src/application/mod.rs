//! Application layer - use cases and orchestration.
//!
//! This layer contains the extraction and comparison logic plus
//! output formatting.

pub mod comparator;
pub mod extractor;
pub mod formatter;
pub mod report;
pub mod search;

pub use comparator::{compare, compute_statistics};
pub use extractor::extract_usernames;
pub use formatter::{
    clipboard_text, format_report, format_stats, share_summary, share_username_message,
    OutputFormat,
};
pub use report::{analyze_documents, build_report, AnalyzeOptions};
pub use search::filter_usernames;
