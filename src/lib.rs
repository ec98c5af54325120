//! Follow Diff - compare social-graph exports.
//!
//! Normalizes follower/following export documents into username lists and
//! computes the relationships between them: who doesn't follow back, who
//! is mutual, and summary statistics.

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

pub use application::{compare, compute_statistics, extract_usernames};
pub use domain::{AppError, ComparisonResult, Result, Role, Statistics};
