//! Analysis orchestration.
//!
//! Turns two decoded export documents into a [`Report`], escalating empty
//! extraction results to [`AppError::NoUsernames`].

use serde_json::Value;

use crate::domain::{AppError, ListKind, Report, Result, Role};

use super::comparator::{compare, compute_statistics};
use super::extractor::extract_usernames;
use super::search::filter_usernames;

/// Options for building a report.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// Which list to display.
    pub kind: ListKind,
    /// Search query applied to the displayed list.
    pub search: Option<String>,
}

/// Extracts both documents and builds a report.
///
/// # Errors
/// Returns [`AppError::NoUsernames`] if either document yields no usernames.
pub fn analyze_documents(
    following: &Value,
    followers: &Value,
    options: &AnalyzeOptions,
) -> Result<Report> {
    let following = extract_usernames(following, Role::Following);
    let followers = extract_usernames(followers, Role::Followers);

    if following.is_empty() || followers.is_empty() {
        tracing::warn!(
            following = following.len(),
            followers = followers.len(),
            "Extraction produced an empty list"
        );
        return Err(AppError::NoUsernames);
    }

    Ok(build_report(following, followers, options))
}

/// Builds a report from already extracted lists.
#[must_use]
pub fn build_report(following: Vec<String>, followers: Vec<String>, options: &AnalyzeOptions) -> Report {
    let comparison = compare(&following, &followers);
    let statistics = compute_statistics(&following, &followers, &comparison);

    let selected = options.kind.select(&comparison);
    let displayed = match options.search.as_deref() {
        Some(query) => filter_usernames(selected, query),
        None => selected.to_vec(),
    };

    tracing::info!(
        unfollowers = statistics.unfollowers,
        mutual = statistics.mutual,
        displayed = displayed.len(),
        "Comparison complete"
    );

    Report {
        following,
        followers,
        comparison,
        statistics,
        kind: options.kind,
        displayed,
    }
}
