//! Set comparison between two username lists.
//!
//! Lists are treated as sets for membership, but every derived sequence
//! keeps the order of the list it was filtered from.

use std::collections::HashSet;

use crate::domain::{ComparisonResult, Statistics};

/// Compares two username lists.
///
/// Equality is exact and case-sensitive.
#[must_use]
pub fn compare(list_a: &[String], list_b: &[String]) -> ComparisonResult {
    let set_a: HashSet<&str> = list_a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = list_b.iter().map(String::as_str).collect();

    let intersection = list_a
        .iter()
        .filter(|name| set_b.contains(name.as_str()))
        .cloned()
        .collect();

    let a_only = list_a
        .iter()
        .filter(|name| !set_b.contains(name.as_str()))
        .cloned()
        .collect();

    let b_only = list_b
        .iter()
        .filter(|name| !set_a.contains(name.as_str()))
        .cloned()
        .collect();

    let mut seen = HashSet::with_capacity(set_a.len() + set_b.len());
    let union = list_a
        .iter()
        .chain(list_b)
        .filter(|name| seen.insert(name.as_str()))
        .cloned()
        .collect();

    ComparisonResult {
        intersection,
        union,
        a_only,
        b_only,
    }
}

/// Derives statistics from a following list, a followers list and their
/// comparison (following as A, followers as B).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute_statistics(
    following: &[String],
    followers: &[String],
    comparison: &ComparisonResult,
) -> Statistics {
    let total_following = following.len();
    let unfollowers = comparison.a_only.len();

    let unfollower_percentage = if total_following > 0 {
        unfollowers as f64 / total_following as f64 * 100.0
    } else {
        0.0
    };

    Statistics {
        total_following,
        total_followers: followers.len(),
        unfollowers,
        mutual: comparison.intersection.len(),
        not_followed_back: comparison.b_only.len(),
        unfollower_percentage,
    }
}

impl Statistics {
    /// Compares the lists and derives statistics in one step.
    #[must_use]
    pub fn from_lists(following: &[String], followers: &[String]) -> Self {
        compute_statistics(following, followers, &compare(following, followers))
    }
}
