//! Domain models for follower/following comparison.
//!
//! These models represent the entries found in platform exports and the
//! derived relationship sets computed from them.

use serde::Serialize;

/// Which side of the relationship an export describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Accounts the user follows.
    Following,
    /// Accounts following the user.
    Followers,
}

impl Role {
    /// Key used by exports that name the list after the role.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Following => "following",
            Self::Followers => "followers",
        }
    }

    /// Key used by exports that prefix the role with `relationships_`.
    #[must_use]
    pub const fn relationships_key(self) -> &'static str {
        match self {
            Self::Following => "relationships_following",
            Self::Followers => "relationships_followers",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "following" => Ok(Self::Following),
            "followers" => Ok(Self::Followers),
            _ => Err(format!("Unknown role: {s}. Use: following, followers")),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// One person in an export, by the shape it was recorded in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationshipEntry {
    /// A bare string identifier.
    Plain(String),
    /// `{"string_list_data": [{"value": ...}]}`, used by followers exports.
    StringListData(String),
    /// `{"title": ...}`, used by following exports. May also carry a `value`.
    Titled {
        title: String,
        value: Option<String>,
    },
    /// `{"value": ...}`.
    Value(String),
}

impl RelationshipEntry {
    /// Resolves the entry to a username for the given role.
    ///
    /// Titles only count for following exports; a titled entry in a
    /// followers export falls back to its `value`, if any.
    #[must_use]
    pub fn into_username(self, role: Role) -> Option<String> {
        match self {
            Self::Plain(name) | Self::StringListData(name) | Self::Value(name) => Some(name),
            Self::Titled { title, value } => match role {
                Role::Following => Some(title),
                Role::Followers => value,
            },
        }
    }
}

/// Relationship sets derived from two username lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    /// Elements of A present in B, in A's order.
    pub intersection: Vec<String>,
    /// Distinct elements of A then B, in first-occurrence order.
    pub union: Vec<String>,
    /// Elements of A absent from B, in A's order.
    pub a_only: Vec<String>,
    /// Elements of B absent from A, in B's order.
    pub b_only: Vec<String>,
}

/// Summary counts for a following/followers pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Statistics {
    /// Number of entries in the following list.
    pub total_following: usize,
    /// Number of entries in the followers list.
    pub total_followers: usize,
    /// Accounts followed that don't follow back.
    pub unfollowers: usize,
    /// Accounts in both lists.
    pub mutual: usize,
    /// Followers the user doesn't follow back.
    pub not_followed_back: usize,
    /// `unfollowers / total_following * 100`, or 0 with nothing followed.
    pub unfollower_percentage: f64,
}

impl Statistics {
    /// Percentage rounded to one decimal, e.g. `33.3%`.
    #[must_use]
    pub fn percentage_label(&self) -> String {
        format!("{:.1}%", self.unfollower_percentage)
    }
}

/// Which derived list to display or export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// Following but not followed back.
    #[default]
    Unfollowers,
    /// Present in both lists.
    Mutual,
    /// Followers not followed back.
    Fans,
    /// Everyone in either list.
    Union,
}

impl ListKind {
    /// Human-readable heading.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unfollowers => "Unfollowers",
            Self::Mutual => "Mutual Follows",
            Self::Fans => "Not Followed Back",
            Self::Union => "All Accounts",
        }
    }

    /// Slug used in file names.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Unfollowers => "unfollowers",
            Self::Mutual => "mutual",
            Self::Fans => "fans",
            Self::Union => "union",
        }
    }

    /// Picks the matching sequence out of a comparison.
    #[must_use]
    pub fn select(self, comparison: &ComparisonResult) -> &[String] {
        match self {
            Self::Unfollowers => &comparison.a_only,
            Self::Mutual => &comparison.intersection,
            Self::Fans => &comparison.b_only,
            Self::Union => &comparison.union,
        }
    }
}

impl std::str::FromStr for ListKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unfollowers" => Ok(Self::Unfollowers),
            "mutual" | "mutuals" => Ok(Self::Mutual),
            "fans" => Ok(Self::Fans),
            "union" | "all" => Ok(Self::Union),
            _ => Err(format!(
                "Unknown list: {s}. Use: unfollowers, mutual, fans, union"
            )),
        }
    }
}

/// Everything a renderer needs for one following/followers analysis.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Usernames extracted from the following export.
    pub following: Vec<String>,
    /// Usernames extracted from the followers export.
    pub followers: Vec<String>,
    /// Comparison with following as A and followers as B.
    pub comparison: ComparisonResult,
    /// Counts derived from the comparison.
    pub statistics: Statistics,
    /// Which list is being displayed.
    pub kind: ListKind,
    /// The displayed list after any search filter.
    pub displayed: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_str() {
        assert_eq!("following".parse::<Role>(), Ok(Role::Following));
        assert_eq!("FOLLOWERS".parse::<Role>(), Ok(Role::Followers));
        assert!("friends".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_keys() {
        assert_eq!(Role::Following.key(), "following");
        assert_eq!(
            Role::Followers.relationships_key(),
            "relationships_followers"
        );
    }

    #[test]
    fn test_titled_entry_depends_on_role() {
        let entry = RelationshipEntry::Titled {
            title: "alice".to_string(),
            value: Some("alice_v".to_string()),
        };
        assert_eq!(
            entry.clone().into_username(Role::Following),
            Some("alice".to_string())
        );
        assert_eq!(
            entry.into_username(Role::Followers),
            Some("alice_v".to_string())
        );

        let bare_title = RelationshipEntry::Titled {
            title: "alice".to_string(),
            value: None,
        };
        assert_eq!(bare_title.into_username(Role::Followers), None);
    }

    #[test]
    fn test_percentage_label() {
        let stats = Statistics {
            unfollower_percentage: 100.0 / 3.0,
            ..Default::default()
        };
        assert_eq!(stats.percentage_label(), "33.3%");
        assert_eq!(Statistics::default().percentage_label(), "0.0%");
    }

    #[test]
    fn test_list_kind_select() {
        let comparison = ComparisonResult {
            intersection: vec!["b".into()],
            union: vec!["a".into(), "b".into(), "c".into()],
            a_only: vec!["a".into()],
            b_only: vec!["c".into()],
        };
        assert_eq!(ListKind::Unfollowers.select(&comparison), ["a"]);
        assert_eq!(ListKind::Mutual.select(&comparison), ["b"]);
        assert_eq!(ListKind::Fans.select(&comparison), ["c"]);
        assert_eq!(ListKind::Union.select(&comparison).len(), 3);
    }

    #[test]
    fn test_list_kind_from_str() {
        assert_eq!("mutual".parse::<ListKind>(), Ok(ListKind::Mutual));
        assert_eq!("all".parse::<ListKind>(), Ok(ListKind::Union));
        assert!("nobody".parse::<ListKind>().is_err());
    }
}
