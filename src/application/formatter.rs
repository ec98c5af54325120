//! Output formatting for comparison reports.
//!
//! Supports a colored text summary, tables, JSON, plain newline-joined
//! lists (clipboard text) and the share summary.

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};

use crate::domain::{Report, Statistics};

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored summary followed by the list.
    #[default]
    Text,
    /// Statistics and list as tables.
    Table,
    /// JSON report for programmatic use.
    Json,
    /// Newline-joined usernames only.
    Plain,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "plain" | "txt" => Ok(Self::Plain),
            _ => Err(format!("Unknown format: {s}. Use: text, table, json, plain")),
        }
    }
}

/// Renders a report in the given format.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn format_report(report: &Report, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(format_report_text(report)),
        OutputFormat::Table => Ok(format_report_table(report)),
        OutputFormat::Json => format_report_json(report),
        OutputFormat::Plain => Ok(clipboard_text(&report.displayed)),
    }
}

/// Formats statistics for display.
pub fn format_stats(stats: &Statistics) -> String {
    format!(
        "{}\n  Following: {}\n  Followers: {}\n  Unfollowers: {} ({})\n  Mutual follows: {}\n  Not followed back: {}",
        "📊 Statistics".bold(),
        stats.total_following.to_string().cyan(),
        stats.total_followers.to_string().cyan(),
        stats.unfollowers.to_string().red(),
        stats.percentage_label().red(),
        stats.mutual.to_string().green(),
        stats.not_followed_back.to_string().yellow()
    )
}

/// Formats the statistics and the displayed list as colored text.
pub fn format_report_text(report: &Report) -> String {
    let mut out = format_stats(&report.statistics);
    out.push_str("\n\n");
    out.push_str(&format!(
        "{} ({})\n",
        format!("👥 {}", report.kind.label()).bold(),
        report.displayed.len()
    ));

    if report.displayed.is_empty() {
        out.push_str(&format!("  {}", "Nobody here 🎉".green()));
    } else {
        let width = report.displayed.len().to_string().len();
        let lines: Vec<String> = report
            .displayed
            .iter()
            .enumerate()
            .map(|(i, name)| format!("  {:>width$}. @{}", i + 1, name))
            .collect();
        out.push_str(&lines.join("\n"));
    }

    out
}

/// Formats the statistics and the displayed list as tables.
pub fn format_report_table(report: &Report) -> String {
    let stats = &report.statistics;

    let mut summary = Table::new();
    summary.load_preset(UTF8_FULL);
    summary.set_header(vec!["Metric", "Value"]);
    summary.add_row(vec!["Following".to_string(), stats.total_following.to_string()]);
    summary.add_row(vec!["Followers".to_string(), stats.total_followers.to_string()]);
    summary.add_row(vec!["Unfollowers".to_string(), stats.unfollowers.to_string()]);
    summary.add_row(vec!["Unfollower %".to_string(), stats.percentage_label()]);
    summary.add_row(vec!["Mutual".to_string(), stats.mutual.to_string()]);
    summary.add_row(vec![
        "Not followed back".to_string(),
        stats.not_followed_back.to_string(),
    ]);

    let mut list = Table::new();
    list.load_preset(UTF8_FULL);
    list.set_header(vec!["#", report.kind.label()]);
    for (i, name) in report.displayed.iter().enumerate() {
        list.add_row(vec![(i + 1).to_string(), format!("@{name}")]);
    }

    format!("{summary}\n{list}")
}

/// Formats the report as pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn format_report_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Text placed on the clipboard for a list: one username per line.
#[must_use]
pub fn clipboard_text(usernames: &[String]) -> String {
    usernames.join("\n")
}

/// Share summary: statistics plus the `@`-prefixed displayed list.
#[must_use]
pub fn share_summary(stats: &Statistics, unfollowers: &[String], title: &str) -> String {
    let handles: Vec<String> = unfollowers.iter().map(|u| format!("@{u}")).collect();

    format!(
        "{title}\n\n📊 Statistics:\n- Following: {}\n- Followers: {}\n- Unfollowers: {}\n- Mutual Follows: {}\n\n👥 Unfollowers ({}):\n{}",
        stats.total_following,
        stats.total_followers,
        stats.unfollowers,
        stats.mutual,
        unfollowers.len(),
        handles.join("\n")
    )
    .trim()
    .to_string()
}

/// Message for sharing a single account.
#[must_use]
pub fn share_username_message(username: &str, platform: &str) -> String {
    format!("Check out @{username} on {platform}!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ComparisonResult, ListKind};

    fn sample_report() -> Report {
        let statistics = Statistics {
            total_following: 3,
            total_followers: 3,
            unfollowers: 1,
            mutual: 2,
            not_followed_back: 1,
            unfollower_percentage: 100.0 / 3.0,
        };
        Report {
            following: vec!["a".into(), "b".into(), "c".into()],
            followers: vec!["b".into(), "c".into(), "d".into()],
            comparison: ComparisonResult {
                intersection: vec!["b".into(), "c".into()],
                union: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                a_only: vec!["a".into()],
                b_only: vec!["d".into()],
            },
            statistics,
            kind: ListKind::Unfollowers,
            displayed: vec!["a".into()],
        }
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("table".parse::<OutputFormat>(), Ok(OutputFormat::Table));
        assert_eq!("plain".parse::<OutputFormat>(), Ok(OutputFormat::Plain));
        assert!("invalid".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_clipboard_text() {
        let names = vec!["a".to_string(), "b".to_string()];
        assert_eq!(clipboard_text(&names), "a\nb");
        assert_eq!(clipboard_text(&[]), "");
    }

    #[test]
    fn test_share_summary() {
        let report = sample_report();
        let text = share_summary(&report.statistics, &report.displayed, "My Analysis");

        assert!(text.starts_with("My Analysis\n\n📊 Statistics:"));
        assert!(text.contains("- Following: 3\n- Followers: 3\n- Unfollowers: 1\n- Mutual Follows: 2"));
        assert!(text.ends_with("👥 Unfollowers (1):\n@a"));
    }

    #[test]
    fn test_share_summary_empty_list_is_trimmed() {
        let text = share_summary(&Statistics::default(), &[], "Title");
        assert!(text.ends_with("👥 Unfollowers (0):"));
    }

    #[test]
    fn test_share_username_message() {
        assert_eq!(
            share_username_message("alice", "Instagram"),
            "Check out @alice on Instagram!"
        );
    }

    #[test]
    fn test_plain_report_is_clipboard_text() {
        let report = sample_report();
        assert_eq!(format_report(&report, OutputFormat::Plain).unwrap(), "a");
    }

    #[test]
    fn test_json_report() {
        let json = format_report_json(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["comparison"]["b_only"][0], "d");
        assert_eq!(value["statistics"]["mutual"], 2);
        assert_eq!(value["kind"], "unfollowers");
    }

    #[test]
    fn test_text_and_table_contain_usernames() {
        colored::control::set_override(false);
        let report = sample_report();

        let text = format_report_text(&report);
        assert!(text.contains("Unfollowers (1)"));
        assert!(text.contains("1. @a"));
        assert!(text.contains("33.3%"));

        let table = format_report_table(&report);
        assert!(table.contains("@a"));
        assert!(table.contains("Mutual"));
    }
}
