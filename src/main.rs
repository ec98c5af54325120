//! Follow Diff - find accounts that don't follow you back.
//!
//! Reads a following export and a followers export (JSON, as downloaded
//! from the platform) and reports unfollowers, mutuals and statistics.
//!
//! Usage:
//!   follow-diff compare following.json followers.json
//!   follow-diff compare following.json followers.json --list fans -f table
//!   follow-diff share following.json followers.json
//!   follow-diff export following.json followers.json -o unfollowers.txt
//!   follow-diff extract followers.json --role followers

use std::path::Path;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use follow_diff::application::{
    analyze_documents, clipboard_text, extract_usernames, format_report, share_summary,
    share_username_message, AnalyzeOptions, OutputFormat,
};
use follow_diff::cli::{Cli, Commands};
use follow_diff::domain::{self, AppConfig, ListKind, Report, Role};
use follow_diff::infrastructure::{
    config_file_path, default_export_filename, ensure_config_exists, export_list, load_config,
    load_document, render_config,
};

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(cli: Cli) -> domain::Result<()> {
    let config = load_config()?;
    let format = cli
        .output_format(&config.output.format)
        .map_err(|e| domain::AppError::Config { message: e })?;

    match cli.command {
        Commands::Compare {
            following,
            followers,
            list,
            search,
        } => {
            cmd_compare(&following, &followers, list, search, format)?;
        }
        Commands::Extract { file, role } => {
            cmd_extract(&file, role, format)?;
        }
        Commands::Share {
            following,
            followers,
            search,
            user,
        } => {
            cmd_share(&following, &followers, search, user.as_deref(), &config)?;
        }
        Commands::Export {
            following,
            followers,
            output,
            list,
            search,
        } => {
            let output = output.unwrap_or_else(|| config.exports_dir().join(default_export_filename(list)));
            cmd_export(&following, &followers, &output, list, search)?;
        }
        Commands::Config { init } => {
            cmd_config(init, &config)?;
        }
    }

    Ok(())
}

/// Loads both exports and builds the report.
fn analyze(
    following: &Path,
    followers: &Path,
    kind: ListKind,
    search: Option<String>,
) -> domain::Result<Report> {
    let following = load_document(following)?;
    let followers = load_document(followers)?;

    analyze_documents(&following, &followers, &AnalyzeOptions { kind, search })
}

/// Compare command.
fn cmd_compare(
    following: &Path,
    followers: &Path,
    kind: ListKind,
    search: Option<String>,
    format: OutputFormat,
) -> domain::Result<()> {
    let report = analyze(following, followers, kind, search)?;
    let output = format_report(&report, format).map_err(domain::AppError::json_parse)?;

    println!("{output}");
    Ok(())
}

/// Print the usernames extracted from one export.
fn cmd_extract(file: &Path, role: Role, format: OutputFormat) -> domain::Result<()> {
    let document = load_document(file)?;
    let usernames = extract_usernames(&document, role);

    if usernames.is_empty() {
        return Err(domain::AppError::NoUsernames);
    }

    let output = match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&usernames).map_err(domain::AppError::json_parse)?
        }
        OutputFormat::Plain => clipboard_text(&usernames),
        OutputFormat::Text | OutputFormat::Table => {
            let mut out = clipboard_text(&usernames);
            out.push_str(&format!(
                "\n\n{} {} {}",
                "✓".green().bold(),
                usernames.len(),
                role
            ));
            out
        }
    };

    println!("{output}");
    Ok(())
}

/// Share summary command, or a single-account share message.
fn cmd_share(
    following: &Path,
    followers: &Path,
    search: Option<String>,
    user: Option<&str>,
    config: &AppConfig,
) -> domain::Result<()> {
    let report = analyze(following, followers, ListKind::Unfollowers, search)?;

    if let Some(user) = user {
        let user = user.trim_start_matches('@');
        if !report.comparison.union.iter().any(|name| name == user) {
            return Err(domain::AppError::InvalidData {
                message: format!("@{user} is not in either export"),
            });
        }
        println!("{}", share_username_message(user, &config.output.platform));
        return Ok(());
    }

    println!(
        "{}",
        share_summary(&report.statistics, &report.displayed, &config.output.share_title)
    );
    Ok(())
}

/// Export a list to a text file.
fn cmd_export(
    following: &Path,
    followers: &Path,
    output: &Path,
    kind: ListKind,
    search: Option<String>,
) -> domain::Result<()> {
    let report = analyze(following, followers, kind, search)?;
    export_list(&report.displayed, output)?;

    println!(
        "{} Exported {} {} to {}",
        "✓".green().bold(),
        report.displayed.len(),
        kind.label().to_lowercase(),
        output.display()
    );
    Ok(())
}

/// Show or initialise configuration.
fn cmd_config(init: bool, config: &AppConfig) -> domain::Result<()> {
    if init {
        let (path, created) = ensure_config_exists()?;
        if created {
            println!("{} Created {}", "✓".green().bold(), path.display());
        } else {
            println!("Config already exists at {}", path.display());
        }
        return Ok(());
    }

    println!("{}", "⚙️  Configuration".bold());
    println!("  File: {}", config_file_path().display());
    println!("  Exports: {}", config.exports_dir().display());
    println!();
    println!("{}", render_config(config)?);

    Ok(())
}

/// Setup tracing/logging based on verbosity level.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).without_time())
        .with(filter)
        .init();
}
