use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use dialoguer::Input;
use std::fs;
use std::path::{Path, PathBuf};
use tabsort_core::export::load_entries;
use tabsort_core::group::{group_entries, total_entries};
use tabsort_core::report::{ReportFormat, render};
use thiserror::Error;
use tracing::{info, warn};

/// Name offered by the save prompt.
pub const DEFAULT_SAVE_NAME: &str = "grouped_urls.txt";
const DEFAULT_EXTENSION: &str = "txt";

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Could not copy to clipboard: {0}")]
    ClipboardUnavailable(String),

    #[error("Save prompt failed: {0}")]
    PromptFailed(String),

    #[error("Failed to save report to '{}': {source}", .path.display())]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// Sinks

pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<(), PublishError>;
}

/// Where to save the report. `Ok(None)` means the user cancelled.
pub trait SavePrompt {
    fn choose_path(&self) -> Result<Option<PathBuf>, PublishError>;
}

pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), PublishError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| PublishError::ClipboardUnavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| PublishError::ClipboardUnavailable(e.to_string()))
    }
}

/// Asks for a destination on the terminal, pre-filled with [`DEFAULT_SAVE_NAME`].
/// Clearing the answer cancels the save.
pub struct TerminalPrompt;

impl SavePrompt for TerminalPrompt {
    fn choose_path(&self) -> Result<Option<PathBuf>, PublishError> {
        let answer: String = Input::new()
            .with_prompt("Save the grouped URLs as (empty to cancel)")
            .with_initial_text(DEFAULT_SAVE_NAME)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| PublishError::PromptFailed(e.to_string()))?;
        Ok(resolve_save_path(&answer))
    }
}

/// A destination given up front with `--output`.
pub struct FixedPath(pub PathBuf);

impl SavePrompt for FixedPath {
    fn choose_path(&self) -> Result<Option<PathBuf>, PublishError> {
        Ok(Some(self.0.clone()))
    }
}

/// Turn a prompt answer into a save path: `~` is expanded and a bare name
/// gets a `.txt` extension. Blank answers yield `None`.
pub fn resolve_save_path(answer: &str) -> Option<PathBuf> {
    let answer = answer.trim();
    if answer.is_empty() {
        return None;
    }

    let mut path = PathBuf::from(shellexpand::tilde(answer).into_owned());
    if path.extension().is_none() {
        path.set_extension(DEFAULT_EXTENSION);
    }
    Some(path)
}

/// Write the report as UTF-8 in one shot.
pub fn write_report(path: &Path, text: &str) -> Result<(), PublishError> {
    fs::write(path, text.as_bytes()).map_err(|source| PublishError::SaveFailed {
        path: path.to_path_buf(),
        source,
    })
}

// Publishing

#[derive(Debug, PartialEq, Eq)]
pub enum ClipboardOutcome {
    Copied,
    Unavailable(String),
    Skipped,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    Cancelled,
    /// The prompt could not be shown (e.g. stdin is not a terminal).
    PromptUnavailable(String),
    Skipped,
}

#[derive(Debug, PartialEq, Eq)]
pub struct PublishOutcome {
    pub clipboard: ClipboardOutcome,
    pub save: SaveOutcome,
}

/// Hand the report to the clipboard and file sinks. Passing `None` skips a
/// sink. Only a failed file write is an error.
pub fn publish(
    text: &str,
    clipboard: Option<&mut dyn ClipboardSink>,
    prompt: Option<&dyn SavePrompt>,
) -> Result<PublishOutcome, PublishError> {
    let clipboard = match clipboard {
        None => ClipboardOutcome::Skipped,
        Some(sink) => match sink.copy(text) {
            Ok(()) => ClipboardOutcome::Copied,
            Err(e) => {
                warn!(error = %e, "clipboard unavailable");
                ClipboardOutcome::Unavailable(e.to_string())
            }
        },
    };

    let save = match prompt {
        None => SaveOutcome::Skipped,
        Some(prompt) => match prompt.choose_path() {
            Ok(Some(path)) => {
                write_report(&path, text)?;
                info!(path = %path.display(), bytes = text.len(), "saved report");
                SaveOutcome::Saved(path)
            }
            Ok(None) => SaveOutcome::Cancelled,
            Err(e) => {
                warn!(error = %e, "save prompt unavailable");
                SaveOutcome::PromptUnavailable(e.to_string())
            }
        },
    };

    Ok(PublishOutcome { clipboard, save })
}

// Command handler

#[derive(Debug, Clone)]
pub struct GroupArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub format: ReportFormat,
    pub clipboard: bool,
    pub save: bool,
    pub quiet: bool,
}

impl GroupArgs {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let expand = |p: &PathBuf| PathBuf::from(shellexpand::tilde(&p.to_string_lossy()).into_owned());

        let format = matches
            .get_one::<String>("format")
            .and_then(|f| ReportFormat::from_str(f))
            .unwrap_or(ReportFormat::Text);

        GroupArgs {
            input: matches
                .get_one::<PathBuf>("FILE")
                .map(expand)
                .unwrap_or_default(),
            output: matches.get_one::<PathBuf>("output").map(expand),
            format,
            clipboard: !matches.get_flag("no-clipboard"),
            save: !matches.get_flag("no-save"),
            quiet: matches.get_flag("quiet"),
        }
    }
}

macro_rules! say {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            println!($($arg)*);
        }
    };
}

/// Run the load, group, render and publish pipeline for one export.
///
/// Returns `Ok(None)` when the export has no entries; nothing is published
/// in that case.
pub fn run_group(
    args: &GroupArgs,
    clipboard: &mut dyn ClipboardSink,
    prompt: &dyn SavePrompt,
) -> Result<Option<PublishOutcome>> {
    let quiet = args.quiet;
    say!(quiet, "{} Processing '{}'...", "→".blue(), args.input.display());

    let export = load_entries(&args.input)?;
    say!(
        quiet,
        "{} File successfully read using '{}' encoding.",
        "✓".green().bold(),
        export.encoding
    );

    let groups = group_entries(&export.lines);
    if groups.is_empty() {
        say!(quiet, "{} No URLs found or processed. Exiting.", "ℹ".blue());
        return Ok(None);
    }
    say!(
        quiet,
        "{} Grouped {} links into {} domains.",
        "✓".green().bold(),
        total_entries(&groups).to_string().cyan(),
        groups.len().to_string().cyan()
    );

    let report = render(&groups, args.format).context("rendering report")?;

    let outcome = publish(
        &report,
        args.clipboard.then_some(clipboard),
        args.save.then_some(prompt),
    )?;

    match &outcome.clipboard {
        ClipboardOutcome::Copied => say!(
            quiet,
            "{} Organized URLs have been copied to your clipboard.",
            "✓".green().bold()
        ),
        ClipboardOutcome::Unavailable(reason) => {
            eprintln!("{} {}", "⚠ Warning:".yellow().bold(), reason);
            eprintln!("  (On Linux, a clipboard provider such as xclip may be required)");
        }
        ClipboardOutcome::Skipped => {}
    }

    match &outcome.save {
        SaveOutcome::Saved(path) => say!(
            quiet,
            "{} File successfully saved to: {}",
            "✓".green().bold(),
            path.display().to_string().bright_white()
        ),
        SaveOutcome::Cancelled => say!(
            quiet,
            "{} Save operation was cancelled by the user.",
            "ℹ".blue()
        ),
        SaveOutcome::PromptUnavailable(reason) => {
            eprintln!("{} {}", "⚠ Warning:".yellow().bold(), reason);
            eprintln!("  (Use --output <PATH> to save without a prompt)");
        }
        SaveOutcome::Skipped => {}
    }

    Ok(Some(outcome))
}

pub fn handle_group(matches: &ArgMatches) -> Result<()> {
    let args = GroupArgs::from_matches(matches);
    let mut clipboard = SystemClipboard;

    match &args.output {
        Some(path) => run_group(&args, &mut clipboard, &FixedPath(path.clone()))?,
        None => run_group(&args, &mut clipboard, &TerminalPrompt)?,
    };
    Ok(())
}
