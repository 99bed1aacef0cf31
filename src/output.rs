//! CLI output formatting.
//!
//! Each kind of output has a `format_*` function (pure, returns the lines)
//! and, where the call site needs it, a `print_*` wrapper that writes to
//! stdout. Format functions carry no I/O so tests can assert on exact
//! operator-facing text — in particular the guidance blocks, which are the
//! only thing standing between an operator and a cryptic auth failure.

use std::path::Path;

use crate::config;
use crate::fetch::AlbumEntry;
use crate::types::Manifest;

/// One retry diagnostic, printed between attempts.
///
/// `attempt` is the 1-based number of the attempt that just failed.
pub fn format_retry(attempt: u32, attempts: u32, err: &impl std::fmt::Display) -> String {
    format!("  Retry {attempt}/{attempts} after error: {err}")
}

/// Printed when a remote call has failed every attempt and the stage
/// degrades to an empty result.
pub fn format_retries_exhausted(
    what: &str,
    attempts: u32,
    err: &impl std::fmt::Display,
) -> String {
    format!("  Error fetching {what} after {attempts} attempts: {err}")
}

/// The discovered-albums listing shown before any photos are fetched.
pub fn format_discovered_albums(entries: &[AlbumEntry]) -> Vec<String> {
    let mut lines = vec![format!("Found {} albums:", entries.len())];
    for entry in entries {
        lines.push(format!("  - {}", entry.title));
    }
    lines
}

pub fn print_discovered_albums(entries: &[AlbumEntry]) {
    for line in format_discovered_albums(entries) {
        println!("{line}");
    }
    println!();
}

/// Final run summary.
pub fn format_summary(manifest: &Manifest, output_path: &Path) -> Vec<String> {
    vec![
        format!(
            "Fetched {} photos from {} albums",
            manifest.total_photos,
            manifest.albums.len()
        ),
        format!("Output: {}", output_path.display()),
    ]
}

pub fn print_summary(manifest: &Manifest, output_path: &Path) {
    for line in format_summary(manifest, output_path) {
        println!("{line}");
    }
}

/// Guidance for a missing parent folder id. The run aborts after printing
/// this, before anything is written.
pub fn format_config_help() -> Vec<String> {
    vec![
        format!("ERROR: {} is not set", config::PARENT_FOLDER_ENV),
        String::new(),
        "Set it to the id of the Drive folder whose sub-folders are your albums,".to_string(),
        "either in the environment or in a .env file in the working directory:".to_string(),
        String::new(),
        format!("  {}=<folder id>", config::PARENT_FOLDER_ENV),
    ]
}

pub fn print_config_help() {
    for line in format_config_help() {
        println!("{line}");
    }
}

/// Guidance for missing credentials, covering both the local and the CI
/// setup. Printed when no auth strategy's precondition holds.
pub fn format_credentials_help() -> Vec<String> {
    vec![
        "ERROR: No credentials found".to_string(),
        String::new(),
        "For local development:".to_string(),
        format!(
            "  - place {} (or {}) in the project root",
            config::CLIENT_SECRET_PATHS[0],
            config::CLIENT_SECRET_PATHS[1]
        ),
        "    (download it from Google Cloud Console -> your OAuth desktop client)".to_string(),
        String::new(),
        "For CI:".to_string(),
        format!(
            "  - set {} to the service account's JSON key",
            config::SERVICE_ACCOUNT_ENV
        ),
        format!(
            "  - or place the key file at {}",
            config::SERVICE_ACCOUNT_PATHS[0]
        ),
    ]
}

pub fn print_credentials_help() {
    for line in format_credentials_help() {
        println!("{line}");
    }
}
