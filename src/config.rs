//! Run configuration: environment resolution and fixed paths.
//!
//! The tool takes no CLI arguments; everything is controlled by the
//! environment and by well-known files in the working directory. A `.env`
//! file is loaded into the process environment at startup, so both real
//! environment variables and `.env` entries land in [`RunConfig::from_env`].
//!
//! ```text
//! GOOGLE_DRIVE_PARENT_FOLDER   parent folder id holding album sub-folders
//! GOOGLE_SERVICE_ACCOUNT_KEY   inline service-account key JSON (CI)
//! credentials.json             OAuth client secrets (local development)
//! client_secrets.json          fallback location for the same
//! service-account.json         service-account key file
//! token.json                   cached OAuth token from a previous run
//! src/data/photos.json         manifest destination
//! ```

use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the parent Drive folder.
pub const PARENT_FOLDER_ENV: &str = "GOOGLE_DRIVE_PARENT_FOLDER";

/// Environment variable carrying an inline service-account key JSON blob.
pub const SERVICE_ACCOUNT_ENV: &str = "GOOGLE_SERVICE_ACCOUNT_KEY";

/// Drive access requested by every auth variant. Read-only: this tool never
/// mutates the Drive tree. Changing the scope invalidates cached tokens.
pub const DRIVE_SCOPE: &str = "https://www.googleapis.com/auth/drive.readonly";

/// Manifest destination, relative to the project root.
pub const OUTPUT_PATH: &str = "src/data/photos.json";

/// Cached OAuth token from a previous interactive run.
pub const TOKEN_PATH: &str = "token.json";

/// OAuth client-secret files, searched in order.
pub const CLIENT_SECRET_PATHS: &[&str] = &["credentials.json", "client_secrets.json"];

/// Service-account key files, searched in order.
pub const SERVICE_ACCOUNT_PATHS: &[&str] = &["service-account.json"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{PARENT_FOLDER_ENV} is not set")]
    MissingParentFolder,
}

/// Everything the pipeline needs that can vary between runs.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Id of the Drive folder whose sub-folders are the albums.
    pub parent_folder_id: String,
}

impl RunConfig {
    /// Resolve the run configuration from the process environment.
    ///
    /// A missing or blank parent folder id is a configuration-absence
    /// error; the caller reports it with guidance and aborts before
    /// anything is written.
    pub fn from_env() -> Result<RunConfig, ConfigError> {
        let parent_folder_id = non_blank(env::var(PARENT_FOLDER_ENV).ok())
            .ok_or(ConfigError::MissingParentFolder)?;
        Ok(RunConfig { parent_folder_id })
    }
}

/// Trim a raw environment value, treating whitespace-only as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// First existing path from a candidate list.
pub fn find_first_existing<P: AsRef<Path>>(candidates: &[P]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|p| p.as_ref())
        .find(|p| p.exists())
        .map(Path::to_path_buf)
}
