//! Google Drive `files.list` client.
//!
//! A thin blocking wrapper over the Drive v3 `files.list` endpoint — the
//! only remote call this tool makes. Two query shapes exist: child folders
//! of a parent (album discovery) and image files inside a folder. Both
//! fetch a single page of up to 100 results; larger folders are truncated,
//! a known limitation carried over from the original gallery setup.
//!
//! Transient failures are handled by [`with_retries`], one reusable
//! fixed-delay retry loop shared by every caller.

use serde::Deserialize;
use std::thread;
use std::time::Duration;
use thiserror::Error;

use crate::output;

/// Attempts per remote call, including the first.
pub const RETRY_ATTEMPTS: u32 = 3;

/// Fixed pause between attempts.
pub const RETRY_DELAY: Duration = Duration::from_secs(2);

const FILES_ENDPOINT: &str = "https://www.googleapis.com/drive/v3/files";

/// Display width baked into every image URL. Thumbnails are served at the
/// same width as full images; the front-end has only ever consumed this
/// size, so no smaller variant is generated.
const IMAGE_WIDTH: u32 = 800;

#[derive(Error, Debug)]
pub enum DriveError {
    #[error("request failed: {0}")]
    Http(#[from] Box<ureq::Error>),
    #[error("malformed response: {0}")]
    Decode(#[from] std::io::Error),
}

/// A file or folder as returned by the Drive API.
#[derive(Debug, Clone, Deserialize)]
pub struct DriveFile {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct FileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

/// Authenticated handle to the Drive API.
pub struct DriveClient {
    agent: ureq::Agent,
    access_token: String,
}

impl DriveClient {
    pub fn new(access_token: String) -> DriveClient {
        DriveClient {
            agent: ureq::agent(),
            access_token,
        }
    }

    /// List immediate child folders of `parent_id`, sorted by name by the
    /// API. Trashed folders are excluded.
    pub fn list_folders(&self, parent_id: &str) -> Result<Vec<DriveFile>, DriveError> {
        let query = format!(
            "'{parent_id}' in parents and trashed=false and \
             mimeType='application/vnd.google-apps.folder'"
        );
        self.files_list(&query, "files(id, name)", Some("name"))
    }

    /// List non-trashed files with an `image/*` MIME type inside
    /// `folder_id`.
    pub fn list_images(&self, folder_id: &str) -> Result<Vec<DriveFile>, DriveError> {
        let query =
            format!("'{folder_id}' in parents and trashed=false and mimeType contains 'image/'");
        self.files_list(&query, "files(id, name, mimeType)", None)
    }

    /// One `files.list` call. First page only, 100 results.
    fn files_list(
        &self,
        query: &str,
        fields: &str,
        order_by: Option<&str>,
    ) -> Result<Vec<DriveFile>, DriveError> {
        let mut request = self
            .agent
            .get(FILES_ENDPOINT)
            .set("Authorization", &format!("Bearer {}", self.access_token))
            .query("q", query)
            .query("spaces", "drive")
            .query("fields", fields)
            .query("pageSize", "100");
        if let Some(order) = order_by {
            request = request.query("orderBy", order);
        }

        let list: FileList = request.call().map_err(Box::new)?.into_json()?;
        Ok(list.files)
    }
}

/// Build the public URL for an image file at the fixed display width.
///
/// The `lh3.googleusercontent.com` host embeds reliably and avoids the
/// rate limiting that `drive.google.com/thumbnail` is subject to.
pub fn image_url(file_id: &str) -> String {
    format!("https://lh3.googleusercontent.com/d/{file_id}=w{IMAGE_WIDTH}")
}

/// Run `op` up to `attempts` times, pausing `delay` between attempts.
///
/// Prints a diagnostic line per failed attempt. Returns the first success,
/// or the last error once the attempts are exhausted; deciding whether that
/// error aborts anything is the caller's business.
pub fn with_retries<T, E: std::fmt::Display>(
    attempts: u32,
    delay: Duration,
    mut op: impl FnMut() -> Result<T, E>,
) -> Result<T, E> {
    let mut attempt = 1;
    loop {
        match op() {
            Ok(value) => return Ok(value),
            Err(err) if attempt < attempts => {
                println!("{}", output::format_retry(attempt, attempts, &err));
                thread::sleep(delay);
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
