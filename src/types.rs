//! Manifest records consumed by the front-end build.
//!
//! These are the wire types serialized into `src/data/photos.json`. The
//! field names are a contract with the site's gallery components and use
//! camelCase on the wire; renaming anything here breaks the consumer.

use serde::{Deserialize, Serialize};

/// One gallery section, corresponding to one Drive sub-folder.
///
/// Immutable once constructed; a run never mutates albums after assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    /// URL-friendly slug derived from the folder name.
    pub id: String,
    /// Folder name with the numeric order prefix stripped.
    pub title: String,
    /// Drive folder id. An external reference; the folder is not ours.
    pub folder_id: String,
    /// Thumbnail URL of the cover photo. `null` for an empty album.
    pub cover_photo: Option<String>,
    pub photo_count: usize,
}

/// One image file inside an album folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Drive file id.
    pub id: String,
    pub src: String,
    pub thumb_src: String,
    /// True when the filename contains "cover", case-insensitive.
    pub is_cover: bool,
    /// Id of the owning album, assigned during manifest assembly.
    pub album_id: String,
}

/// The aggregate record describing all albums and photos for one run.
///
/// The sole persisted artifact. Fully replaced on each run, never merged
/// with a previous manifest.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub albums: Vec<Album>,
    /// All photos across all albums, flattened in album order.
    pub photos: Vec<Photo>,
    /// Generation time: naive local ISO-8601 with microseconds.
    pub last_updated: String,
    /// Always equals `photos.len()`.
    pub total_photos: usize,
}
