//! The fetch pipeline: album discovery, image listing, manifest assembly.
//!
//! Three steps, run strictly in sequence:
//!
//! 1. Discover album sub-folders of the parent folder and order them by
//!    their numeric name prefix.
//! 2. For each album in order, list its image files and sort them
//!    cover-first, then by prefix, then by id.
//! 3. Assemble the [`Manifest`]: tag each photo with its owning album,
//!    flatten the photo lists, pick covers, count totals.
//!
//! The transforms are pure functions over [`DriveFile`] lists so the
//! ordering rules are testable without a network. The thin network
//! wrappers retry transient failures and then degrade to an empty list for
//! that stage — one unreachable folder should not sink the whole run.
//!
//! Ordering is computed as `(key, record)` pairs that are sorted and then
//! projected back to records; sort keys never appear on the output types.

use crate::drive::{self, DriveClient, DriveFile};
use crate::naming;
use crate::output;
use crate::types::{Album, Manifest, Photo};

/// An album discovered from a folder, before its photos are fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumEntry {
    /// Slug derived from the folder name; becomes the album id.
    pub id: String,
    /// Folder name with the order prefix stripped.
    pub title: String,
    /// Drive folder id.
    pub folder_id: String,
}

/// Sort key shared by albums and photos: numbered entries ascending,
/// unnumbered entries after all of them. Stable sorts keep the API's
/// name order within ties.
fn order_key(order: Option<u64>) -> (bool, u64) {
    (order.is_none(), order.unwrap_or(0))
}

/// Convert discovered folders into ordered album entries.
pub fn albums_from_folders(folders: Vec<DriveFile>) -> Vec<AlbumEntry> {
    let mut keyed: Vec<((bool, u64), AlbumEntry)> = folders
        .into_iter()
        .map(|folder| {
            let naming::ParsedName { order, title } = naming::parse_entry_name(&folder.name);
            let entry = AlbumEntry {
                id: naming::slugify(&folder.name),
                title,
                folder_id: folder.id,
            };
            (order_key(order), entry)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, entry)| entry).collect()
}

/// Convert an album's files into ordered photos.
///
/// Covers sort first, then the numeric prefix, then the file id as the
/// final tie-break. `album_id` stays blank until [`assemble_album`] tags
/// the photos with their owner.
pub fn photos_from_files(files: Vec<DriveFile>) -> Vec<Photo> {
    let mut keyed: Vec<((bool, (bool, u64), String), Photo)> = files
        .into_iter()
        .map(|file| {
            let is_cover = file.name.to_lowercase().contains("cover");
            let order = naming::parse_entry_name(&file.name).order;
            let photo = Photo {
                src: drive::image_url(&file.id),
                thumb_src: drive::image_url(&file.id),
                is_cover,
                album_id: String::new(),
                id: file.id,
            };
            ((!is_cover, order_key(order), photo.id.clone()), photo)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, photo)| photo).collect()
}

/// Tag photos with their owning album and derive the album record.
///
/// The photo list is already cover-first, so the cover photo is simply the
/// first entry; an empty album has none.
pub fn assemble_album(entry: AlbumEntry, mut photos: Vec<Photo>) -> (Album, Vec<Photo>) {
    for photo in &mut photos {
        photo.album_id = entry.id.clone();
    }
    let cover_photo = photos.first().map(|photo| photo.thumb_src.clone());
    let album = Album {
        id: entry.id,
        title: entry.title,
        folder_id: entry.folder_id,
        cover_photo,
        photo_count: photos.len(),
    };
    (album, photos)
}

/// Assemble the final manifest record.
pub fn build_manifest(albums: Vec<Album>, photos: Vec<Photo>, last_updated: String) -> Manifest {
    let total_photos = photos.len();
    Manifest {
        albums,
        photos,
        last_updated,
        total_photos,
    }
}

/// Discover the parent folder's album sub-folders.
///
/// Retries transient failures; once the attempts are exhausted the error
/// is logged and an empty list returned.
pub fn list_albums(client: &DriveClient, parent_id: &str) -> Vec<AlbumEntry> {
    let result = drive::with_retries(drive::RETRY_ATTEMPTS, drive::RETRY_DELAY, || {
        client.list_folders(parent_id)
    });
    match result {
        Ok(folders) => albums_from_folders(folders),
        Err(err) => {
            println!(
                "{}",
                output::format_retries_exhausted("album folders", drive::RETRY_ATTEMPTS, &err)
            );
            Vec::new()
        }
    }
}

/// Fetch one album's photos, with the same retry-then-degrade policy as
/// [`list_albums`].
pub fn list_photos(client: &DriveClient, folder_id: &str) -> Vec<Photo> {
    let result = drive::with_retries(drive::RETRY_ATTEMPTS, drive::RETRY_DELAY, || {
        client.list_images(folder_id)
    });
    match result {
        Ok(files) => photos_from_files(files),
        Err(err) => {
            println!(
                "{}",
                output::format_retries_exhausted("folder", drive::RETRY_ATTEMPTS, &err)
            );
            Vec::new()
        }
    }
}

/// Run the full pipeline against the parent folder.
///
/// Albums are processed one at a time, in display order. Zero discovered
/// albums is not an error: the result is an empty-but-valid manifest with
/// a fresh timestamp.
pub fn fetch_all(client: &DriveClient, parent_id: &str) -> Manifest {
    println!("Discovering albums from parent folder...");
    let entries = list_albums(client, parent_id);

    if entries.is_empty() {
        println!("No album folders found!");
        return build_manifest(Vec::new(), Vec::new(), timestamp());
    }

    output::print_discovered_albums(&entries);

    let mut albums = Vec::with_capacity(entries.len());
    let mut all_photos = Vec::new();
    for entry in entries {
        println!("Fetching: {}...", entry.title);
        let photos = list_photos(client, &entry.folder_id);
        println!("  Found {} photos", photos.len());

        let (album, photos) = assemble_album(entry, photos);
        albums.push(album);
        all_photos.extend(photos);
    }

    build_manifest(albums, all_photos, timestamp())
}

/// Naive local generation timestamp with microsecond precision.
fn timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(id: &str, name: &str) -> DriveFile {
        DriveFile {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    // =========================================================================
    // Album ordering
    // =========================================================================

    #[test]
    fn albums_sort_numbered_before_unnumbered() {
        let albums = albums_from_folders(vec![
            file("f2", "02-B"),
            file("f1", "01-A"),
            file("f3", "C"),
        ]);
        let titles: Vec<&str> = albums.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }

    #[test]
    fn album_entry_carries_slug_title_and_folder_id() {
        let albums = albums_from_folders(vec![file("folder9", "10_Classical Dance")]);
        assert_eq!(
            albums,
            vec![AlbumEntry {
                id: "classical-dance".to_string(),
                title: "Classical Dance".to_string(),
                folder_id: "folder9".to_string(),
            }]
        );
    }

    #[test]
    fn unnumbered_albums_keep_api_name_order() {
        let albums = albums_from_folders(vec![
            file("f1", "Candids"),
            file("f2", "Extras"),
            file("f3", "01-First"),
        ]);
        let titles: Vec<&str> = albums.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["First", "Candids", "Extras"]);
    }

    // =========================================================================
    // Photo ordering
    // =========================================================================

    #[test]
    fn cover_sorts_first_then_numeric_then_id() {
        let photos = photos_from_files(vec![
            file("p2", "02.jpg"),
            file("p9", "cover.jpg"),
            file("p1", "01.jpg"),
        ]);
        let ids: Vec<&str> = photos.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p9", "p1", "p2"]);
        assert!(photos[0].is_cover);
    }

    #[test]
    fn cover_match_is_case_insensitive_substring() {
        let photos = photos_from_files(vec![
            file("a", "99-last.jpg"),
            file("b", "Album-COVER-final.jpg"),
        ]);
        assert_eq!(photos[0].id, "b");
        assert!(photos[0].is_cover);
        assert!(!photos[1].is_cover);
    }

    #[test]
    fn unnumbered_photos_sort_after_numbered_by_id() {
        let photos = photos_from_files(vec![
            file("z", "zebra.jpg"),
            file("a", "apple.jpg"),
            file("m", "05-mid.jpg"),
        ]);
        let ids: Vec<&str> = photos.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["m", "a", "z"]);
    }

    #[test]
    fn photo_urls_share_the_fixed_width() {
        let photos = photos_from_files(vec![file("abc123", "01-dawn.jpg")]);
        assert_eq!(photos[0].src, "https://lh3.googleusercontent.com/d/abc123=w800");
        assert_eq!(photos[0].src, photos[0].thumb_src);
    }

    // =========================================================================
    // Assembly
    // =========================================================================

    fn entry(id: &str, title: &str, folder_id: &str) -> AlbumEntry {
        AlbumEntry {
            id: id.to_string(),
            title: title.to_string(),
            folder_id: folder_id.to_string(),
        }
    }

    #[test]
    fn assemble_tags_photos_and_picks_cover() {
        let photos = photos_from_files(vec![
            file("p1", "01.jpg"),
            file("p2", "cover.jpg"),
        ]);
        let (album, photos) = assemble_album(entry("weddings", "Weddings", "f1"), photos);

        assert_eq!(album.photo_count, 2);
        assert_eq!(album.cover_photo.as_deref(), Some(photos[0].thumb_src.as_str()));
        assert!(photos[0].is_cover);
        assert!(photos.iter().all(|p| p.album_id == "weddings"));
    }

    #[test]
    fn empty_album_has_no_cover() {
        let (album, photos) = assemble_album(entry("empty", "Empty", "f0"), Vec::new());
        assert_eq!(album.cover_photo, None);
        assert_eq!(album.photo_count, 0);
        assert!(photos.is_empty());
    }

    #[test]
    fn manifest_totals_match_flat_photo_list() {
        let (album_a, mut photos_a) = assemble_album(
            entry("a", "A", "f1"),
            photos_from_files(vec![file("p1", "01.jpg"), file("p2", "02.jpg")]),
        );
        let (album_b, photos_b) = assemble_album(
            entry("b", "B", "f2"),
            photos_from_files(vec![file("p3", "cover.jpg")]),
        );
        photos_a.extend(photos_b);

        let manifest = build_manifest(
            vec![album_a, album_b],
            photos_a,
            "2026-08-05T10:00:00.000000".to_string(),
        );
        assert_eq!(manifest.total_photos, 3);
        assert_eq!(manifest.total_photos, manifest.photos.len());
        for photo in &manifest.photos {
            assert!(manifest.albums.iter().any(|a| a.id == photo.album_id));
        }
    }

    #[test]
    fn empty_manifest_is_valid() {
        let manifest = build_manifest(
            Vec::new(),
            Vec::new(),
            "2026-08-05T10:00:00.000000".to_string(),
        );
        assert!(manifest.albums.is_empty());
        assert!(manifest.photos.is_empty());
        assert_eq!(manifest.total_photos, 0);
        assert!(!manifest.last_updated.is_empty());
    }
}
