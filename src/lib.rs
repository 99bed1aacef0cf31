//! # Drive Gal
//!
//! Syncs a static website's photo gallery with a Google Drive folder tree.
//! Album sub-folders of one parent folder become albums, the image files
//! inside each become photos, and the result is a single JSON manifest the
//! front-end build consumes.
//!
//! # Architecture: One Sequential Pipeline
//!
//! ```text
//! 1. Resolve    env / .env / key files  →  config + authenticated client
//! 2. Discover   parent folder          →  ordered album list
//! 3. List       each album folder      →  ordered photo list (cover first)
//! 4. Emit       albums + photos        →  src/data/photos.json
//! ```
//!
//! Everything is synchronous and single-threaded: albums are fetched one
//! at a time in display order, and the manifest is written once at the
//! end, so a failed run leaves the previous manifest untouched. Remote
//! calls retry a fixed number of times and then degrade to an empty list
//! for that stage instead of aborting the run.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | `NN<sep>Name` prefix parser and slug generation, shared by albums and photos |
//! | [`config`] | Environment resolution and the fixed file paths |
//! | [`auth`] | Credential resolver: service account (env or file), cached OAuth, interactive OAuth |
//! | [`drive`] | Drive v3 `files.list` client, retry helper, image URL builder |
//! | [`fetch`] | The pipeline: album discovery, photo listing, manifest assembly |
//! | [`types`] | `Album` / `Photo` / `Manifest` wire records |
//! | [`output`] | Progress and guidance formatting — pure `format_*`, thin `print_*` |
//!
//! # Ordering Convention
//!
//! Folder and file names carry an optional numeric prefix (`01-Weddings`,
//! `02 - Portraits`, `10_Classical Dance`) that controls display order and
//! is stripped from titles. Unnumbered entries sort after numbered ones.
//! Within an album, a filename containing "cover" (any case) pulls that
//! photo to the front and marks it as the album cover.

pub mod auth;
pub mod config;
pub mod drive;
pub mod fetch;
pub mod naming;
pub mod output;
pub mod types;
