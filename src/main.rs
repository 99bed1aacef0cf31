use clap::Parser;
use drive_gal::{auth, config, fetch, output};
use std::fs;
use std::path::Path;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "drive-gal")]
#[command(about = "Sync a Google Drive folder tree into a gallery photo manifest")]
#[command(long_about = "\
Sync a Google Drive folder tree into a gallery photo manifest

Album sub-folders of the parent Drive folder become albums; the image files
inside each become photos. Numeric name prefixes control display order
(01-Weddings, 02 - Portraits, 10_Classical Dance), and a filename containing
\"cover\" marks the album cover. The manifest is written to
src/data/photos.json for the front-end build.

Configuration (environment, or a .env file in the working directory):

  GOOGLE_DRIVE_PARENT_FOLDER   parent folder id holding the album sub-folders
  GOOGLE_SERVICE_ACCOUNT_KEY   service account JSON key, for CI

Local development uses OAuth instead: place client_secrets.json (or
credentials.json) from your Google Cloud desktop client in the project
root. The first run opens a consent URL and caches the token in token.json;
later runs reuse and refresh it silently.")]
#[command(version = version_string())]
struct Cli {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let _cli = Cli::parse();

    let run_config = match config::RunConfig::from_env() {
        Ok(run_config) => run_config,
        Err(_) => {
            output::print_config_help();
            std::process::exit(1);
        }
    };
    println!("Parent folder: {}", run_config.parent_folder_id);

    println!("==> Authenticating with Google Drive");
    let authenticated = match auth::authenticate() {
        Ok(authenticated) => authenticated,
        Err(auth::AuthError::NoCredentials) => {
            output::print_credentials_help();
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };
    println!("Auth: {}", authenticated.method.describe());

    println!("==> Fetching albums");
    let manifest = fetch::fetch_all(&authenticated.client, &run_config.parent_folder_id);

    let output_path = Path::new(config::OUTPUT_PATH);
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, serde_json::to_string_pretty(&manifest)?)?;

    println!("==> Done");
    output::print_summary(&manifest, output_path);
    Ok(())
}
