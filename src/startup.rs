//! # The Main Entry Point of a Run
//!
//! Loads the configuration, authenticates against the catalog and then either
//! generates the chronological listing of one artist or explores the related-artist
//! graph around it.
//!
//! # Steps (listing):
//! 1. Collects every live album of the artist (whole catalog, before any output)
//! 2. Groups them by year and renders the HTML page
//! 3. Writes the page and opens it in the default browser

use crate::api_client::{ApiError, CatalogApi, SpotifyClient};
use crate::configuration::{self, ConfigFolder, Settings};
use crate::foundation::utils::normalize_artist_id;
use crate::process::{collect_live_albums, ArtistGraphExplorer, ArtistScore, ExplorationReport};
use crate::render::{render_html, Chronology};
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{fs, io};

#[derive(Debug, Default, Clone)]
pub struct RunOptions {
    /// Artist ID, URI or link; the configured default when absent.
    pub artist: Option<String>,
    pub include_no_date: bool,
    pub explore: bool,
    pub hops: Option<u32>,
}

pub async fn run(cfg_folder: ConfigFolder, options: RunOptions) -> anyhow::Result<()> {
    let settings = configuration::get_configuration(&cfg_folder.config_file)
        .context("Unable to parse configuration file")?;

    let artist_id = normalize_artist_id(
        options
            .artist
            .as_deref()
            .unwrap_or(&settings.default_artist),
    );

    let client = SpotifyClient::authenticate(&settings.api_settings)
        .await
        .context("Unable to get access token")?;

    if options.explore {
        let hops = options.hops.unwrap_or(settings.default_hops);
        explore(&client, &settings, &artist_id, hops, options.include_no_date).await
    } else {
        generate(&client, &settings, &artist_id, options.include_no_date).await
    }
}

async fn generate(
    client: &SpotifyClient,
    settings: &Settings,
    artist_id: &str,
    include_no_date: bool,
) -> anyhow::Result<()> {
    println!("\x1b[1m\x1b[34mCollecting live albums...\x1b[0m");
    let html = build_listing(client, artist_id, include_no_date, settings.separate_undated)
        .await
        .with_context(|| format!("Failed to collect the albums of artist {}", artist_id))?;

    let path = write_output(Path::new(&settings.output_file), &html)
        .with_context(|| format!("Failed to write {}", settings.output_file))?;
    println!("\x1b[32mListing written to {}\x1b[0m", path.display());

    if let Err(e) = webbrowser::open(&format!("file://{}", path.display())) {
        warn!("Could not open {} in a browser: {}", path.display(), e);
    }
    Ok(())
}

/// Collects and renders the listing of one artist.
pub async fn build_listing(
    api: &dyn CatalogApi,
    artist_id: &str,
    include_no_date: bool,
    separate_undated: bool,
) -> Result<String, ApiError> {
    let live_albums = collect_live_albums(api, artist_id, include_no_date).await?;
    info!("Found {} live albums", live_albums.len());

    let artist = api.get_artist(artist_id).await?;
    let chronology = Chronology::build(live_albums, separate_undated);
    Ok(render_html(&artist.name, &chronology))
}

fn write_output(path: &Path, html: &str) -> io::Result<PathBuf> {
    fs::write(path, html)?;
    fs::canonicalize(path)
}

async fn explore(
    client: &SpotifyClient,
    settings: &Settings,
    artist_id: &str,
    hops: u32,
    include_no_date: bool,
) -> anyhow::Result<()> {
    let seed = client
        .get_artist(artist_id)
        .await
        .with_context(|| format!("Failed to look up artist {}", artist_id))?;
    println!(
        "\x1b[1m\x1b[34mExploring related artists starting from {} with {} recursive hops...\x1b[0m",
        seed.name, hops
    );

    let progress = create_spinner();
    let report = ArtistGraphExplorer::new(client, include_no_date)
        .with_progress(progress.clone())
        .explore(&seed, hops, settings.top_results)
        .await;
    progress.finish_and_clear();

    print!("{}", format_report(&report?, include_no_date));
    Ok(())
}

fn create_spinner() -> ProgressBar {
    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::with_template("{spinner} {pos} artists scored, now: {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    progress.enable_steady_tick(Duration::from_millis(120));
    progress
}

/// Summary printed at the end of an exploration.
pub fn format_report(report: &ExplorationReport, include_no_date: bool) -> String {
    let mut heading = "Artists with most live albums found".to_string();
    if include_no_date {
        heading.push_str(" (Including albums with no full date in the title)");
    }

    let mut lines = vec![
        format!(
            "Explored {} artists in {} recursive hops, starting from {}.",
            report.visited, report.recursion_limit, report.seed_name
        ),
        format!("\x1b[1m{}:\x1b[0m", heading),
    ];
    lines.extend(report.top.iter().map(ArtistScore::to_string));
    lines.push(format!(
        "Elapsed Time: {:.2}s",
        report.elapsed.as_secs_f64()
    ));

    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::{Album, Artist, ExternalUrls, MockCatalogApi};
    use tempfile::TempDir;

    fn album(id: &str, name: &str) -> Album {
        Album {
            id: id.to_string(),
            name: name.to_string(),
            external_urls: ExternalUrls {
                spotify: Some(format!("https://open.spotify.com/album/{}", id)),
            },
            images: Vec::new(),
            release_date: None,
        }
    }

    #[tokio::test]
    async fn test_build_listing() {
        let mut api = MockCatalogApi::new();
        api.expect_list_albums().times(1).returning(|_, _, _, _| {
            Ok(vec![
                album("a", "Cornell 5/8/77"),
                album("b", "Workingman's Dead"),
                album("c", "Live at Fillmore East, May 2, 1970"),
            ])
        });
        api.expect_get_artist().returning(|id| {
            Ok(Artist {
                id: id.to_string(),
                name: "Grateful Dead".to_string(),
            })
        });

        let html = build_listing(&api, "gd", false, false).await.unwrap();
        assert!(html.contains("Grateful Dead Live Albums in Chronological Order"));
        assert!(html.contains("<strong>1970 (1)</strong>"));
        assert!(html.contains("<strong>1977 (1)</strong>"));
        assert!(!html.contains("Workingman"));
    }

    #[tokio::test]
    async fn test_build_listing_fails_without_partial_output() {
        let mut api = MockCatalogApi::new();
        api.expect_list_albums()
            .returning(|_, _, _, _| Err(ApiError::Status {
                status: 404,
                message: "non existing id".to_string(),
            }));
        api.expect_get_artist().never();

        assert!(build_listing(&api, "gd", false, false).await.is_err());
    }

    #[test]
    fn test_write_output() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("live_albums.html");

        let path = write_output(&target, "<html></html>").unwrap();
        assert!(path.is_absolute());
        assert_eq!(fs::read_to_string(path).unwrap(), "<html></html>");
    }

    #[test]
    fn test_format_report() {
        let report = ExplorationReport {
            seed_name: "Grateful Dead".to_string(),
            recursion_limit: 2,
            visited: 3,
            top: vec![
                ArtistScore {
                    live_albums: 42,
                    artist_id: "5wbIWUzTPuTxTyG6ouQKqz".to_string(),
                    artist_name: "Phish".to_string(),
                },
                ArtistScore {
                    live_albums: 7,
                    artist_id: "1YTe4dNIoWX3iHX8H4xVeM".to_string(),
                    artist_name: "Jerry Garcia Band".to_string(),
                },
            ],
            elapsed: Duration::from_millis(1500),
        };

        let out = format_report(&report, true);
        assert!(out.starts_with(
            "Explored 3 artists in 2 recursive hops, starting from Grateful Dead.\n"
        ));
        assert!(out.contains("(Including albums with no full date in the title)"));
        assert!(out.contains(&format!("42 - {:30} - 5wbIWUzTPuTxTyG6ouQKqz", "Phish")));
        assert!(out.find("Phish").unwrap() < out.find("Jerry Garcia Band").unwrap());
        assert!(out.ends_with("Elapsed Time: 1.50s\n"));
    }

    #[test]
    fn test_format_report_without_results() {
        let report = ExplorationReport {
            seed_name: "Nobody".to_string(),
            recursion_limit: 0,
            visited: 1,
            top: Vec::new(),
            elapsed: Duration::from_millis(20),
        };

        let out = format_report(&report, false);
        assert_eq!(
            out,
            "Explored 1 artists in 0 recursive hops, starting from Nobody.\n\
             \x1b[1mArtists with most live albums found:\x1b[0m\n\
             Elapsed Time: 0.02s\n"
        );
    }
}
