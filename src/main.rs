//! Application entry point for mdx-digest.
//!
//! Runs the aggregation pipeline once and prints the grouped chapter digest.

use anyhow::Result;
use dotenv::dotenv;
use log::debug;
use log::error;
use log::info;

use mdx_digest::config::Config;
use mdx_digest::config::SeriesTable;
use mdx_digest::digest::SeriesGroups;
use mdx_digest::digest::format::chapter_line;
use mdx_digest::digest::format::sort_chapters;
use mdx_digest::digest::group::group_by_series;
use mdx_digest::feed::auth::Authenticator;
use mdx_digest::feed::chapters::ChapterFetcher;
use mdx_digest::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::new();
    setup_logging(&config)?;
    info!("Starting mdx-digest...");

    let table = SeriesTable::load(&config.series_path)?;
    debug!(
        "Loaded {} configured series from {}",
        table.len(),
        config.series_path
    );

    let authenticator = Authenticator::new(&config);
    let Some(token) = authenticator.authenticate().await else {
        error!("Cannot fetch chapter feeds without a token");
        anyhow::bail!("authentication failed");
    };

    let fetcher = ChapterFetcher::new(&config);
    let mut chapters = Vec::new();
    for entry in table.iter() {
        chapters.extend(fetcher.fetch_chapters(&token, &entry.id).await);
    }
    info!(
        "Fetched {} chapters across {} series",
        chapters.len(),
        table.len()
    );

    let groups = group_by_series(chapters, &table);
    print_digest(groups);

    Ok(())
}

/// Renders the digest as a fixed-width table per series, newest chapter
/// numbers first.
fn print_digest(mut groups: SeriesGroups) {
    println!("MangaDex Latest Chapters");
    println!("{}", "=".repeat(80));

    for group in &mut groups.groups {
        sort_chapters(&mut group.chapters);

        println!();
        println!("{}", group.name);
        println!("Latest chapters: {}", group.chapters.len());
        println!("{}", "-".repeat(80));
        println!("{:<8} {:<35} {:<20} {}", "Ch#", "Title", "Published", "URL");

        for chapter in &group.chapters {
            let line = chapter_line(chapter);
            println!(
                "{:<8} {:<35} {:<20} {}",
                line.number, line.title, line.published, line.url
            );
        }
        println!("{}", "=".repeat(80));
    }

    if !groups.no_updates.is_empty() {
        println!();
        println!("No updates for: {}", groups.no_updates.join(", "));
    }
}
