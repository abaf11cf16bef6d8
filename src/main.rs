mod aggregate;
mod error;
mod export;
mod fetch;
mod parser;
mod record;
mod settings;
mod sources;

use std::time::Instant;

use anyhow::Result;
use tracing::{info, warn};

use aggregate::{merge, Aggregate};
use error::FetchError;
use settings::Settings;

#[derive(Debug, Default)]
struct RunStats {
    pages_ok: usize,
    pages_failed: usize,
    containers: usize,
    skipped: usize,
    unnamed: usize,
    records: usize,
}

impl RunStats {
    fn print(&self, aggregate_len: usize) {
        println!(
            "Pages: {} ok, {} failed. Containers: {} seen, {} skipped, {} without a name. Records: {} extracted, {} after dedup.",
            self.pages_ok,
            self.pages_failed,
            self.containers,
            self.skipped,
            self.unnamed,
            self.records,
            aggregate_len,
        );
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .try_init();
}

/// Fetch, parse and merge every department page in list order.
fn scrape_all(settings: &Settings, urls: &[String]) -> Result<(Aggregate, RunStats)> {
    let client = fetch::build_client(settings)?;
    let pages = urls
        .iter()
        .map(String::as_str)
        .zip(fetch::fetch_all(&client, urls));
    Ok(merge_pages(pages))
}

/// Parse and merge fetched pages in the order given. A failed fetch skips
/// only that page.
fn merge_pages<'a, I>(pages: I) -> (Aggregate, RunStats)
where
    I: IntoIterator<Item = (&'a str, Result<String, FetchError>)>,
{
    let mut aggregate = Aggregate::new();
    let mut stats = RunStats::default();

    for (url, page) in pages {
        let html = match page {
            Ok(html) => html,
            Err(e) => {
                warn!(url, "Error fetching page: {}", e);
                stats.pages_failed += 1;
                continue;
            }
        };
        stats.pages_ok += 1;

        let department = sources::department_from_url(url);
        let outcome = parser::process_page(&html, url, &department);
        info!(
            department = department.as_str(),
            containers = outcome.containers,
            records = outcome.records.len(),
            "page processed"
        );
        stats.containers += outcome.containers;
        stats.skipped += outcome.skipped;
        stats.unnamed += outcome.unnamed;
        stats.records += outcome.records.len();

        aggregate = outcome.records.into_iter().fold(aggregate, merge);
    }

    (aggregate, stats)
}

fn main() -> Result<()> {
    init_tracing();
    let settings = Settings::load();
    info!(settings = ?settings, "Starting faculty scraper");

    let t0 = Instant::now();
    let urls = sources::page_urls();
    println!("Scraping {} department pages...", urls.len());

    let (aggregate, stats) = scrape_all(&settings, &urls)?;

    println!("{}", export::format_table(aggregate.records()));
    export::export(aggregate.records(), &settings.output_path)?;

    stats.print(aggregate.len());
    info!(
        path = settings.output_path.as_str(),
        rows = aggregate.len(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "export written"
    );
    Ok(())
}
