use std::sync::LazyLock;

use itertools::Itertools;
use scraper::{ElementRef, Selector};

static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

pub fn is_absolute_http(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Absolute http(s) hrefs under `table`, in document order, without repeats.
pub fn hyperlinks(table: ElementRef) -> Vec<String> {
    table
        .select(&ANCHOR)
        .filter_map(|a| a.value().attr("href"))
        .map(str::trim)
        .filter(|href| is_absolute_http(href))
        .unique()
        .map(str::to_string)
        .collect()
}
