use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::ContainerError;

static NOTE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.note").unwrap());
static TABLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table").unwrap());
static CONTENT_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"td[valign="top"]"#).unwrap());
static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());

/// Every faculty entry block on the page, in document order.
pub fn note_containers(doc: &Html) -> Vec<ElementRef<'_>> {
    doc.select(&NOTE).collect()
}

/// Descend `note → table → td[valign=top] → table`, taking the first match at
/// each step. The inner table must hold at least one row.
pub fn content_table(note: ElementRef<'_>) -> Result<ElementRef<'_>, ContainerError> {
    let outer = note
        .select(&TABLE)
        .next()
        .ok_or(ContainerError::MissingTable)?;
    let cell = outer
        .select(&CONTENT_CELL)
        .next()
        .ok_or(ContainerError::MissingContentCell)?;
    let inner = cell
        .select(&TABLE)
        .next()
        .ok_or(ContainerError::MissingContentTable)?;
    if inner.select(&ROW).next().is_none() {
        return Err(ContainerError::NoRows);
    }
    Ok(inner)
}

/// All text nodes under `el`, joined with newlines.
pub fn joined_text(el: ElementRef<'_>) -> String {
    el.text().collect::<Vec<_>>().join("\n")
}
