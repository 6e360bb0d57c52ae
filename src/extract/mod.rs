//! Table extraction: locates `table` elements in parsed markup, names them,
//! and normalizes their rows into rectangular string records.

pub mod rows;


use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::sanitize::sanitize_filename;

static HEADINGS_AND_TABLES: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2, h3, table").expect("selector should be valid"));
static TH: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("th").expect("selector should be valid"));
static TR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("selector should be valid"));
static TD: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("selector should be valid"));
static IMG: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img").expect("selector should be valid"));

/// One table lifted out of the page, normalized to a rectangle
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedTable {
    /// Title as derived from the surrounding markup
    pub title: String,

    /// Filesystem-safe stem used for the output CSV
    pub file_stem: String,

    /// Column names in encounter order
    pub headers: Vec<String>,

    /// Data rows, each exactly `headers.len()` wide
    pub rows: Vec<Vec<String>>,
}

/// Tables lifted from one page, with deduplication accounting
#[derive(Debug, Clone)]
pub struct PageTables {
    /// Distinct tables in document order
    pub tables: Vec<ExtractedTable>,

    /// Tables skipped because an identical serialization was already seen
    pub duplicates_skipped: usize,
}

/// Extracts every distinct table from the page markup, in document order.
///
/// Tables whose serialized form exactly matches one already seen are
/// skipped and counted. This is an exact-match check, not semantic dedup:
/// trivial whitespace differences make two tables distinct.
pub fn extract_tables(html: &str, strict_rows: bool) -> PageTables {
    let doc = Html::parse_document(html);

    let mut seen: HashSet<String> = HashSet::new();
    let mut tables = Vec::new();
    let mut duplicates_skipped = 0usize;
    let mut last_heading: Option<String> = None;
    let mut position = 0usize;

    // One pass over headings and tables together keeps the nearest
    // preceding h2/h3 available when each table turns up.
    for element in doc.select(&HEADINGS_AND_TABLES) {
        if element.value().name() != "table" {
            last_heading = Some(element_text(&element));
            continue;
        }
        position += 1;

        let serialized = element.html();
        if !seen.insert(serialized) {
            ::log::debug!("Skipping duplicate table at position {}", position);
            duplicates_skipped += 1;
            continue;
        }

        let title = table_title(&element, last_heading.as_deref(), position);
        // A title that sanitizes to nothing would name the file `.csv`
        let mut file_stem = sanitize_filename(&title);
        if file_stem.is_empty() {
            file_stem = format!("Table_{}", position);
        }
        let (headers, rows) = rows::normalize(&element, strict_rows);

        ::log::debug!(
            "Table '{}': {} columns, {} rows",
            title,
            headers.len(),
            rows.len()
        );

        tables.push(ExtractedTable {
            title,
            file_stem,
            headers,
            rows,
        });
    }

    PageTables {
        tables,
        duplicates_skipped,
    }
}

/// Derives a title for a table.
///
/// Priority: nearest preceding h2/h3 heading, then the table's own first
/// header cell, then a positional fallback.
fn table_title(table: &ElementRef, last_heading: Option<&str>, position: usize) -> String {
    if let Some(heading) = last_heading {
        return heading.to_string();
    }
    if let Some(th) = table.select(&TH).next() {
        return element_text(&th);
    }
    format!("Table_{}", position)
}

/// Concatenated text of an element's descendants, trimmed at the edges
fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
