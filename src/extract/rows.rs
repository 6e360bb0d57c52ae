//! Row and cell normalization: header extraction, cell text cleanup,
//! ragged-row reconciliation, and the image-column post-pass.

use scraper::ElementRef;
use std::collections::HashSet;

use super::{IMG, TD, TH, TR, element_text};
use crate::sanitize::strip_citations;

/// Literal written for image cells and empty cells
const NULL_VALUE: &str = "null";

/// Walks a table's rows and produces its header set plus rectangular
/// string records.
///
/// Headers come from every `th` cell in the table, in encounter order;
/// blank header text gets a positional `unnamed_column_<k>` placeholder.
/// Data rows are every `tr` after the first, with cells taken from that
/// row's `td` elements.
pub(crate) fn normalize(table: &ElementRef, strict_rows: bool) -> (Vec<String>, Vec<Vec<String>>) {
    let mut headers = extract_headers(table);
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut non_useful: HashSet<usize> = HashSet::new();
    let mut extra_count = 0usize;

    for row in table.select(&TR).skip(1) {
        let mut cells = Vec::new();
        for (idx, cell) in row.select(&TD).enumerate() {
            // An embedded image poisons the whole column for this table
            if cell.select(&IMG).next().is_some() {
                non_useful.insert(idx);
                cells.push(NULL_VALUE.to_string());
                continue;
            }
            cells.push(cell_text(&cell));
        }

        reconcile_length(
            &mut cells,
            &mut headers,
            &mut rows,
            &mut extra_count,
            strict_rows,
        );
        rows.push(cells);
    }

    // Post-pass: a column that ever held an image is forced to null for
    // every row, including rows without an image of their own.
    for &idx in &non_useful {
        for row in rows.iter_mut() {
            if idx < row.len() {
                row[idx] = NULL_VALUE.to_string();
            }
        }
    }

    (headers, rows)
}

/// Collects header names from every `th` in the table
fn extract_headers(table: &ElementRef) -> Vec<String> {
    let mut headers = Vec::new();
    let mut unnamed_count = 1;

    for th in table.select(&TH) {
        let text = element_text(&th);
        if text.is_empty() {
            headers.push(format!("unnamed_column_{}", unnamed_count));
            unnamed_count += 1;
        } else {
            headers.push(text);
        }
    }

    headers
}

/// Visible text of one data cell.
///
/// Text fragments (anchor text included, in reading order) are trimmed
/// and joined with single spaces; an empty cell becomes the `null`
/// literal, and footnote markers are stripped from non-empty values.
fn cell_text(cell: &ElementRef) -> String {
    let joined = cell
        .text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if joined.is_empty() {
        NULL_VALUE.to_string()
    } else {
        strip_citations(&joined)
    }
}

/// Reconciles one row's length against the current header set.
///
/// Short rows are padded with empty strings. Long rows extend the header
/// set with `Extra_<k>` placeholders and backfill every previously
/// collected row, unless strict mode is on, in which case the row is
/// truncated instead.
fn reconcile_length(
    cells: &mut Vec<String>,
    headers: &mut Vec<String>,
    rows: &mut [Vec<String>],
    extra_count: &mut usize,
    strict_rows: bool,
) {
    if cells.len() < headers.len() {
        cells.resize(headers.len(), String::new());
        return;
    }

    if cells.len() > headers.len() {
        if strict_rows {
            ::log::warn!(
                "Truncating row from {} to {} cells (strict mode)",
                cells.len(),
                headers.len()
            );
            cells.truncate(headers.len());
            return;
        }

        let missing = cells.len() - headers.len();
        let mut added = Vec::with_capacity(missing);
        for _ in 0..missing {
            *extra_count += 1;
            added.push(format!("Extra_{}", extra_count));
        }

        ::log::warn!("Added additional headers: {:?}", added);

        headers.extend(added);
        for prior in rows.iter_mut() {
            prior.resize(headers.len(), String::new());
        }
    }
}
