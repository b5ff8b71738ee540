//! HTML table access on top of `scraper`.

use std::num::IntErrorKind;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::{IngestError, Result};
use crate::grid::Cell;

static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("Invalid row selector"));

/// First element matching `selector`.
pub fn find_table<'a>(document: &'a Html, selector: &str) -> Result<ElementRef<'a>> {
    let parsed = Selector::parse(selector).map_err(|err| IngestError::InvalidSelector {
        selector: selector.to_string(),
        message: err.to_string(),
    })?;
    document
        .select(&parsed)
        .next()
        .ok_or_else(|| IngestError::TableNotFound {
            selector: selector.to_string(),
        })
}

/// Cells of every row in `table`, in document order.
///
/// Only `td`/`th` elements directly under a `tr` count as cells.
pub fn collect_cells(table: ElementRef<'_>) -> Vec<Vec<Cell>> {
    table
        .select(&ROW_SELECTOR)
        .map(|row| {
            row.children()
                .filter_map(ElementRef::wrap)
                .filter(|el| matches!(el.value().name(), "td" | "th"))
                .map(to_cell)
                .collect()
        })
        .collect()
}

fn to_cell(element: ElementRef<'_>) -> Cell {
    Cell::spanning(
        cell_text(element),
        span_attr(element, "rowspan"),
        span_attr(element, "colspan"),
    )
}

/// Descendant text nodes, each trimmed, blanks dropped, joined by one space.
fn cell_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Span attribute value; missing or garbage reads as 1, overflowing digits
/// saturate and are clamped by [`Cell::spanning`].
fn span_attr(element: ElementRef<'_>, name: &str) -> usize {
    match element.value().attr(name).map(|value| value.trim().parse::<usize>()) {
        Some(Ok(span)) => span,
        Some(Err(err)) if *err.kind() == IntErrorKind::PosOverflow => usize::MAX,
        Some(Err(_)) | None => 1,
    }
}
