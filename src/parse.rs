// src/parse.rs
//
// Population table extraction.
//
// Structural assumptions (observed on the target page):
// - the data table is the first <table> whose class list contains "wikitable"
// - first <tr> is the header row
// - data cells by position: td[0] rank (unused), td[1] location,
//   td[2] population, td[3] % of world, td[4] date
// - the location cell usually links its label; the link text is preferred

use crate::core::html::{find_marked_table, first_link_text, inner_after_open_tag, next_tag_block_ci, strip_tags};
use crate::core::sanitize::{first_non_empty, normalize_entities};
use crate::error::ParseError;
use crate::store::Table;

const TABLE_CLASS: &str = "wikitable";

/// Parse an already-fetched HTML document into a `Table`.
/// Whole-table-or-nothing: no partial table is ever returned.
pub fn parse(document: &str) -> Result<Table, ParseError> {
    let table = find_marked_table(document, TABLE_CLASS).ok_or(ParseError::TableNotFound)?;

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    let mut pos = 0usize;
    let mut header_seen = false;

    while let Some((tr_s, tr_e)) = next_tag_block_ci(table, "<tr", "</tr>", pos) {
        let tr = &table[tr_s..tr_e];
        pos = tr_e;

        if !header_seen {
            header_seen = true;
            continue;
        }

        let cells = read_data_cells(tr);
        if cells.is_empty() {
            // Section separators and th-only rows carry no <td> cells
            skipped += 1;
            continue;
        }
        rows.push(record_from_cells(&cells));
    }

    if skipped > 0 {
        logd!("parse: skipped {skipped} non-data row(s)");
    }
    logf!("parse: extracted {} row(s)", rows.len());

    Ok(Table::new(rows))
}

/// Raw inner HTML of each <td> in document order.
fn read_data_cells(tr: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut td_pos = 0usize;
    while let Some((td_s, td_e)) = next_tag_block_ci(tr, "<td", "</td>", td_pos) {
        cells.push(inner_after_open_tag(&tr[td_s..td_e]));
        td_pos = td_e;
    }
    cells
}

/// Plain text of a cell: entities decoded, tags dropped, whitespace collapsed.
fn cell_text(inner: &str) -> String {
    strip_tags(normalize_entities(inner))
}

/// One normalized record in schema order.
fn record_from_cells(cells: &[String]) -> Vec<String> {
    // Location: link text, else cell text, else empty
    let location = first_non_empty([
        cells.get(1).and_then(|c| first_link_text(c)),
        cells.get(1).map(|c| cell_text(c)),
    ]);
    // Population keeps its thousands digits but loses the separators
    let population = cells
        .get(2)
        .map(|c| cell_text(c).replace(',', ""))
        .unwrap_or_default();
    let percent = cells.get(3).map(|c| cell_text(c)).unwrap_or_default();
    let date = cells.get(4).map(|c| cell_text(c)).unwrap_or_default();

    vec![location, population, percent, date]
}
