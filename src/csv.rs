// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use crate::store::Table;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn ext(&self) -> &'static str {
        match self { Delim::Csv => "csv", Delim::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { Delim::Csv => ',', Delim::Tsv => '\t' }
    }
}

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant). std-only.
/// Used by round-trip tests and for reading back previously exported files.
pub fn parse_rows(text: &str, delim: Delim) -> Vec<Vec<String>> {
    let sep = delim.delim();
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                // move the field without cloning
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !row.is_empty() && !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer. Fields containing the
/// delimiter, a quote or a line break are quoted with inner quotes doubled.
pub fn write_row<W: Write>(mut w: W, row: &[String], delim: Delim) -> io::Result<()> {
    let sep = delim.delim();
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Serialize a whole table: header line (when requested) then one line per
/// row, in table order. Always the FULL table — any active filter is a
/// view-layer concern and never reaches the export path.
pub fn to_export_string(table: &Table, include_headers: bool, delim: Delim) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        let _ = write_row(&mut buf, table.columns(), delim);
    }
    for i in 0..table.row_count() {
        if let Some(r) = table.row(i) {
            let _ = write_row(&mut buf, r, delim);
        }
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields_stay_bare() {
        let mut buf = Vec::new();
        write_row(&mut buf, &[s!("India"), s!("1417173173")], Delim::Csv).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "India,1417173173\n");
    }

    #[test]
    fn delimiter_and_quotes_force_quoting() {
        let mut buf = Vec::new();
        write_row(&mut buf, &[s!("Congo, Dem. Rep."), s!(r#"say "hi""#)], Delim::Csv).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "\"Congo, Dem. Rep.\",\"say \"\"hi\"\"\"\n"
        );
    }

    #[test]
    fn tsv_quotes_on_tab_not_comma() {
        let mut buf = Vec::new();
        write_row(&mut buf, &[s!("a,b"), s!("c\td")], Delim::Tsv).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,b\t\"c\td\"\n");
    }

    #[test]
    fn quoted_field_round_trips() {
        let original = s!("Congo, Dem. Rep.");
        let mut buf = Vec::new();
        write_row(&mut buf, &[original.clone(), s!("x")], Delim::Csv).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let rows = parse_rows(&text, Delim::Csv);
        assert_eq!(rows, vec![vec![original, s!("x")]]);
    }

    #[test]
    fn export_string_covers_full_table_in_order() {
        let t = Table::new(vec![
            vec![s!("China"), s!("1"), s!("a"), s!("x")],
            vec![s!("India"), s!("2"), s!("b"), s!("y")],
        ]);
        let out = to_export_string(&t, true, Delim::Csv);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Location,Population,% of World,Date");
        assert_eq!(lines[1], "China,1,a,x");
        assert_eq!(lines[2], "India,2,b,y");
    }
}
