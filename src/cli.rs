// src/cli.rs
use std::{env, io::Write, path::PathBuf};

use color_eyre::eyre::{eyre, Result, WrapErr};

use crate::csv::{self, Delim};
use crate::file;
use crate::filter::{compute_visibility, FilterSpec};
use crate::parse;
use crate::store::Table;

pub struct Params {
    /// Saved HTML document to read (fetching it is the caller's job)
    pub input: PathBuf,
    pub query: String,
    /// None → filter over every column (all boxes checked)
    pub columns: Option<Vec<String>>,
    pub out: Option<String>,
    pub format: Delim,
    pub include_headers: bool,
}

pub fn run() -> Result<()> {
    let params = parse_cli()?;

    let document = std::fs::read_to_string(&params.input)
        .wrap_err_with(|| format!("reading {}", params.input.display()))?;
    let table = parse::parse(&document)?;

    let spec = match &params.columns {
        Some(cols) => FilterSpec::new(params.query.clone(), cols.iter().cloned()),
        None => FilterSpec::all_columns(params.query.clone(), &table),
    };
    let mask = compute_visibility(&table, &spec);

    print_view(&table, &mask, params.format)?;

    if let Some(out) = &params.out {
        let path = file::resolve_out_path(out, params.format);
        // Export is always the full table; the filter above only shapes stdout
        let written = file::write_export(&path, &table, params.include_headers, params.format)?;
        eprintln!("Wrote {}", written.display());
    }

    Ok(())
}

/// Header plus the visible rows, delimited, to stdout.
fn print_view(table: &Table, mask: &[bool], format: Delim) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    csv::write_row(&mut out, table.columns(), format)?;
    for i in 0..table.row_count() {
        if !mask.get(i).copied().unwrap_or(false) { continue; }
        if let Some(row) = table.row(i) {
            csv::write_row(&mut out, row, format)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn parse_cli() -> Result<Params> {
    let mut input: Option<PathBuf> = None;
    let mut query = s!();
    let mut columns: Option<Vec<String>> = None;
    let mut out: Option<String> = None;
    let mut format = Delim::Csv;
    let mut include_headers = true;

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-f" | "--filter" => {
                query = args.next().ok_or_else(|| eyre!("Missing value for --filter"))?;
            }
            "-c" | "--columns" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --columns"))?;
                columns = Some(
                    v.split(',')
                        .map(|c| c.trim().to_string())
                        .filter(|c| !c.is_empty())
                        .collect(),
                );
            }
            "-o" | "--out" => {
                out = Some(args.next().ok_or_else(|| eyre!("Missing output path"))?);
            }
            "--format" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --format"))?;
                format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(eyre!("Unknown format: {}", other)),
                };
            }
            "--no-headers" => include_headers = false,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ if input.is_none() && !a.starts_with('-') => input = Some(PathBuf::from(a)),
            _ => return Err(eyre!("Unknown arg: {}", a)),
        }
    }

    let input = input.ok_or_else(|| eyre!("Missing input document (see --help)"))?;
    Ok(Params { input, query, columns, out, format, include_headers })
}
