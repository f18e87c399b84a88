// src/file.rs

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use crate::csv::{to_export_string, Delim};
use crate::error::ExportError;
use crate::store::Table;

pub const DEFAULT_EXPORT_STEM: &str = "output";

/// Export the full table to `path`. The contents are built in memory and
/// written with a single `fs::write`, so a failure leaves no half-written
/// row behind. Returns the path actually written.
pub fn write_export(
    path: &Path,
    table: &Table,
    include_headers: bool,
    delim: Delim,
) -> Result<PathBuf, ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(|e| wrap(path, e))?;
        }
    }

    let contents = to_export_string(table, include_headers, delim);
    fs::write(path, contents).map_err(|e| wrap(path, e))?;

    logf!("export: wrote {} row(s) to {}", table.row_count(), path.display());
    Ok(path.to_path_buf())
}

/// Resolve a user-supplied output argument: empty → `output.csv`/`output.tsv`
/// in the working directory; a directory (or trailing-separator hint) →
/// the default filename inside it; anything else is taken verbatim.
pub fn resolve_out_path(user_o: &str, delim: Delim) -> PathBuf {
    let default_name = format!("{}.{}", DEFAULT_EXPORT_STEM, delim.ext());
    if user_o.is_empty() {
        return PathBuf::from(default_name);
    }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(&p) || p.is_dir() {
        p.join(default_name)
    } else {
        p
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotADirectory,
            format!("path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

fn wrap(path: &Path, source: io::Error) -> ExportError {
    ExportError::Write { path: path.to_path_buf(), source }
}
