// src/filter.rs
//
// Pure visibility computation. The table is never mutated or reordered:
// a filter only decides, per row, whether the presentation layer shows it.
// The mask is recomputed from scratch on every spec change and owned by
// the caller; nothing here caches state.

use std::collections::HashSet;

use crate::store::Table;

/// A query plus the columns it applies to.
///
/// Policies (all deliberate):
/// - empty query: every row visible, whatever `active_columns` holds
/// - non-empty query, empty `active_columns`: no row visible
/// - active names missing from the schema: ignored, never an error
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub query: String,
    pub active_columns: HashSet<String>,
}

impl FilterSpec {
    pub fn new<Q, I, C>(query: Q, active_columns: I) -> Self
    where
        Q: Into<String>,
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self {
            query: query.into(),
            active_columns: active_columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Query over every schema column, the usual starting state.
    pub fn all_columns<Q: Into<String>>(query: Q, table: &Table) -> Self {
        Self::new(query, table.columns().iter().cloned())
    }
}

/// One visibility flag per row, in row order. Deterministic: the same
/// table and spec always produce the same mask.
pub fn compute_visibility(table: &Table, spec: &FilterSpec) -> Vec<bool> {
    if spec.query.is_empty() {
        return vec![true; table.row_count()];
    }

    let needle = spec.query.to_lowercase();
    // Resolve names once; unknown columns drop out here
    let active_ix: Vec<usize> = spec
        .active_columns
        .iter()
        .filter_map(|name| table.column_index(name))
        .collect();

    (0..table.row_count())
        .map(|i| {
            let row = table.row(i).unwrap_or(&[]);
            active_ix
                .iter()
                .any(|&c| row.get(c).is_some_and(|v| v.to_lowercase().contains(&needle)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(vec![
            vec![s!("China"), s!("1425887337"), s!("17.5%"), s!("2023")],
            vec![s!("India"), s!("1417173173"), s!("17.8%"), s!("2023")],
            vec![s!("United States"), s!("339996563"), s!("4.2%"), s!("2023")],
        ])
    }

    #[test]
    fn empty_query_shows_everything() {
        let t = sample();
        let spec = FilterSpec::new("", ["Location"]);
        assert_eq!(compute_visibility(&t, &spec), vec![true, true, true]);

        // Even with no active columns at all
        let spec = FilterSpec::new("", Vec::<String>::new());
        assert_eq!(compute_visibility(&t, &spec), vec![true, true, true]);
    }

    #[test]
    fn no_active_columns_hides_everything() {
        let t = sample();
        let spec = FilterSpec::new("xyz", Vec::<String>::new());
        assert_eq!(compute_visibility(&t, &spec), vec![false, false, false]);
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let t = sample();
        let spec = FilterSpec::new("ind", ["Location"]);
        assert_eq!(compute_visibility(&t, &spec), vec![false, true, false]);

        let spec = FilterSpec::new("UNITED", ["Location"]);
        assert_eq!(compute_visibility(&t, &spec), vec![false, false, true]);
    }

    #[test]
    fn unknown_active_column_is_ignored() {
        let t = sample();
        let spec = FilterSpec::new("ind", ["Location", "Rank"]);
        assert_eq!(compute_visibility(&t, &spec), vec![false, true, false]);

        // Only unknown columns behaves like the empty set
        let spec = FilterSpec::new("ind", ["Rank"]);
        assert_eq!(compute_visibility(&t, &spec), vec![false, false, false]);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let t = sample();
        let spec = FilterSpec::new("17", ["Population", "% of World"]);
        let a = compute_visibility(&t, &spec);
        let b = compute_visibility(&t, &spec);
        assert_eq!(a, b);
    }

    #[test]
    fn column_union_covers_each_subset() {
        let t = sample();
        let q = "17";
        let by_pop = compute_visibility(&t, &FilterSpec::new(q, ["Population"]));
        let by_pct = compute_visibility(&t, &FilterSpec::new(q, ["% of World"]));
        let by_both = compute_visibility(&t, &FilterSpec::new(q, ["Population", "% of World"]));
        for i in 0..t.row_count() {
            assert_eq!(by_both[i], by_pop[i] || by_pct[i]);
        }
    }
}
