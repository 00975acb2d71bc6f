//! Field-by-field diffs of structured SQL responses.
//!
//! When a verification fails, a raw dump of two response trees is hard to
//! scan. [`ResultDiff`] walks expected and actual together and keeps one
//! entry per differing field, labelled with its path into the response,
//! then renders the entries with the expected and actual values aligned in
//! columns.

use serde_json::Value as JsonValue;
use shoal_link::{ColumnInfo, SqlResponse};
use std::fmt;

/// One differing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    /// Path into the response, e.g. `columns[0].jdbc_type` or `rows[2][0]`.
    pub path: String,
    pub expected: String,
    pub actual: String,
}

/// All differences between an expected and an actual response.
///
/// When the lists differ in length, the length gets its own entry and the
/// element-wise walk covers the common prefix, so a single missing row
/// does not drown the report in spurious cell entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultDiff {
    entries: Vec<DiffEntry>,
}

impl ResultDiff {
    /// Compare two responses; `None` when they are structurally identical.
    pub fn between(expected: &SqlResponse, actual: &SqlResponse) -> Option<ResultDiff> {
        let mut entries = Vec::new();
        diff_columns(&expected.columns, &actual.columns, &mut entries);
        diff_rows(&expected.rows, &actual.rows, &mut entries);
        if entries.is_empty() {
            None
        } else {
            Some(ResultDiff { entries })
        }
    }

    /// Every differing field, in walk order (columns before rows).
    pub fn entries(&self) -> &[DiffEntry] {
        &self.entries
    }
}

impl fmt::Display for ResultDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path_width = self
            .entries
            .iter()
            .map(|e| e.path.len() + 1)
            .max()
            .unwrap_or(0);
        let expected_width = self
            .entries
            .iter()
            .map(|e| e.expected.len())
            .max()
            .unwrap_or(0);

        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{:<path_width$} expected {:<expected_width$} actual {}",
                format!("{}:", entry.path),
                entry.expected,
                entry.actual
            )?;
        }
        Ok(())
    }
}

fn diff_columns(expected: &[ColumnInfo], actual: &[ColumnInfo], out: &mut Vec<DiffEntry>) {
    if expected.len() != actual.len() {
        push(out, "columns.len", expected.len(), actual.len());
    }
    for (i, (e, a)) in expected.iter().zip(actual.iter()).enumerate() {
        if e.name != a.name {
            push(out, format!("columns[{i}].name"), quoted(&e.name), quoted(&a.name));
        }
        if e.column_type != a.column_type {
            push(
                out,
                format!("columns[{i}].type"),
                quoted(&e.column_type),
                quoted(&a.column_type),
            );
        }
        if e.jdbc_type != a.jdbc_type {
            push(out, format!("columns[{i}].jdbc_type"), e.jdbc_type, a.jdbc_type);
        }
        if e.display_size != a.display_size {
            push(
                out,
                format!("columns[{i}].display_size"),
                e.display_size,
                a.display_size,
            );
        }
    }
}

fn diff_rows(expected: &[Vec<JsonValue>], actual: &[Vec<JsonValue>], out: &mut Vec<DiffEntry>) {
    if expected.len() != actual.len() {
        push(out, "rows.len", expected.len(), actual.len());
    }
    for (r, (erow, arow)) in expected.iter().zip(actual.iter()).enumerate() {
        if erow.len() != arow.len() {
            push(out, format!("rows[{r}].len"), erow.len(), arow.len());
        }
        for (c, (ev, av)) in erow.iter().zip(arow.iter()).enumerate() {
            if ev != av {
                // JSON rendering keeps the value type visible: 10 vs "10".
                push(out, format!("rows[{r}][{c}]"), ev, av);
            }
        }
    }
}

fn push(
    out: &mut Vec<DiffEntry>,
    path: impl Into<String>,
    expected: impl fmt::Display,
    actual: impl fmt::Display,
) {
    out.push(DiffEntry {
        path: path.into(),
        expected: expected.to_string(),
        actual: actual.to_string(),
    });
}

fn quoted(s: &str) -> String {
    format!("{s:?}")
}
