// src/summary.rs

//! Condense captured `brew` logs into short reports.
//!
//! Both summarizers depend on undocumented output conventions of `brew`. If
//! its wording changes they degrade to an empty report rather than failing.

/// Package names from a `brew bundle install` log.
///
/// Every line mentioning "installing" (any case) contributes its second
/// whitespace-separated word, e.g. `Installing wget` yields `wget`.
pub fn installed_packages(log: &str) -> Vec<String> {
    log.lines()
        .filter(|line| line.to_lowercase().contains("installing"))
        .filter_map(|line| line.split_whitespace().nth(1))
        .map(str::to_string)
        .collect()
}

/// Upgraded packages from a `brew upgrade` log, one aligned row each.
///
/// `brew upgrade` lists what it is about to upgrade on its second line as
/// `name old -> new, name old -> new, ...`.
pub fn upgraded_packages(log: &str) -> Vec<String> {
    let Some(listing) = log.lines().nth(1) else {
        return Vec::new();
    };

    let rows: Vec<&str> = listing.split(", ").collect();
    align_columns(&rows)
}

/// Align whitespace-separated fields into columns.
///
/// Columns are separated by two spaces and the last field of a row is never
/// padded. Blank rows are dropped.
pub fn align_columns(rows: &[&str]) -> Vec<String> {
    let split: Vec<Vec<&str>> = rows
        .iter()
        .map(|row| row.split_whitespace().collect::<Vec<_>>())
        .filter(|fields| !fields.is_empty())
        .collect();

    let columns = split.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for fields in &split {
        for (i, field) in fields.iter().enumerate() {
            widths[i] = widths[i].max(field.chars().count());
        }
    }

    split
        .iter()
        .map(|fields| {
            let mut out = String::new();
            for (i, field) in fields.iter().enumerate() {
                out.push_str(field);
                if i + 1 < fields.len() {
                    let pad = widths[i] - field.chars().count() + 2;
                    out.extend(std::iter::repeat_n(' ', pad));
                }
            }
            out
        })
        .collect()
}

/// Number of lines in a capture, counting a trailing unterminated line.
pub fn line_count(log: &str) -> usize {
    log.lines().count()
}
