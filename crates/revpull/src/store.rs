//! Incremental CSV store
//!
//! Every batch is merged by read-modify-write: load whatever the output
//! already holds, append the batch after it, drop duplicate identity keys
//! keeping the first occurrence, and replace the file through a temp file
//! and rename. Re-merging an already-stored page is therefore a no-op,
//! which is what makes interrupted runs safe to re-run.
//!
//! An unreadable existing output is quarantined to `<output>.bak` and the
//! merge proceeds from an empty table; prior data is never silently
//! discarded.

use crate::error::Result;
use crate::normalize::ReviewRow;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Merge a batch of rows into the output CSV.
///
/// Existing rows come first, so on duplicate `review_id`s the
/// earlier-stored row wins over a newly fetched one. Returns the resulting
/// row count.
pub fn merge_batch(batch: &[ReviewRow], output: &Path) -> Result<usize> {
    ensure_parent_dir(output)?;

    let mut combined = load_or_quarantine(output)?;
    combined.extend_from_slice(batch);

    let rows = dedup_rows(combined);
    write_replace(&rows, output)?;

    debug!(rows = rows.len(), file = %output.display(), "merged batch into output");
    Ok(rows.len())
}

/// Re-deduplicate the whole table in place. Returns the final row count.
pub fn dedup_file(output: &Path) -> Result<usize> {
    let rows = dedup_rows(read_rows(output)?);
    write_replace(&rows, output)?;
    Ok(rows.len())
}

/// Path of the quarantine copy for an unreadable output file
pub fn backup_path(output: &Path) -> PathBuf {
    append_suffix(output, ".bak")
}

fn ensure_parent_dir(output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Load existing rows, moving an unreadable file aside as a backup
fn load_or_quarantine(output: &Path) -> Result<Vec<ReviewRow>> {
    if !output.exists() {
        return Ok(Vec::new());
    }

    match read_rows(output) {
        Ok(rows) => Ok(rows),
        Err(err) => {
            let backup = backup_path(output);
            warn!(
                file = %output.display(),
                backup = %backup.display(),
                error = %err,
                "existing output is unreadable, quarantining it and starting from an empty table"
            );
            fs::rename(output, &backup)?;
            Ok(Vec::new())
        }
    }
}

fn read_rows(path: &Path) -> Result<Vec<ReviewRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Drop rows whose non-null `review_id` was already seen, keeping the
/// first occurrence. Rows without an identity key are always kept.
fn dedup_rows(rows: Vec<ReviewRow>) -> Vec<ReviewRow> {
    let mut seen = HashSet::new();
    rows.into_iter()
        .filter(|row| match &row.review_id {
            Some(id) => seen.insert(id.clone()),
            None => true,
        })
        .collect()
}

/// Replace the output with the given rows via temp file + rename, so a
/// crash mid-write leaves the previous table intact.
fn write_replace(rows: &[ReviewRow], output: &Path) -> Result<()> {
    let tmp = append_suffix(output, ".tmp");
    {
        let mut writer = csv::Writer::from_path(&tmp)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
    }
    fs::rename(&tmp, output)?;
    Ok(())
}

fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(suffix);
    PathBuf::from(os)
}
