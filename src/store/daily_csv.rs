use crate::errors::AppResult;
use crate::models::Snapshot;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// Append one snapshot as a CSV row. When the file does not exist yet it is
/// created and the snapshot's field names go in first as the header row.
/// Returns whether the file was created.
pub(crate) fn append_row(path: &Path, snapshot: &Snapshot) -> AppResult<bool> {
    let new_file = !path.exists();

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);

    if new_file {
        wtr.write_record(snapshot.keys())?;
    }
    wtr.write_record(snapshot.to_row())?;

    wtr.flush()?;
    Ok(new_file)
}
