use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Application;
use crate::store::{RecordStore, StorageBackend};
use chrono::Utc;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

const CSV_HEADER: &str = "company,position,applyDate,status,jobLink,notes";

/// Exports the whole collection to a CSV file.
///
/// Writes to `output` when given, otherwise to a date-stamped file in
/// the working directory. An empty collection writes no file at all.
pub fn run<B: StorageBackend>(
    store: &RecordStore<B>,
    output: Option<PathBuf>,
) -> Result<CmdResult> {
    let records = store.load_all()?;

    let mut result = CmdResult::default();
    if records.is_empty() {
        result.add_message(CmdMessage::info("No applications to export."));
        return Ok(result);
    }

    let path = output.unwrap_or_else(|| {
        PathBuf::from(format!("applications_{}.csv", Utc::now().format("%Y-%m-%d")))
    });

    let mut file = File::create(&path)?;
    write_csv(&mut file, &records)?;

    result.add_message(CmdMessage::success(format!(
        "Exported {} applications to {}",
        records.len(),
        path.display()
    )));
    Ok(result)
}

fn write_csv<W: Write>(writer: &mut W, records: &[Application]) -> Result<()> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for record in records {
        let cells = [
            csv_cell(&record.company),
            csv_cell(&record.position),
            csv_cell(&record.apply_date.to_string()),
            csv_cell(record.status.label()),
            csv_cell(record.job_link.as_deref().unwrap_or("")),
            csv_cell(record.notes.as_deref().unwrap_or("")),
        ];
        writeln!(writer, "{}", cells.join(","))?;
    }
    Ok(())
}

/// Quotes a single CSV cell. Embedded newlines become spaces, embedded
/// quotes are doubled.
fn csv_cell(value: &str) -> String {
    let flat = value
        .replace("\r\n", " ")
        .replace('\n', " ")
        .replace('\r', " ");
    format!("\"{}\"", flat.replace('"', "\"\""))
}
