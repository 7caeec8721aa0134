use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};
use crate::undo::UndoController;
use std::io::{self, Write};

use super::helpers::{describe, record_by_index};

/// Deletes the application at `index` and arms the undo window for it.
///
/// Prompts for confirmation on stdin unless `skip_confirm` is set. The
/// undo hint itself is left to the caller: whether a window is worth
/// advertising depends on whether the process outlives it.
pub fn run<B: StorageBackend>(
    store: &mut RecordStore<B>,
    undo: &mut UndoController,
    index: usize,
    skip_confirm: bool,
) -> Result<CmdResult> {
    let record = record_by_index(store, index)?;

    if !skip_confirm {
        println!("This will delete the following application:");
        println!("  {} {}", index, describe(&record));
        print!("[Y] To delete: ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if input.trim() != "Y" {
            let mut res = CmdResult::default();
            res.add_message(CmdMessage::info("Operation cancelled."));
            return Ok(res);
        }
    }

    let mut result = CmdResult::default();
    match undo.delete(store, record.id)? {
        Some(deleted) => {
            result.add_message(CmdMessage::success(format!(
                "Application deleted ({}): {}",
                index,
                describe(&deleted)
            )));
            result.affected_records.push(deleted);
        }
        None => {
            result.add_message(CmdMessage::info("Nothing was deleted."));
        }
    }
    Ok(result)
}
