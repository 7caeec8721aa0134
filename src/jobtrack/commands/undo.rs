use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};
use crate::undo::{RestoreOutcome, UndoController};

use super::helpers::describe;

/// Restores the most recently deleted application, if its window is
/// still open.
pub fn run<B: StorageBackend>(
    store: &mut RecordStore<B>,
    undo: &mut UndoController,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match undo.restore(store)? {
        RestoreOutcome::Restored(record) => {
            result.add_message(CmdMessage::success(format!(
                "Application restored: {}",
                describe(&record)
            )));
            result.affected_records.push(record);
        }
        RestoreOutcome::Expired => {
            result.add_message(CmdMessage::warning("Too late, the undo window has closed."));
        }
        RestoreOutcome::Idle => {
            result.add_message(CmdMessage::info("Nothing to undo."));
        }
    }
    Ok(result)
}
