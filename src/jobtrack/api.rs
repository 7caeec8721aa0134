//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the
//! single entry point for all tracker operations, regardless of the UI being
//! used.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Owns the state** a session needs (store, undo controller, app paths)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It explicitly avoids business logic (that belongs in `commands/*.rs`) and
//! presentation concerns (it returns data structures, not strings).
//!
//! `TrackerApi<B: StorageBackend>` is generic over the storage backend:
//! production uses `TrackerApi<FsBackend>`, tests use `TrackerApi<MemBackend>`.

use crate::commands;
use crate::error::Result;
use crate::model::Application;
use crate::query::{Filter, SortBy};
use crate::store::{RecordStore, StorageBackend};
use crate::undo::UndoController;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The main API facade for tracker operations.
///
/// All UI clients (one-shot CLI, interactive shell) interact through this.
pub struct TrackerApi<B: StorageBackend> {
    store: RecordStore<B>,
    undo: UndoController,
    data_dir: PathBuf,
}

impl<B: StorageBackend> TrackerApi<B> {
    pub fn new(backend: B, undo: UndoController, data_dir: PathBuf) -> Self {
        Self {
            store: RecordStore::with_backend(backend),
            undo,
            data_dir,
        }
    }

    pub fn add(&mut self, form: commands::ApplicationForm) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, form)
    }

    pub fn list(&self, filter: &Filter, sort: SortBy) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter, sort)
    }

    pub fn show(&self, indexes: &[usize]) -> Result<commands::CmdResult> {
        commands::show::run(&self.store, indexes)
    }

    pub fn edit(
        &mut self,
        index: usize,
        update: commands::ApplicationUpdate,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, index, update)
    }

    pub fn delete(&mut self, index: usize, skip_confirm: bool) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, &mut self.undo, index, skip_confirm)
    }

    pub fn undo(&mut self) -> Result<commands::CmdResult> {
        commands::undo::run(&mut self.store, &mut self.undo)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn export(&self, output: Option<PathBuf>) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, output)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    /// Advances the undo clock; returns a record whose window just closed.
    ///
    /// Event-loop hosts call this once per iteration. One-shot hosts never
    /// need to: the window dies with the process.
    pub fn tick(&mut self) -> Option<Application> {
        self.undo.tick()
    }

    /// The record currently waiting in the undo slot, if its window is open.
    pub fn pending_undo(&self) -> Option<&Application> {
        self.undo.pending()
    }

    /// Time remaining before the pending undo expires.
    pub fn undo_time_left(&self) -> Option<Duration> {
        self.undo.time_left()
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{
    ApplicationForm, ApplicationUpdate, CmdMessage, CmdResult, MessageLevel,
};
