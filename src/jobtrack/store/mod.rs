//! # Storage Layer
//!
//! The collection of applications is persisted as a single JSON blob,
//! read and written wholesale (last write wins, no per-record files).
//!
//! The layer is split in two:
//!
//! - [`StorageBackend`]: raw blob I/O. Knows nothing about records.
//!   [`FsBackend`] is the production implementation (one `applications.json`
//!   under the data directory, atomic tmp-then-rename writes);
//!   [`MemBackend`] backs tests and can simulate write failures.
//! - [`RecordStore`]: collection semantics over a backend. Load-all,
//!   save-all, upsert by id, remove by id.
//!
//! ## Robustness
//!
//! A blob that fails to parse is treated as an empty collection rather than
//! an error; the next successful save overwrites it. Actual I/O failures
//! (permissions, disk) surface as `TrackError::StorageUnavailable` and leave
//! the persisted state untouched.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── applications.json   # The record blob
//! └── config.json         # Configuration
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod record_store;

pub use backend::StorageBackend;
pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;
pub use record_store::RecordStore;
