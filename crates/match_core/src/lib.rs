//! Match tracking core
//!
//! This crate provides:
//! - Result classification from round counts and overtime outcome
//! - An append-only CSV match history
//! - History filters and per-map win counts for reporting
//! - The save-form state used by the GUI
//!
//! # Usage
//!
//! ```no_run
//! use match_core::{classify, MatchRecord, MatchStore};
//!
//! let store = MatchStore::new("cs2_match_data.csv");
//! let result = classify(13, 7, false, None);
//! store.append(&MatchRecord::new("Mirage", 13, 7, result))?;
//! let history = store.load_all()?;
//! assert!(!history.is_empty());
//! # Ok::<(), match_core::StoreError>(())
//! ```

mod classify;
mod config;
mod error;
mod form;
mod stats;
mod store;
mod types;

pub use classify::*;
pub use config::*;
pub use error::*;
pub use form::*;
pub use stats::*;
pub use store::*;
pub use types::*;
