//! `airport-console` - Administrative console for airport operational data
//!
//! This library provides the console actions behind the `aptctl` binary and its
//! REST backend: flight scheduling with a gate spacing guard, crew rostering
//! with per-flight role ceilings, passenger flag handling, ground operations
//! dispatch and summary reports, all over a `SQLite` store.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod filter;
pub mod flagging;
pub mod ground_ops;
pub mod guard;
pub mod logging;
pub mod models;
pub mod reports;
pub mod server;
pub mod storage;

pub use config::Config;
pub use console::Console;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use storage::{ImportSummary, Storage, StorageStats};
