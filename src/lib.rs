//! Development-mode flag manager for pipeline applications.
//!
//! Flags are named booleans stored in a flat YAML mapping
//! (`$DEVFLAGS_CONFIG_DIR/devflags.yaml`). Each process invocation performs
//! exactly one operation against that file: `get`, `set`, `unset`, or
//! `list`. The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (flag store, target resolution,
//!   output rendering). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config location, YAML codec,
//!   the load/store cycle). Isolated so tests can run against temp dirs.
//!
//! # Limitation
//!
//! Concurrent invocations are not coordinated. Writes are atomic (temp file
//! + rename), so an interrupted process never leaves a torn file, but two
//! simultaneous writers are last-writer-wins.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;

pub use error::{Error, Result};
