//! Pure, deterministic flag logic. No I/O.

pub mod ops;
pub mod store;
