//! Side-effecting operations: config location and the load/store cycle.

pub mod codec;
pub mod flag_file;
pub mod site;
