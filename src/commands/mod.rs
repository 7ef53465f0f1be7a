//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and executes the operation against a library root.

pub mod group;
pub mod init;
pub mod lib;
pub mod tag;

// Re-export execute functions for convenience
pub use group::execute as group;
pub use init::execute as init;
pub use lib::execute as lib;
