//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and operates on the configuration and the registry. The watch loop
//! itself lives in [`crate::watch`]; everything here manages the tag
//! vocabulary it sorts by.

pub mod add;
pub mod display;
pub mod init;
pub mod remove;
pub mod rename;

pub use add::execute as add;
pub use display::{display, search};
pub use init::{execute as init, set};
pub use remove::{remove_dir, remove_tag};
pub use rename::execute as rename;
