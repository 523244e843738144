//! Demo host for the product table: loads a catalog, applies filters and
//! prints the rows, optionally reading filter changes from stdin.

pub mod config;
pub mod session;

pub use config::{Cli, OutputFormat};
pub use session::{Input, Session};
