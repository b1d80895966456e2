//! Library half of the `brandmap` command: logging, CSV adapters and tables.

pub mod catalog;
pub mod logging;
pub mod summary;
