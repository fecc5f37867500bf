//! Helpers that assume a privileged execution environment: wall-clock
//! access and the platform path separator.
//!
//! - [`date`] - UTC civil dates and date-based file paths
//! - [`path`] - path segment splitting
//! - [`paragraph`] - CRLF text to HTML paragraphs

pub mod date;
pub mod paragraph;
pub mod path;

pub use date::{DateTimeUtc, path_by_date, path_by_date_at};
pub use paragraph::to_paragraph;
pub use path::split_url_path;
