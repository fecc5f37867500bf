//! Textkit - stateless text-transformation helpers for web content.
//!
//! Two namespaces mirror the two places this crate is meant to run:
//! - [`client`]: pure helpers with no environment assumptions
//!   (predicates, case and whitespace transforms, markup generation,
//!   excerpts)
//! - [`server`]: helpers that read the wall clock or the platform path
//!   separator (date-based paths, path splitting, paragraph markup)
//!
//! Every function is total: empty input yields the documented
//! degenerate value (`""`, `false`, `0`, or an empty vec), never an
//! error or a panic. Nothing here mutates shared state, so all helpers
//! are safe to call concurrently without coordination.

pub mod client;
pub mod server;
