//! Command handlers
//!
//! Entry points invoked by the CLI. Each returns a serializable outcome rather
//! than an error.

pub mod download;

pub use download::*;
