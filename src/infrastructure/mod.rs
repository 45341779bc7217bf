//! Infrastructure layer for filesystem and environment interactions in the
//! Zellij plugin sandbox.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, trace_file};
