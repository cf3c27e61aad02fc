//! Dioxus components for filedrop.
//!
//! Provides the multi-file drop area with preview cards and its
//! single-file adapter.

mod file_area;
mod single_file_area;

pub use file_area::FileArea;
pub use single_file_area::SingleFileArea;
