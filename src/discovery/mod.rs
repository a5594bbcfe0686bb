//! Locating builder sources under the configured roots.

pub mod pattern;
pub mod walker;

pub use pattern::FilePattern;
pub use walker::{check_root, find_files, Discovery};
