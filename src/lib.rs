//! Builder Audit
//!
//! Walks trees of generated Java sources, picks out `*Builder` files and
//! reports the ones that still carry a deprecation marker.

pub mod cli;
pub mod config;
pub mod detector;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;
pub mod source;
pub mod transform;

pub use config::ScanConfig;
pub use detector::DeprecationDetector;
pub use error::{Error, Result};
pub use scanner::Scanner;
pub use source::SourceFile;
pub use transform::{NoopTransformer, Transformer};
