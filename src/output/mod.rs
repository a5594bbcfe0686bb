mod finding;
mod formatter;

pub use finding::{BuilderMatch, ScanReport};
pub use formatter::OutputFormatter;
