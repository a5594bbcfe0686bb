use std::fs;
use std::path::{Path, PathBuf};

use crate::error::IoError;

/// A source file read fully into memory.
///
/// The handle is closed as soon as the content is read; nothing is ever
/// written back.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    lines: Vec<String>,
}

impl SourceFile {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, IoError> {
        let path = path.into();
        let content = fs::read_to_string(&path).map_err(|e| IoError::read_error(&path, e))?;
        Ok(Self::from_content(path, &content))
    }

    pub fn from_content(path: impl Into<PathBuf>, content: &str) -> Self {
        Self {
            path: path.into(),
            lines: content.lines().map(str::to_owned).collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Name from the first `package` declaration, if any.
    pub fn package_name(&self) -> Option<&str> {
        self.lines.iter().find_map(|line| {
            let rest = line.strip_prefix("package")?;
            if !rest.starts_with(char::is_whitespace) {
                return None;
            }
            let rest = rest.trim();
            let name = rest.strip_suffix(';').unwrap_or(rest).trim();
            (!name.is_empty()).then_some(name)
        })
    }
}
