use regex::Regex;

use crate::error::ConfigError;

/// A filename pattern anchored at the start of the name.
///
/// `Foo` matches `FooBuilder.java` but not `MyFoo.java`; add `$` to require a
/// full match.
#[derive(Debug, Clone)]
pub struct FilePattern {
    source: String,
    regex: Regex,
}

impl FilePattern {
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let invalid = |source: regex::Error| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        };

        // `a)(b` only parses once wrapped, so the raw pattern is checked too.
        Regex::new(pattern).map_err(invalid)?;
        let regex = Regex::new(&format!("^(?:{pattern})")).map_err(invalid)?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.regex.is_match(file_name)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}
