use regex::Regex;

/// Used when a service has no `countRegex`: a decimal number in literal
/// parentheses, as in `Inbox (5)`.
pub const DEFAULT_COUNT_PATTERN: &str = r"\(([0-9]+)\)";

/// A compiled count pattern.
///
/// A pattern that does not compile never matches, so its badge stays empty.
#[derive(Debug, Clone)]
pub enum CountPattern {
    Compiled(Regex),
    Invalid { pattern: String, reason: String },
}

impl CountPattern {
    /// Compile the service's pattern, or the default if it has none.
    pub fn compile(custom: Option<&str>) -> Self {
        let pattern = custom.unwrap_or(DEFAULT_COUNT_PATTERN);
        match Regex::new(pattern) {
            Ok(re) => Self::Compiled(re),
            Err(e) => Self::Invalid {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            },
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Compiled(_))
    }

    /// Badge text for `title`: the first capture group, or empty.
    pub fn extract(&self, title: &str) -> String {
        match self {
            Self::Compiled(re) => re
                .captures(title)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
            Self::Invalid { .. } => String::new(),
        }
    }
}
