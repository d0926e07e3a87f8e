use std::fmt;

/// Error parsing an industry template name
#[derive(Debug, Clone)]
pub struct ParseIndustryError(pub String);

impl fmt::Display for ParseIndustryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown industry template {:?}", self.0)
    }
}

impl std::error::Error for ParseIndustryError {}
