use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// Server answered with a non-2xx status
    Http { status: u16, url: String },
    /// Transport failure or a body that did not decode
    Request(reqwest::Error),
    /// No competition name contains the pattern
    CompetitionNotFound(String),
    /// A league table record is missing a field or has the wrong type for it
    Schema { field: &'static str, row: usize },
    MissingConfig(&'static str),
    InvalidApiKey,
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Request(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Http { status, url } => {
                write!(f, "Request to {} failed with status {}", url, status)
            }
            Error::Request(e) => write!(f, "Request failed: {}", e),
            Error::CompetitionNotFound(pattern) => {
                write!(f, "{} competition not found.", pattern)
            }
            Error::Schema { field, row } => {
                write!(f, "League table row {} has no usable '{}' field", row, field)
            }
            Error::MissingConfig(var) => write!(f, "Environment variable {} is not set", var),
            Error::InvalidApiKey => write!(f, "API key is not a valid header value"),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e)
    }
}
