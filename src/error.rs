use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A table needs at least one shard to route keys to.
    ZeroCapacity,
    InvalidConfig(String),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::ZeroCapacity => write!(f, "table capacity must be at least 1"),
            TableError::InvalidConfig(reason) => write!(f, "invalid table config: {}", reason),
        }
    }
}

impl std::error::Error for TableError {}
