use std::env;
use std::hash::Hash;

use crate::error::TableError;
use crate::table::Table;

/// Shard count used when none is given.
pub const DEFAULT_CAPACITY: usize = 16;

/// Environment variable read by [`TableConfig::from_env`].
pub const CAPACITY_ENV: &str = "BUCKET_TABLE_CAPACITY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    pub capacity: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl TableConfig {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Reads the capacity from `BUCKET_TABLE_CAPACITY`, falling back to the
    /// default when the variable is unset.
    pub fn from_env() -> Result<Self, TableError> {
        match env::var(CAPACITY_ENV) {
            Ok(raw) => Self::parse_capacity(&raw),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => Err(TableError::InvalidConfig(format!(
                "{} is not valid unicode",
                CAPACITY_ENV
            ))),
        }
    }

    fn parse_capacity(raw: &str) -> Result<Self, TableError> {
        let capacity = raw.trim().parse::<usize>().map_err(|e| {
            TableError::InvalidConfig(format!("{}={:?}: {}", CAPACITY_ENV, raw, e))
        })?;
        let config = Self { capacity };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TableError> {
        if self.capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }
        Ok(())
    }

    pub fn build<K: Hash + Eq, V>(&self) -> Result<Table<K, V>, TableError> {
        Table::try_with_capacity(self.capacity)
    }
}
