//! Error types for table construction and data loading.

/// Errors that can occur while building tables or loading table data.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A table was given no entries to roll on.
    #[error("table has no entries")]
    EmptyTable,

    /// A die was declared with zero sides.
    #[error("invalid die size: {0}")]
    InvalidDieSize(u32),

    /// A table was asked to roll zero dice.
    #[error("invalid die count: {0}")]
    InvalidDieCount(u32),

    /// A construction error attributed to a named table.
    #[error("table '{name}': {source}")]
    Table {
        /// Name of the table that failed to build.
        name: String,
        /// The underlying failure.
        #[source]
        source: Box<TableError>,
    },

    /// Table data could not be parsed or serialized.
    #[error("invalid table data: {0}")]
    Json(#[from] serde_json::Error),

    /// Dice notation was invalid.
    #[error(transparent)]
    Dice(#[from] cf_dice::DiceError),
}

impl TableError {
    /// Attribute this error to the named table.
    pub fn in_table(self, name: impl Into<String>) -> Self {
        Self::Table {
            name: name.into(),
            source: Box::new(self),
        }
    }
}

/// Convenience result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_table_prefixes_message() {
        let err = TableError::EmptyTable.in_table("races");
        assert_eq!(err.to_string(), "table 'races': table has no entries");
    }

    #[test]
    fn dice_errors_convert() {
        let err: TableError = cf_dice::DiceError::ZeroCount.into();
        assert_eq!(err.to_string(), "dice count must be at least 1");
    }
}
