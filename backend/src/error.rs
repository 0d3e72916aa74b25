//! Error types for the field-of-view pipeline.
//!
//! Every stage returns [`FovResult`]; nothing is recovered locally, errors are
//! propagated to whoever drives the pipeline and reported there.

/// Result type for pipeline operations
pub type FovResult<T> = Result<T, FovError>;

/// Error type for catalog loading, selection, ranking and export.
#[derive(Debug, thiserror::Error)]
pub enum FovError {
    /// A requested column name is absent from the header row.
    #[error("Column not found: '{column}' is not present in the table header")]
    ColumnNotFound { column: String },

    /// A data row holds an empty or non-numeric value in a requested column.
    #[error(
        "Malformed row {row}: column '{column}' has an empty or invalid value '{value}'. \
         Please check the dataset and the row - {row}"
    )]
    MalformedRow {
        row: usize,
        column: String,
        value: String,
    },

    /// The computed window extends past a celestial pole.
    #[error("Invalid field of view: {message}")]
    InvalidFov { message: String },

    /// No star fell inside the field of view.
    #[error("There are no stars in this fov, please try again")]
    EmptyFov,

    /// The same column was requested twice, or annotated twice.
    #[error("Duplicate column: '{column}' is already part of the record layout")]
    DuplicateColumn { column: String },

    /// The table does not contain a header row at index 1.
    #[error("Missing header: the table needs a header row after the first line")]
    MissingHeader,

    /// Unparsable user or configuration input.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl FovError {
    /// Create a column-not-found error.
    pub fn column_not_found(column: impl Into<String>) -> Self {
        Self::ColumnNotFound {
            column: column.into(),
        }
    }

    /// Create a malformed-row error for a 1-based data row number.
    pub fn malformed_row(row: usize, column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::MalformedRow {
            row,
            column: column.into(),
            value: value.into(),
        }
    }

    /// Create an invalid-FOV error.
    pub fn invalid_fov(message: impl Into<String>) -> Self {
        Self::InvalidFov {
            message: message.into(),
        }
    }

    /// Create a duplicate-column error.
    pub fn duplicate_column(column: impl Into<String>) -> Self {
        Self::DuplicateColumn {
            column: column.into(),
        }
    }

    /// Create an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Stable error code for programmatic handling.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ColumnNotFound { .. } => "COLUMN_NOT_FOUND",
            Self::MalformedRow { .. } => "MALFORMED_ROW",
            Self::InvalidFov { .. } => "INVALID_FOV",
            Self::EmptyFov => "EMPTY_FOV",
            Self::DuplicateColumn { .. } => "DUPLICATE_COLUMN",
            Self::MissingHeader => "MISSING_HEADER",
            Self::InvalidInput { .. } => "INVALID_INPUT",
            Self::Config { .. } => "CONFIG_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Csv(_) => "CSV_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_row_message_names_row() {
        let err = FovError::malformed_row(7, "b", "");
        let msg = err.to_string();
        assert!(msg.contains("row 7"));
        assert!(msg.contains("'b'"));
        assert_eq!(err.kind(), "MALFORMED_ROW");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(FovError::column_not_found("x").kind(), "COLUMN_NOT_FOUND");
        assert_eq!(FovError::invalid_fov("too high").kind(), "INVALID_FOV");
        assert_eq!(FovError::EmptyFov.kind(), "EMPTY_FOV");
        assert_eq!(FovError::MissingHeader.kind(), "MISSING_HEADER");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: FovError = io.into();
        assert_eq!(err.kind(), "IO_ERROR");
    }
}
