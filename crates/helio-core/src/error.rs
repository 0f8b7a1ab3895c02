//! Error types for page configuration and dataset loading.

use thiserror::Error;

/// Failure reported by a [`crate::data::Transport`] implementation.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent or the response could not be read.
    #[error("network request failed")]
    Network {
        /// Requested URL.
        url: String,
        /// Underlying client error.
        #[source]
        source: anyhow::Error,
    },
}

/// Response body did not match the shape expected for a dataset kind.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// Body was not valid JSON or did not deserialize into the expected structure.
    #[error("response body does not match the expected shape")]
    Malformed {
        /// Parser detail.
        #[source]
        source: serde_json::Error,
    },
    /// Collection parsed but contained no records.
    #[error("dataset is empty")]
    Empty {
        /// Field holding the empty collection.
        field: &'static str,
    },
    /// Parallel collections have different lengths.
    #[error("dataset columns have mismatched lengths")]
    LengthMismatch {
        /// Field whose length diverged.
        field: &'static str,
        /// Expected element count.
        expected: usize,
        /// Actual element count.
        actual: usize,
    },
    /// Numeric field was negative, NaN, or infinite.
    #[error("dataset contains an invalid number")]
    InvalidNumber {
        /// Field holding the offending value.
        field: &'static str,
    },
}

/// Why a remote dataset could not replace the bundled fallback.
#[derive(Debug, Error)]
pub enum DataSourceError {
    /// Transport failed before a response arrived.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// Server answered with a non-success status.
    #[error("unexpected HTTP status {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// Body failed validation.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Invalid embedding options.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Options payload was not valid JSON for [`crate::config::PageOptions`].
    #[error("invalid page options payload")]
    Parse {
        /// Parser detail.
        #[source]
        source: serde_json::Error,
    },
    /// Field contained an invalid value.
    #[error("invalid page option")]
    InvalidField {
        /// Name of the option.
        field: &'static str,
        /// Offending value when available.
        value: Option<String>,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience alias for dataset loading results.
pub type DataSourceResult<T> = Result<T, DataSourceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_reports_code() {
        let err = DataSourceError::Status {
            url: "/api/batteries".to_string(),
            status: 503,
        };
        assert_eq!(err.to_string(), "unexpected HTTP status 503");
    }

    #[test]
    fn shape_errors_convert_into_data_source_errors() {
        let err: DataSourceError = ShapeError::Empty { field: "labels" }.into();
        assert!(matches!(err, DataSourceError::Shape(ShapeError::Empty { field: "labels" })));
        assert_eq!(err.to_string(), "dataset is empty");
    }
}
