//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the service-loader generation pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// Failure while enumerating or reading registry resources
    #[error("Scan error: {message}")]
    Scan {
        /// Description of the scan failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A contract or implementation name did not resolve to a usable type
    #[error("Resolution error for '{name}': {message}")]
    Resolution {
        /// The identifier that failed to resolve
        name: String,
        /// Description of the resolution failure
        message: String,
    },

    /// The file-emission facility rejected or failed to persist an artifact
    #[error("Emission error for '{artifact}': {message}")]
    Emission {
        /// Qualified name of the artifact that failed
        artifact: String,
        /// Description of the emission failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a scan error
    pub fn scan<S: Into<String>>(message: S) -> Self {
        Self::Scan {
            message: message.into(),
            source: None,
        }
    }

    /// Create a scan error with source
    pub fn scan_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Scan {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a resolution error
    pub fn resolution<N: Into<String>, S: Into<String>>(name: N, message: S) -> Self {
        Self::Resolution {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an emission error
    pub fn emission<A: Into<String>, S: Into<String>>(artifact: A, message: S) -> Self {
        Self::Emission {
            artifact: artifact.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create an emission error with source
    pub fn emission_with_source<
        A: Into<String>,
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        artifact: A,
        message: S,
        source: E,
    ) -> Self {
        Self::Emission {
            artifact: artifact.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
