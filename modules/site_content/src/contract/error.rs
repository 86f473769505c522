//! Contract error types for the site content module
//!
//! These errors are transport-agnostic. Query operations never hand them to
//! callers of [`SiteContentApi`](super::SiteContentApi); they are reported and
//! replaced by fallback values. Configuration errors are surfaced directly.

/// Site content errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    /// A required configuration value is absent or empty
    #[error("missing required configuration value: {name}")]
    MissingConfig {
        /// Configuration key
        name: String,
    },
    /// A configuration value could not be used
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Error details
        message: String,
    },
    /// The backend could not be reached
    #[error("transport error: {message}")]
    Transport {
        /// Error details
        message: String,
    },
    /// The backend answered with a non-success status
    #[error("backend returned {status}: {message}")]
    Backend {
        /// HTTP status code
        status: u16,
        /// Message reported by the backend
        message: String,
    },
    /// A single-record query matched zero or several rows
    #[error("expected exactly one {collection} row, found {rows}")]
    NotSingle {
        /// Collection that was queried
        collection: String,
        /// Number of rows returned
        rows: usize,
    },
    /// A row could not be decoded into its model
    #[error("failed to decode {collection} row: {message}")]
    Decode {
        /// Collection that was queried
        collection: String,
        /// Error details
        message: String,
    },
    /// A component was used before the module was initialized
    #[error("{component} accessed before SiteContentModule::init")]
    NotInitialized {
        /// Component name
        component: &'static str,
    },
}

impl ContentError {
    /// Whether this error belongs to the fatal configuration category
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::MissingConfig { .. } | Self::InvalidConfig { .. } | Self::NotInitialized { .. }
        )
    }
}
