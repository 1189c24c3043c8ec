use std::env;
use std::error::Error as StdError;
use std::fmt::{self, Display};

/// The environment variable holding the service base URL.
pub const BASE_URL_ENV: &str = "CHATPAD_API_URL";

/// Error returned when the configuration cannot be assembled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL variable is unset or blank.
    MissingBaseUrl {
        /// Name of the variable that was looked up.
        var: &'static str,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingBaseUrl { var } => {
                write!(f, "{var} environment variable is not set")
            }
        }
    }
}

impl StdError for ConfigError {}

/// Builder for [`RemoteConfig`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RemoteConfigBuilder {
    base_url: String,
}

impl RemoteConfigBuilder {
    /// Creates a builder with the given base URL.
    #[inline]
    pub fn with_base_url<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Builds the configuration. A trailing `/` is dropped so endpoint
    /// paths can be appended verbatim.
    pub fn build(self) -> RemoteConfig {
        RemoteConfig {
            base_url: self.base_url.trim().trim_end_matches('/').to_owned(),
        }
    }
}

/// Configuration for [`HttpChatBackend`](crate::HttpChatBackend).
///
/// There is a single knob, the base URL every endpoint is resolved
/// against. It is fixed for the lifetime of the backend.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RemoteConfig {
    pub(crate) base_url: String,
}

impl RemoteConfig {
    /// Creates a configuration with the given base URL.
    ///
    /// See [`RemoteConfigBuilder::build`].
    #[inline]
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        RemoteConfigBuilder::with_base_url(base_url).build()
    }

    /// Reads the base URL from [`BASE_URL_ENV`].
    #[inline]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the base URL through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        match lookup(BASE_URL_ENV) {
            Some(url) if !url.trim().is_empty() => {
                Ok(RemoteConfigBuilder::with_base_url(url).build())
            }
            _ => Err(ConfigError::MissingBaseUrl { var: BASE_URL_ENV }),
        }
    }

    /// Returns the base URL.
    #[inline]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
