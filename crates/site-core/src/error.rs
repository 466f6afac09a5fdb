use std::fmt;

/// Which cursor marker a lookup or style write refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerRole {
    Ring,
    Dot,
}

impl fmt::Display for MarkerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ring => f.write_str("cursor ring"),
            Self::Dot => f.write_str("cursor dot"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SiteError {
    /// A marker or page element could not be found or created. Never fatal:
    /// the dependent behaviour turns into a no-op.
    #[error("missing target element: {0}")]
    MissingTargetElement(String),

    #[error("invalid config value for `{key}`: {reason}")]
    InvalidConfig { key: String, reason: String },
}

impl SiteError {
    pub fn missing_marker(role: MarkerRole) -> Self {
        Self::MissingTargetElement(role.to_string())
    }

    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingTargetElement(selector.into())
    }

    pub(crate) fn invalid(key: &str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

pub type SiteResult<T> = Result<T, SiteError>;
