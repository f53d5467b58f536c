use thiserror::Error;

/// Error taxonomy for upstream and internal failures.
///
/// Every variant maps to exactly one HTTP status and one stable error code
/// string so the API layer can format a uniform envelope without inspecting
/// messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    RateLimited(String),

    /// 5xx from the upstream API, re-emitted with the same status.
    #[error("upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("upstream API is unreachable: {0}")]
    Unreachable(String),

    #[error("upstream request timed out: {0}")]
    Timeout(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Internal(String),
}

impl DomainError {
    /// HTTP status this error surfaces as at the API boundary.
    pub fn status(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Unauthorized(_) => 401,
            Self::Forbidden(_) => 403,
            Self::NotFound(_) => 404,
            Self::Conflict(_) => 409,
            Self::RateLimited(_) => 429,
            Self::Upstream { status, .. } => *status,
            Self::Unreachable(_) => 503,
            Self::Timeout(_) => 504,
            Self::Config(_) | Self::Internal(_) => 500,
        }
    }

    /// Stable machine-readable code for the response envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::RateLimited(_) => "RATE_LIMIT_EXCEEDED",
            Self::Upstream { .. } => "UPSTREAM_ERROR",
            Self::Unreachable(_) => "UPSTREAM_UNREACHABLE",
            Self::Timeout(_) => "GATEWAY_TIMEOUT",
            Self::Config(_) | Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Operational errors are expected and safe to expose verbatim.
    /// Internal/config failures get a generic message in production.
    pub fn is_operational(&self) -> bool {
        !matches!(self, Self::Config(_) | Self::Internal(_))
    }

    /// Classify an upstream HTTP status into the taxonomy.
    pub fn from_upstream_status(status: u16, message: String) -> Self {
        match status {
            400 => Self::Validation(message),
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            409 => Self::Conflict(message),
            429 => Self::RateLimited(message),
            500 | 502 | 503 | 504 => Self::Upstream { status, message },
            _ => Self::Internal(message),
        }
    }
}
