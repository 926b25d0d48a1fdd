use std::fmt;

/// Failure values returned by the dashboard API.
///
/// Every endpoint answers with HTTP 200; a failure is signalled by a bare string body
/// holding one of these literals instead of the JSON payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentinel {
    MissingParams,
    InvalidParams,
    SessionExpired,
    ServerNotFound,
    NoPermissions,
    RateLimit,
    SaveFailed,
    InternalError,
}

impl Sentinel {
    pub const ALL: [Sentinel; 8] = [
        Sentinel::MissingParams,
        Sentinel::InvalidParams,
        Sentinel::SessionExpired,
        Sentinel::ServerNotFound,
        Sentinel::NoPermissions,
        Sentinel::RateLimit,
        Sentinel::SaveFailed,
        Sentinel::InternalError,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentinel::MissingParams => "err-missing-params",
            Sentinel::InvalidParams => "err-invalid-params",
            Sentinel::SessionExpired => "err-session-expired",
            Sentinel::ServerNotFound => "err-server-not-found",
            Sentinel::NoPermissions => "err-no-permissions",
            Sentinel::RateLimit => "err-rate-limit",
            Sentinel::SaveFailed => "err-save-failed",
            Sentinel::InternalError => "err-internal-error",
        }
    }

    /// Recognizes a response body as a sentinel.
    ///
    /// Accepts the bare literal as well as the literal wrapped in JSON quotes.
    pub fn from_body(body: &str) -> Option<Self> {
        let body = body.trim();
        let body = body
            .strip_prefix('"')
            .and_then(|b| b.strip_suffix('"'))
            .unwrap_or(body);

        Self::ALL.into_iter().find(|s| s.as_str() == body)
    }

    /// Human readable text for display in the dashboard.
    pub fn message(&self) -> &'static str {
        match self {
            Sentinel::MissingParams => "The request was missing required parameters.",
            Sentinel::InvalidParams => "The request contained invalid parameters.",
            Sentinel::SessionExpired => "Your session has expired, please log in again.",
            Sentinel::ServerNotFound => "This server could not be found.",
            Sentinel::NoPermissions => "You do not have permission to manage this server.",
            Sentinel::RateLimit => "Too many requests, please slow down.",
            Sentinel::SaveFailed => "Your changes could not be saved.",
            Sentinel::InternalError => "Something went wrong, please try again later.",
        }
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
