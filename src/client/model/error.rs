use crate::model::api::Sentinel;

#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
    /// The API answered with one of its failure sentinels.
    Sentinel(Sentinel),
    /// The request could not be sent or the response could not be read.
    Transport(String),
    Decode(String),
}

impl ApiError {
    pub fn sentinel(&self) -> Option<Sentinel> {
        match self {
            ApiError::Sentinel(sentinel) => Some(*sentinel),
            _ => None,
        }
    }

    /// Text shown to the user.
    pub fn message(&self) -> String {
        match self {
            ApiError::Sentinel(sentinel) => sentinel.message().to_string(),
            ApiError::Transport(message) | ApiError::Decode(message) => message.clone(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Sentinel(sentinel) => write!(f, "{}", sentinel),
            ApiError::Transport(message) | ApiError::Decode(message) => write!(f, "{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_errors_show_friendly_text() {
        let err = ApiError::Sentinel(Sentinel::NoPermissions);

        assert_eq!(err.to_string(), "err-no-permissions");
        assert_eq!(err.message(), Sentinel::NoPermissions.message());
        assert_eq!(err.sentinel(), Some(Sentinel::NoPermissions));
    }
}
