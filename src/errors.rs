use thiserror::Error;

/// Top-level application error. All variants carry a human-readable message
/// for display/logging; the acquisition pipeline and chat bridge decide per
/// variant whether to fall back, surface, or rephrase.
#[derive(Debug, Error)]
pub enum AppError {
    // ── Validation errors ────────────────────────────────────────────────────
    #[error("Field '{field_name}' cannot be empty")]
    EmptyField { field_name: String },

    // ── Backend errors ───────────────────────────────────────────────────────
    /// The backend could not be reached at all (connection refused, DNS
    /// failure, timeout, broken read).
    #[error("Could not reach the idea backend: {message}")]
    Transport { message: String },

    /// The backend answered with a non-success HTTP status.
    #[error("Idea backend returned status {status}")]
    BackendStatus { status: u16 },

    /// The backend answered successfully but the payload failed the shape
    /// contract. Deliberately distinct from [`AppError::Transport`]: a
    /// reachable backend that sends garbage is a defect to surface, not to
    /// paper over with placeholder content.
    #[error("Idea backend response was malformed: {reason}")]
    MalformedResponse { reason: String },

    // ── System errors ────────────────────────────────────────────────────────
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    pub fn transport(message: impl Into<String>) -> Self {
        AppError::Transport { message: message.into() }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        AppError::MalformedResponse { reason: reason.into() }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::EmptyField { .. })
    }

    /// True for failures the generation path recovers from by synthesizing
    /// placeholder ideas.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::Transport { .. } | AppError::BackendStatus { .. }
        )
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, AppError::MalformedResponse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_and_status_are_recoverable() {
        assert!(AppError::transport("connection refused").is_recoverable());
        assert!(AppError::BackendStatus { status: 503 }.is_recoverable());
    }

    #[test]
    fn malformed_response_is_not_recoverable() {
        let err = AppError::malformed("missing 'ideas'");
        assert!(!err.is_recoverable());
        assert!(err.is_malformed());
    }

    #[test]
    fn empty_field_is_validation_only() {
        let err = AppError::EmptyField { field_name: "description".to_string() };
        assert!(err.is_validation());
        assert!(!err.is_recoverable());
    }
}
