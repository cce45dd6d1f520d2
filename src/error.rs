use thiserror::Error;

pub const MISSING_RESUME_NOTICE: &str = "Please upload a PDF resume.";
pub const MISSING_JOB_DESCRIPTION_NOTICE: &str = "Please paste a job description.";
pub const MATCH_FAILED_NOTICE: &str =
    "There was an error matching your resume to the custom job description.";

/// Local input checks, reported before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no resume selected")]
    MissingResume,

    #[error("job description is empty")]
    MissingJobDescription,
}

impl ValidationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingResume => MISSING_RESUME_NOTICE,
            ValidationError::MissingJobDescription => MISSING_JOB_DESCRIPTION_NOTICE,
        }
    }
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("service returned status {status}: {message}")]
    Service { status: u16, message: String },

    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("worker runtime failed to start: {0}")]
    Runtime(String),
}

impl RequestError {
    /// Every remote failure collapses to the same notice.
    pub fn user_message(&self) -> &'static str {
        MATCH_FAILED_NOTICE
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("a match request is already in flight")]
    InFlight,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_are_distinct() {
        assert_eq!(
            ValidationError::MissingResume.user_message(),
            "Please upload a PDF resume."
        );
        assert_eq!(
            ValidationError::MissingJobDescription.user_message(),
            "Please paste a job description."
        );
    }

    #[test]
    fn test_request_errors_share_one_notice() {
        let service = RequestError::Service {
            status: 500,
            message: "boom".to_string(),
        };
        let runtime = RequestError::Runtime("no threads".to_string());
        let malformed = RequestError::from(serde_json::from_str::<u8>("x").unwrap_err());

        assert_eq!(service.user_message(), MATCH_FAILED_NOTICE);
        assert_eq!(runtime.user_message(), MATCH_FAILED_NOTICE);
        assert_eq!(malformed.user_message(), MATCH_FAILED_NOTICE);
        assert_eq!(
            service.to_string(),
            "service returned status 500: boom"
        );
    }
}
