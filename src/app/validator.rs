use super::state::UploadState;
use crate::error::ValidationError;

/// Checks run in order; the first failure wins.
pub fn validate(state: &UploadState) -> Result<(), ValidationError> {
    match state.resume() {
        Some(resume) if !resume.is_empty() => {}
        _ => return Err(ValidationError::MissingResume),
    }

    if state.job_description().trim().is_empty() {
        return Err(ValidationError::MissingJobDescription);
    }

    Ok(())
}

pub fn can_submit(state: &UploadState) -> bool {
    validate(state).is_ok()
}
