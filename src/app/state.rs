use crate::error::RequestError;
use crate::matching::{MatchResult, ResumeFile};
use std::sync::mpsc::Receiver;

/// What the user has entered so far. Setters overwrite unconditionally;
/// checking happens in the validator.
#[derive(Debug, Default, Clone)]
pub struct UploadState {
    resume: Option<ResumeFile>,
    job_description: String,
}

impl UploadState {
    pub fn set_resume(&mut self, file: ResumeFile) {
        self.resume = Some(file);
    }

    pub fn set_job_description(&mut self, text: impl Into<String>) {
        self.job_description = text.into();
    }

    pub fn resume(&self) -> Option<&ResumeFile> {
        self.resume.as_ref()
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    /// Text edits go straight into the buffer every frame.
    pub fn job_description_mut(&mut self) -> &mut String {
        &mut self.job_description
    }

    pub fn clear(&mut self) {
        *self = UploadState::default();
    }
}

/// Either empty or exactly one complete result. Never merged.
#[derive(Debug, Default, Clone)]
pub struct ResultState {
    current: Option<MatchResult>,
}

impl ResultState {
    pub fn set(&mut self, result: MatchResult) {
        self.current = Some(result);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn get(&self) -> Option<&MatchResult> {
        self.current.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

pub struct Completion {
    pub token: u64,
    pub outcome: Result<MatchResult, RequestError>,
}

/// The one outstanding request, if any.
pub struct PendingMatch {
    pub token: u64,
    pub receiver: Receiver<Completion>,
}

/// A user-acknowledged message. Stays up until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result(score: f64) -> MatchResult {
        MatchResult {
            match_score: score,
            matched_keywords: vec!["python".to_string()],
            suggested_keywords: vec![],
        }
    }

    #[test]
    fn test_upload_state_overwrites() {
        let mut state = UploadState::default();
        state.set_resume(ResumeFile::new("a.pdf", vec![1]));
        state.set_resume(ResumeFile::new("b.pdf", vec![2, 3]));
        state.set_job_description("first");
        state.set_job_description("second");

        let resume = state.resume().unwrap();
        assert_eq!(resume.file_name, "b.pdf");
        assert_eq!(resume.bytes, vec![2, 3]);
        assert_eq!(state.job_description(), "second");
    }

    #[test]
    fn test_upload_state_clear() {
        let mut state = UploadState::default();
        state.set_resume(ResumeFile::new("a.pdf", vec![1]));
        state.set_job_description("text");
        state.clear();

        assert!(state.resume().is_none());
        assert_eq!(state.job_description(), "");
    }

    #[test]
    fn test_result_state_replaces_and_clears() {
        let mut state = ResultState::default();
        assert!(state.is_empty());

        state.set(sample_result(0.1));
        state.set(sample_result(0.9));
        assert_eq!(state.get().unwrap().match_score, 0.9);

        state.clear();
        assert!(state.get().is_none());
    }
}
