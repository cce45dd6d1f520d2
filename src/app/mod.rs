mod render;
mod state;
mod ui;
mod validator;

use crate::error::{RequestError, SubmitError, MATCH_FAILED_NOTICE};
use crate::matching::{MatchService, ResumeFile};
use eframe::{egui, App};
pub use render::{render, DisplayModel};
pub use state::{Notice, ResultState, UploadState};
use state::{Completion, PendingMatch};
use std::path::Path;
use std::sync::mpsc::{self as std_mpsc, TryRecvError};
use std::sync::Arc;
use tracing::{debug, error, info, warn};
pub use validator::{can_submit, validate};

pub const UNREADABLE_FILE_NOTICE: &str = "Could not read the selected file.";

/// The match form. Owns everything the user can see; dropping it (or
/// calling [`ResumeMatcher::reset`]) abandons any outstanding request.
pub struct ResumeMatcher {
    upload: UploadState,
    result: ResultState,
    notice: Option<Notice>,
    pending: Option<PendingMatch>,
    next_token: u64,
    service: Arc<dyn MatchService>,
}

impl ResumeMatcher {
    pub fn new(service: Arc<dyn MatchService>) -> Self {
        info!("Initializing resume matcher");
        Self {
            upload: UploadState::default(),
            result: ResultState::default(),
            notice: None,
            pending: None,
            next_token: 1,
            service,
        }
    }

    pub fn upload(&self) -> &UploadState {
        &self.upload
    }

    pub fn upload_mut(&mut self) -> &mut UploadState {
        &mut self.upload
    }

    pub fn result(&self) -> &ResultState {
        &self.result
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn acknowledge_notice(&mut self) {
        self.notice = None;
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn select_resume(&mut self, path: &Path) {
        match ResumeFile::load(path) {
            Ok(file) => {
                info!("Selected resume '{}' ({} bytes)", file.file_name, file.len());
                self.upload.set_resume(file);
            }
            Err(e) => {
                error!("Failed to load resume: {:#}", e);
                self.notice = Some(Notice::new(UNREADABLE_FILE_NOTICE));
            }
        }
    }

    pub fn reset(&mut self) {
        info!("Resetting form state");
        if let Some(pending) = self.pending.take() {
            debug!("Abandoning in-flight request #{}", pending.token);
        }
        self.upload.clear();
        self.result.clear();
        self.notice = None;
    }

    /// Validates the form and dispatches one match request. Returns the
    /// token of the dispatched request.
    pub fn submit(&mut self) -> Result<u64, SubmitError> {
        if let Some(pending) = &self.pending {
            warn!("Ignoring submit while request #{} is in flight", pending.token);
            return Err(SubmitError::InFlight);
        }

        if let Err(e) = validate(&self.upload) {
            info!("Submission blocked: {}", e);
            self.notice = Some(Notice::new(e.user_message()));
            return Err(e.into());
        }

        let Some(resume) = self.upload.resume().cloned() else {
            return Err(crate::error::ValidationError::MissingResume.into());
        };
        let job_description = self.upload.job_description().to_string();

        let token = self.next_token;
        self.next_token += 1;

        let (sender, receiver) = std_mpsc::channel();
        let service = Arc::clone(&self.service);

        info!("Dispatching match request #{}", token);
        std::thread::spawn(move || {
            let outcome = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt.block_on(service.submit(&resume, &job_description)),
                Err(e) => Err(RequestError::Runtime(e.to_string())),
            };
            // The receiver is gone if the form was reset meanwhile.
            let _ = sender.send(Completion { token, outcome });
        });

        self.pending = Some(PendingMatch { token, receiver });
        Ok(token)
    }

    /// Applies a finished request, if there is one. Never blocks.
    pub fn poll_pending(&mut self) -> bool {
        let Some(pending) = &self.pending else {
            return false;
        };
        let expected = pending.token;

        match pending.receiver.try_recv() {
            Ok(completion) => {
                self.pending = None;
                if completion.token != expected {
                    warn!("Dropping stale result for request #{}", completion.token);
                    return true;
                }
                self.apply(completion);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                error!("Match request #{} ended without a result", expected);
                self.notice = Some(Notice::new(MATCH_FAILED_NOTICE));
                true
            }
        }
    }

    fn apply(&mut self, completion: Completion) {
        match completion.outcome {
            Ok(result) => {
                info!(
                    "Request #{} succeeded with score {:.3}",
                    completion.token, result.match_score
                );
                self.result.set(result);
            }
            Err(e) => {
                error!("Request #{} failed: {}", completion.token, e);
                self.notice = Some(Notice::new(e.user_message()));
            }
        }
    }
}

impl App for ResumeMatcher {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_pending();
        if self.is_submitting() {
            ctx.request_repaint();
        }
        self.render(ctx);
    }
}
