//! Email Scan Popup - Controller
//!
//! One click = one scan: check the selection, upload the file, decode the
//! reply and write exactly one final state into the result area. Every
//! failure ends here; nothing propagates to the host.

use super::render::RenderState;
use crate::shared::config::PopupConfig;
use async_trait::async_trait;
use contracts::domain::a001_email_scan::{ScanError, ScanOutcome};
use uuid::Uuid;

/// Ответ сервера до разбора тела
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network step: one multipart POST with a single `file` part
#[async_trait(?Send)]
pub trait PredictionTransport {
    type File: 'static;

    fn file_name(&self, file: &Self::File) -> String;

    async fn post_file(&self, endpoint: &str, file: Self::File) -> Result<HttpReply, ScanError>;
}

/// Display region the controller fully owns
pub trait ResultView {
    fn show(&self, state: RenderState);
}

#[derive(Debug, Clone)]
pub struct PopupController<T> {
    config: PopupConfig,
    transport: T,
}

impl<T: PredictionTransport> PopupController<T> {
    pub fn new(config: PopupConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &PopupConfig {
        &self.config
    }

    /// Run one scan. Overlapping calls are not coordinated: whichever
    /// finishes last owns the result area.
    pub async fn scan(&self, selection: Option<T::File>, view: &impl ResultView) {
        let Some(file) = selection else {
            view.show(RenderState::NoSelection);
            return;
        };

        let scan_id = Uuid::new_v4();
        view.show(RenderState::Scanning);
        log::info!(
            "scan {}: POST {} to {}",
            scan_id,
            self.transport.file_name(&file),
            self.config.endpoint()
        );

        let state = match self.submit(file).await {
            Ok(ScanOutcome::Success(prediction)) => {
                log::info!(
                    "scan {}: {} (confidence {}, {} reasons)",
                    scan_id,
                    prediction.prediction,
                    prediction.confidence,
                    prediction.reasons.len()
                );
                RenderState::Verdict(prediction)
            }
            Ok(ScanOutcome::Failure { error, trace }) => {
                log::warn!(
                    "scan {}: rejected: {}",
                    scan_id,
                    error.as_deref().unwrap_or("<no error field>")
                );
                if let Some(trace) = trace {
                    log::debug!("scan {}: server trace:\n{}", scan_id, trace);
                }
                RenderState::Rejected { error }
            }
            Err(e) => {
                log::warn!("scan {}: {}", scan_id, e);
                RenderState::Unreachable
            }
        };

        view.show(state);
    }

    async fn submit(&self, file: T::File) -> Result<ScanOutcome, ScanError> {
        let reply = self
            .transport
            .post_file(self.config.endpoint(), file)
            .await?;
        ScanOutcome::decode(reply.ok(), &reply.body)
    }
}
