use crate::artifact::ConvertedArtifact;
use crate::candidate::CandidateFile;
use crate::config::AppConfig;
use crate::convert::{ConvertClient, ConvertStatus};
use crate::state::Session;
use anyhow::Context;
use std::path::PathBuf;
use std::sync::mpsc;

pub struct ConverterApp {
    pub session: Session,
    pub is_dragging: bool,
    pub config: AppConfig,
    client: ConvertClient,
    runtime: tokio::runtime::Runtime,
    status_receiver: Option<mpsc::Receiver<ConvertStatus>>,
}

impl ConverterApp {
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::load();

        let client = ConvertClient::new(config.endpoint.clone(), config.request_timeout_secs)
            .context("Failed to create HTTP client")?;
        let runtime = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;

        Ok(Self {
            session: Session::new(),
            is_dragging: false,
            config,
            client,
            runtime,
            status_receiver: None,
        })
    }

    /// Click-to-browse intake channel.
    pub fn browse(&mut self) {
        let mut dialog = rfd::FileDialog::new().add_filter("PDF", &["pdf"]);

        if let Some(ref dir) = self.config.last_input_dir {
            dialog = dialog.set_directory(dir);
        }

        if let Some(path) = dialog.pick_file() {
            self.config.update_last_input_dir(&path);
            self.offer_path(path);
        }
    }

    /// Drag-and-drop intake channel. Takes the first dropped file and
    /// ignores the rest; an empty payload is a no-op.
    pub fn handle_dropped(&mut self, files: &[egui::DroppedFile]) {
        if files.len() > 1 {
            tracing::debug!(count = files.len(), "multiple files dropped, taking the first");
        }

        let path = files.iter().find_map(|f| f.path.clone());
        match path {
            Some(path) => self.offer_path(path),
            None => self.session.offer(None),
        }
    }

    fn offer_path(&mut self, path: PathBuf) {
        self.session.offer(Some(CandidateFile::from_path(path)));
    }

    /// Explicit user submission. A no-op unless a candidate is ready and
    /// no request is in flight.
    pub fn start_conversion(&mut self) {
        if let Some(candidate) = self.session.begin_conversion() {
            let rx = self.client.execute(self.runtime.handle(), candidate);
            self.status_receiver = Some(rx);
        }
    }

    /// Drain the status channel; called once per frame.
    pub fn update_status(&mut self) {
        let mut should_clear_receiver = false;
        let mut outcome = None;

        if let Some(rx) = &self.status_receiver {
            while let Ok(status) = rx.try_recv() {
                match status {
                    ConvertStatus::Started => {}
                    ConvertStatus::Completed(bytes) => {
                        should_clear_receiver = true;
                        outcome = Some(Ok(bytes));
                    }
                    ConvertStatus::Failed(notice) => {
                        should_clear_receiver = true;
                        outcome = Some(Err(notice));
                    }
                }
            }
        }

        if should_clear_receiver {
            self.status_receiver = None;
        }

        match outcome {
            Some(Ok(bytes)) => self.session.complete_conversion(ConvertedArtifact::new(bytes)),
            Some(Err(_)) => self.session.fail_conversion(),
            None => {}
        }
    }

    /// Download action: save the current artifact under the suggested
    /// name. A failed write is logged and the artifact kept so the save
    /// can be retried.
    pub fn download(&mut self) {
        let Some(artifact) = self.session.artifact() else {
            return;
        };

        let mut dialog = rfd::FileDialog::new()
            .set_file_name(artifact.suggested_filename())
            .add_filter("PowerPoint", &["pptx"]);

        if let Some(ref dir) = self.config.last_save_dir {
            dialog = dialog.set_directory(dir);
        }

        if let Some(path) = dialog.save_file() {
            match artifact.save_to(&path) {
                Ok(()) => {
                    tracing::info!(path = %path.display(), "converted file saved");
                    self.config.update_last_save_dir(&path);
                }
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "failed to save converted file");
                }
            }
        }
    }

    pub fn clear(&mut self) {
        // No cancellation of an in-flight request; the UI disables this
        // action while converting.
        self.session.reset();
        self.status_receiver = None;
        self.is_dragging = false;
    }
}
