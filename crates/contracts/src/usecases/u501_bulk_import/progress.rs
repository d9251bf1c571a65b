use serde::{Deserialize, Serialize};

use super::events::{ImportEvent, ImportedItem, RemainingUrl};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportPhase {
    /// No file submitted yet
    #[default]
    Idle,
    /// Request sent, waiting for `start`
    Uploading,
    Running,
    /// The site blocked scraping; the run ends early
    Blocked,
    Completed,
    Failed,
}

impl ImportPhase {
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Blocked | Self::Completed | Self::Failed)
    }

    pub fn is_busy(self) -> bool {
        matches!(self, Self::Uploading | Self::Running)
    }
}

/// Progress of one import run, folded from the event stream
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImportProgressState {
    pub phase: ImportPhase,
    pub total: u32,
    pub current: u32,
    pub success: u32,
    pub failed: u32,
    /// 0..=100
    pub percent: f64,
    /// Per-row error messages in arrival order
    pub errors: Vec<String>,
    pub imported: Vec<ImportedItem>,
    pub blocked_message: Option<String>,
    pub remaining_urls: Vec<RemainingUrl>,
    /// Message of a fatal `error` event or of a transport failure
    pub fatal: Option<String>,
}

impl ImportProgressState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for a new run
    pub fn begin_upload(&mut self) {
        *self = Self {
            phase: ImportPhase::Uploading,
            ..Self::default()
        };
    }

    pub fn apply(&mut self, event: ImportEvent) {
        match event {
            ImportEvent::Start { total } => {
                self.phase = ImportPhase::Running;
                self.total = total;
            }
            ImportEvent::Progress {
                current,
                total,
                success,
                failed,
                progress,
                item,
            } => {
                self.total = total;
                self.success = success;
                self.failed = failed;
                self.current = current.unwrap_or(success + failed);
                self.percent = progress;
                if let Some(item) = item {
                    self.imported.push(item);
                }
            }
            ImportEvent::ErrorItem {
                message,
                current,
                total,
                success,
                failed,
                progress,
                ..
            } => {
                self.errors.push(message);
                if let Some(total) = total {
                    self.total = total;
                }
                if let Some(success) = success {
                    self.success = success;
                }
                self.failed = failed.unwrap_or(self.failed + 1);
                self.current = current.unwrap_or(self.success + self.failed);
                if let Some(progress) = progress {
                    self.percent = progress;
                }
            }
            ImportEvent::Blocked {
                message,
                total,
                success,
                failed,
                remaining_urls,
                ..
            } => {
                self.phase = ImportPhase::Blocked;
                self.total = total;
                self.success = success;
                self.failed = failed;
                self.blocked_message = Some(message);
                self.remaining_urls = remaining_urls;
            }
            ImportEvent::Complete {
                total,
                success,
                failed,
            } => {
                self.total = total;
                self.success = success;
                self.failed = failed;
                // a block already ended the run; keep its remaining rows visible
                if self.phase != ImportPhase::Blocked {
                    self.phase = ImportPhase::Completed;
                    self.current = success + failed;
                    self.percent = 100.0;
                }
            }
            ImportEvent::Error { message } => self.fail(message),
        }
    }

    /// Transport or HTTP failure outside the event stream
    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = ImportPhase::Failed;
        self.fatal = Some(message.into());
    }

    /// Stream ended without a terminal event
    pub fn finish_stream(&mut self) {
        if self.phase.is_busy() {
            self.fail("The import stream ended unexpectedly");
        }
    }

    pub fn percent_rounded(&self) -> u32 {
        self.percent.clamp(0.0, 100.0).round() as u32
    }

    /// Close the dialog on its own only after a clean run. Unlike closing on
    /// any success, a run with failed rows stays open so its errors can be read.
    pub fn should_auto_close(&self) -> bool {
        self.phase == ImportPhase::Completed && self.failed == 0 && self.errors.is_empty()
    }

    /// Something was created, so the item list needs a refetch
    pub fn has_changes(&self) -> bool {
        self.success > 0
    }

    /// Rows left unprocessed by a block, as a one-column `url` CSV that can
    /// be imported again
    pub fn remaining_csv(&self) -> Result<String, csv::Error> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        writer.write_record(["url"])?;
        for remaining in &self.remaining_urls {
            writer.write_record([remaining.url.as_str()])?;
        }
        let bytes = writer.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(current: u32, success: u32, failed: u32, pct: f64) -> ImportEvent {
        ImportEvent::Progress {
            current: Some(current),
            total: 4,
            success,
            failed,
            progress: pct,
            item: None,
        }
    }

    #[test]
    fn test_clean_run() {
        let mut state = ImportProgressState::new();
        state.begin_upload();
        assert!(state.phase.is_busy());
        state.apply(ImportEvent::Start { total: 4 });
        for n in 1..=4 {
            state.apply(progress(n, n, 0, n as f64 * 25.0));
        }
        state.apply(ImportEvent::Complete { total: 4, success: 4, failed: 0 });
        assert_eq!(state.phase, ImportPhase::Completed);
        assert_eq!(state.percent_rounded(), 100);
        assert!(state.should_auto_close());
        assert!(state.has_changes());
    }

    #[test]
    fn test_successful_rows_with_failures_do_not_auto_close() {
        let mut state = ImportProgressState::new();
        state.begin_upload();
        state.apply(ImportEvent::Start { total: 3 });
        state.apply(ImportEvent::Complete { total: 3, success: 2, failed: 1 });
        assert_eq!(state.phase, ImportPhase::Completed);
        assert!(state.has_changes());
        assert!(!state.should_auto_close());
    }

    #[test]
    fn test_row_errors_accumulate() {
        let mut state = ImportProgressState::new();
        state.apply(ImportEvent::Start { total: 4 });
        state.apply(progress(1, 1, 0, 25.0));
        state.apply(ImportEvent::ErrorItem {
            index: Some(2),
            message: "row 2: 404".into(),
            current: Some(2),
            total: Some(4),
            success: Some(1),
            failed: Some(1),
            progress: Some(50.0),
        });
        state.apply(ImportEvent::ErrorItem {
            index: None,
            message: "row 3: bad isbn".into(),
            current: None,
            total: None,
            success: None,
            failed: None,
            progress: None,
        });
        assert_eq!(state.errors, vec!["row 2: 404", "row 3: bad isbn"]);
        assert_eq!(state.failed, 2);
        assert_eq!(state.current, 3);
        assert_eq!(state.percent_rounded(), 50);
        state.apply(ImportEvent::Complete { total: 4, success: 2, failed: 2 });
        assert_eq!(state.phase, ImportPhase::Completed);
        assert!(!state.should_auto_close());
    }

    #[test]
    fn test_blocked_keeps_remaining_rows() {
        let mut state = ImportProgressState::new();
        state.apply(ImportEvent::Start { total: 3 });
        state.apply(progress(1, 1, 0, 33.33));
        state.apply(ImportEvent::Blocked {
            index: 2,
            message: "blocked at row 2".into(),
            total: 3,
            success: 1,
            failed: 0,
            remaining_urls: vec![
                RemainingUrl { row: 2, url: "https://a".into() },
                RemainingUrl { row: 3, url: "https://b".into() },
            ],
        });
        state.apply(ImportEvent::Complete { total: 3, success: 1, failed: 0 });
        assert_eq!(state.phase, ImportPhase::Blocked);
        assert!(state.phase.is_finished());
        assert_eq!(state.remaining_urls.len(), 2);
        assert_eq!(state.percent_rounded(), 33);
        assert!(!state.should_auto_close());
        assert_eq!(state.remaining_csv().unwrap(), "url\nhttps://a\nhttps://b\n");
    }

    #[test]
    fn test_remaining_csv_quotes_commas() {
        let mut state = ImportProgressState::new();
        state.remaining_urls = vec![RemainingUrl { row: 4, url: "https://x/?a=1,2".into() }];
        assert_eq!(state.remaining_csv().unwrap(), "url\n\"https://x/?a=1,2\"\n");

        state.remaining_urls = vec![RemainingUrl { row: 5, url: "https://y/\"q\"".into() }];
        assert_eq!(state.remaining_csv().unwrap(), "url\n\"https://y/\"\"q\"\"\"\n");
    }

    #[test]
    fn test_fatal_error_and_truncated_stream() {
        let mut state = ImportProgressState::new();
        state.begin_upload();
        state.apply(ImportEvent::Error { message: "CSV files only".into() });
        assert_eq!(state.phase, ImportPhase::Failed);
        assert_eq!(state.fatal.as_deref(), Some("CSV files only"));

        let mut state = ImportProgressState::new();
        state.begin_upload();
        state.apply(ImportEvent::Start { total: 2 });
        state.finish_stream();
        assert_eq!(state.phase, ImportPhase::Failed);
    }

    #[test]
    fn test_begin_upload_resets_previous_run() {
        let mut state = ImportProgressState::new();
        state.apply(ImportEvent::Start { total: 2 });
        state.errors.push("old".into());
        state.begin_upload();
        assert_eq!(state.total, 0);
        assert!(state.errors.is_empty());
        assert_eq!(state.phase, ImportPhase::Uploading);
    }
}
