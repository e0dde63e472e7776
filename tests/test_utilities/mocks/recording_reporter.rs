use std::sync::Mutex;

use bom_catalog::prelude::ProgressReporter;

/// ProgressReporter that records every message for later assertions.
#[derive(Default)]
pub struct RecordingProgressReporter {
    reports: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl ProgressReporter for RecordingProgressReporter {
    fn report(&self, message: &str) {
        self.reports.lock().unwrap().push(message.to_string());
    }

    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    fn report_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.reports.lock().unwrap().push(message.to_string());
    }
}
