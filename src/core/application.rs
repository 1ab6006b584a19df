//! The top-level context: one form, one store, one status line.

use crate::config::Config;
use crate::errors::AppResult;
use crate::form::RecordForm;
use crate::store::{RecordStore, SaveOutcome};
use crate::utils::date;
use chrono::NaiveDate;

pub const APP_TITLE: &str = "ABQ Data Entry Application";

#[derive(Debug)]
pub struct Application {
    form: RecordForm,
    store: RecordStore,
    status: String,
    records_saved: usize,
}

impl Application {
    pub fn new(cfg: &Config) -> Self {
        Self::with_store(RecordStore::new(cfg.output_path(), cfg.file_prefix.clone()))
    }

    pub fn with_store(store: RecordStore) -> Self {
        Self {
            form: RecordForm::new(),
            store,
            status: String::new(),
            records_saved: 0,
        }
    }

    pub fn form(&self) -> &RecordForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RecordForm {
        &mut self.form
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Records saved since this context was created.
    pub fn records_saved(&self) -> usize {
        self.records_saved
    }

    /// Save the current record to today's file.
    pub fn on_save(&mut self) -> AppResult<SaveOutcome> {
        self.save_for(date::today())
    }

    /// Save the current record to the file of `day`, then clear the form.
    /// On failure the form keeps its content.
    pub fn save_for(&mut self, day: NaiveDate) -> AppResult<SaveOutcome> {
        let snapshot = self.form.get();
        let outcome = self.store.append(&snapshot, day)?;

        self.form.reset();
        self.records_saved += 1;

        let file_name = outcome
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        self.status = format!(
            "{} record(s) saved this session (last: {})",
            self.records_saved, file_name
        );

        Ok(outcome)
    }
}
