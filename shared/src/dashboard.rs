//! Client-side state of the dashboard: the loaded dataset, the filtered view
//! derived from it, and the record modal.
//!
//! Everything here is synchronous. Network calls happen outside and report
//! back through `finish_load` / `finish_submit`.

use log::{debug, warn};

use crate::charts::{build_charts, ChartSpec};
use crate::config::DashboardConfig;
use crate::filter::{apply_filters, category_options};
use crate::form::{FormField, ModalState, RecordForm};
use crate::gateway::{GatewayError, WriteAction, WriteRequest};
use crate::record::{LoadedRecord, RecordId, SalesRecord};
use crate::table::{table_body, TableBody};

pub const DELETE_CONFIRM: &str =
    "Are you sure you want to delete this record? This action cannot be undone.";
pub const DELETE_UNSUPPORTED: &str =
    "Deleting records is not supported by the spreadsheet backend yet.";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Identifies one load request. Only the most recent ticket may update state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("No record form is open")]
    NotOpen,
    #[error("A save is already in progress")]
    InFlight,
    #[error("The record being edited is no longer loaded; refresh and try again")]
    RecordGone,
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    config: DashboardConfig,
    records: Vec<LoadedRecord>,
    visible: Vec<LoadedRecord>,
    search: String,
    category: String,
    status: LoadStatus,
    latest_load: u64,
    modal: ModalState,
    form: RecordForm,
    /// Set from `begin_submit` until the save and its reload are both done.
    submitting: Option<WriteAction>,
    awaiting_reload: bool,
    close_after_reload: bool,
    completed_save: Option<WriteAction>,
}

impl DashboardState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            records: Vec::new(),
            visible: Vec::new(),
            search: String::new(),
            category: String::new(),
            status: LoadStatus::Idle,
            latest_load: 0,
            modal: ModalState::Closed,
            form: RecordForm::default(),
            submitting: None,
            awaiting_reload: false,
            close_after_reload: false,
            completed_save: None,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// The full dataset, in server order.
    pub fn records(&self) -> &[LoadedRecord] {
        &self.records
    }

    /// Records passing the current search and category filters.
    pub fn visible(&self) -> &[LoadedRecord] {
        &self.visible
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn form(&self) -> &RecordForm {
        &self.form
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_some()
    }

    /// Inline error banner text after a failed load.
    pub fn banner(&self) -> Option<String> {
        match &self.status {
            LoadStatus::Failed(message) => Some(format!("❌ {}", message)),
            _ => None,
        }
    }

    pub fn table(&self) -> TableBody {
        table_body(&self.visible)
    }

    pub fn charts(&self) -> Vec<ChartSpec> {
        build_charts(&self.visible, &self.config)
    }

    pub fn category_options(&self) -> Vec<String> {
        category_options(&self.records)
    }

    pub fn record(&self, id: RecordId) -> Option<&LoadedRecord> {
        self.records.iter().find(|loaded| loaded.id == id)
    }

    /// Starts a load. Any load started earlier becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_load += 1;
        self.status = LoadStatus::Loading;
        debug!("load #{} started", self.latest_load);
        LoadTicket(self.latest_load)
    }

    /// Applies a read result. Returns false when `ticket` is stale and the
    /// result was dropped.
    ///
    /// On success the dataset is replaced, every record gets a fresh id, and
    /// the current filters are re-applied. On failure the previous dataset
    /// stays in place and the error is kept for the banner. Either way a save
    /// waiting for this reload is completed and its modal closed.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<SalesRecord>, GatewayError>,
    ) -> bool {
        if ticket.0 != self.latest_load {
            warn!(
                "dropping response of load #{}, load #{} is newer",
                ticket.0, self.latest_load
            );
            return false;
        }

        match result {
            Ok(records) => {
                debug!("load #{} returned {} records", ticket.0, records.len());
                self.records = LoadedRecord::from_response(records);
                self.status = LoadStatus::Ready;
                self.refilter();
            }
            Err(err) => {
                warn!("load #{} failed: {}", ticket.0, err);
                self.status = LoadStatus::Failed(err.to_string());
            }
        }
        self.settle_save();
        true
    }

    fn settle_save(&mut self) {
        if !self.awaiting_reload {
            return;
        }
        self.awaiting_reload = false;
        self.completed_save = self.submitting.take();
        if std::mem::take(&mut self.close_after_reload) {
            self.close_modal();
        }
    }

    /// The save completed by the last applied load, if any. Cleared on read.
    pub fn take_completed_save(&mut self) -> Option<WriteAction> {
        self.completed_save.take()
    }

    pub fn set_search(&mut self, term: String) {
        self.search = term;
        self.refilter();
    }

    pub fn set_category(&mut self, category: String) {
        self.category = category;
        self.refilter();
    }

    fn refilter(&mut self) {
        self.visible = apply_filters(&self.records, &self.search, Some(&self.category));
    }

    /// Opens the modal with an empty form.
    pub fn open_add(&mut self) {
        self.close_after_reload = false;
        self.form = RecordForm::default();
        self.modal = ModalState::Add;
    }

    /// Opens the modal prefilled from record `id`. Returns false if no such
    /// record is loaded.
    pub fn open_edit(&mut self, id: RecordId) -> bool {
        let Some(loaded) = self.record(id) else {
            return false;
        };
        self.form = RecordForm::from_record(&loaded.record);
        self.modal = ModalState::Edit(id);
        self.close_after_reload = false;
        true
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
        self.form = RecordForm::default();
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        self.form.set(field, value);
    }

    /// Builds the write request for the open form and marks a submit as in
    /// flight. Only one submit may be in flight at a time.
    pub fn begin_submit(&mut self) -> Result<WriteRequest, SubmitError> {
        if self.submitting.is_some() {
            return Err(SubmitError::InFlight);
        }

        let record = self.form.to_record();
        let request = match self.modal {
            ModalState::Closed => return Err(SubmitError::NotOpen),
            ModalState::Add => WriteRequest::add(record),
            ModalState::Edit(id) => {
                let row = self.record(id).ok_or(SubmitError::RecordGone)?.row;
                WriteRequest::update(record, row)
            }
        };

        debug!("submitting {:?} (row {:?})", request.action, request.row_index);
        self.submitting = Some(request.action);
        Ok(request)
    }

    /// Records the outcome of the in-flight save. Returns true when the
    /// dataset must be reloaded now.
    ///
    /// After a successful save the modal stays open and the submit stays in
    /// flight until the next applied load. A failed save ends the submit and
    /// leaves the form untouched.
    pub fn finish_submit(&mut self, result: &Result<(), GatewayError>) -> bool {
        match result {
            Ok(()) if self.submitting.is_some() => {
                debug!("save done, reloading before closing the form");
                self.awaiting_reload = true;
                self.close_after_reload = true;
                true
            }
            Ok(()) => false,
            Err(err) => {
                warn!("submit failed: {}", err);
                self.submitting = None;
                false
            }
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}
