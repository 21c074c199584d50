use std::time::Instant;

use ratatui::widgets::TableState;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::models::{EntryDraft, Theme, TimesheetEntry};
use crate::store::Store;
use crate::timesheet::{Timesheet, TimesheetError};
use crate::tui::palette::Palette;
use crate::tui::widgets::input::Input;
use crate::validate::{self, Field, ValidationErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    View,
    Add,
    Edit,
    ConfirmDelete,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Date,
    Project,
    Task,
    Hours,
    Description,
}

impl FormField {
    /// The validation field this form field reports errors for.
    /// Description is free text and never fails validation.
    pub fn validation_field(self) -> Option<Field> {
        match self {
            FormField::Date => Some(Field::Date),
            FormField::Project => Some(Field::Project),
            FormField::Task => Some(Field::Task),
            FormField::Hours => Some(Field::Hours),
            FormField::Description => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EntryForm {
    pub current_field: FormField,
    pub date: Input,
    pub project: Input,
    pub task: Input,
    pub hours: Input,
    pub description: Input,
    pub errors: ValidationErrors,
    pub editing_id: Option<String>, // None for new entries, Some(id) when editing
}

impl EntryForm {
    /// Fresh form for a new entry with the date pre-filled
    pub fn blank(date: String) -> Self {
        Self {
            current_field: FormField::Date,
            date: Input::from_string(date),
            project: Input::new(),
            task: Input::new(),
            hours: Input::new(),
            description: Input::new(),
            errors: ValidationErrors::new(),
            editing_id: None,
        }
    }

    /// Form pre-filled from an existing entry, carrying its id
    pub fn from_entry(entry: &TimesheetEntry) -> Self {
        let draft = EntryDraft::from(entry);
        Self {
            current_field: FormField::Date,
            date: Input::from_string(draft.date),
            project: Input::from_string(draft.project),
            task: Input::from_string(draft.task),
            hours: Input::from_string(draft.hours),
            description: Input::from_string(draft.description),
            errors: ValidationErrors::new(),
            editing_id: Some(entry.id.clone()),
        }
    }

    /// Collect the current field values into a draft for validation and save
    pub fn draft(&self) -> EntryDraft {
        EntryDraft {
            date: self.date.value().to_string(),
            project: self.project.value().to_string(),
            task: self.task.value().to_string(),
            hours: self.hours.value().to_string(),
            description: self.description.value().to_string(),
        }
    }

    pub fn input(&self, field: FormField) -> &Input {
        match field {
            FormField::Date => &self.date,
            FormField::Project => &self.project,
            FormField::Task => &self.task,
            FormField::Hours => &self.hours,
            FormField::Description => &self.description,
        }
    }

    pub fn active_input_mut(&mut self) -> &mut Input {
        match self.current_field {
            FormField::Date => &mut self.date,
            FormField::Project => &mut self.project,
            FormField::Task => &mut self.task,
            FormField::Hours => &mut self.hours,
            FormField::Description => &mut self.description,
        }
    }

    pub fn navigate(&mut self, forward: bool) {
        self.current_field = match (self.current_field, forward) {
            (FormField::Date, true) => FormField::Project,
            (FormField::Project, true) => FormField::Task,
            (FormField::Task, true) => FormField::Hours,
            (FormField::Hours, true) => FormField::Description,
            (FormField::Description, true) => FormField::Date, // Wrap around
            (FormField::Date, false) => FormField::Description, // Wrap around
            (FormField::Project, false) => FormField::Date,
            (FormField::Task, false) => FormField::Project,
            (FormField::Hours, false) => FormField::Task,
            (FormField::Description, false) => FormField::Hours,
        };
    }

    /// Drop the active field's stale error once the user edits it again
    pub fn clear_active_error(&mut self) {
        if let Some(field) = self.current_field.validation_field() {
            self.errors.remove(&field);
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub mode: Mode,
    pub selected_index: usize,
    pub table_state: TableState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            mode: Mode::View,
            selected_index: 0,
            table_state: TableState::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusState {
    pub message: Option<String>,
    pub message_time: Option<Instant>,
}

impl Default for StatusState {
    fn default() -> Self {
        Self {
            message: None,
            message_time: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ModalState {
    pub pending_delete: Option<String>, // id of the entry awaiting confirmation
    pub confirm_selection: usize,       // 0 = Delete, 1 = Cancel
}

impl Default for ModalState {
    fn default() -> Self {
        Self {
            pending_delete: None,
            confirm_selection: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormState {
    pub entry_form: Option<EntryForm>,
}

impl Default for FormState {
    fn default() -> Self {
        Self { entry_form: None }
    }
}

pub struct App {
    // Core infrastructure
    pub config: Config,
    pub store: Store,
    pub clock: SystemClock,

    // Entry collection (authoritative while the app runs)
    pub timesheet: Timesheet,
    pub theme: Theme,

    // Grouped state
    pub ui: UiState,
    pub modal: ModalState,
    pub status: StatusState,
    pub form: FormState,
}

impl App {
    pub fn new(config: Config, store: Store) -> Self {
        let timesheet = Timesheet::load(&store);
        let theme = store.load_theme();

        let mut app = Self {
            config,
            store,
            clock: SystemClock,
            timesheet,
            theme,
            ui: UiState::default(),
            modal: ModalState::default(),
            status: StatusState::default(),
            form: FormState::default(),
        };
        app.sync_table_state();
        app
    }

    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.theme)
    }

    pub fn selected_entry(&self) -> Option<&TimesheetEntry> {
        self.timesheet.entries().get(self.ui.selected_index)
    }

    fn sync_table_state(&mut self) {
        if self.timesheet.is_empty() {
            self.ui.table_state.select(None);
        } else {
            self.ui.table_state.select(Some(self.ui.selected_index));
        }
    }

    /// Clamp the selection after the collection changes size
    pub fn adjust_selected_index(&mut self) {
        let len = self.timesheet.len();
        if self.ui.selected_index >= len {
            self.ui.selected_index = len.saturating_sub(1);
        }
        self.sync_table_state();
    }

    pub fn move_selection_up(&mut self) {
        if self.ui.selected_index > 0 {
            self.ui.selected_index -= 1;
            self.sync_table_state();
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.ui.selected_index < self.timesheet.len().saturating_sub(1) {
            self.ui.selected_index += 1;
            self.sync_table_state();
        }
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status.message = Some(message);
        self.status.message_time = Some(Instant::now());
    }

    pub fn clear_status_message(&mut self) {
        self.status.message = None;
        self.status.message_time = None;
    }

    /// Check if status message should be auto-cleared (after 3 seconds)
    pub fn check_status_message_timeout(&mut self) {
        const STATUS_MESSAGE_TIMEOUT_SECS: u64 = 3;
        if let Some(time) = self.status.message_time {
            if time.elapsed().as_secs() >= STATUS_MESSAGE_TIMEOUT_SECS {
                self.clear_status_message();
            }
        }
    }

    pub fn enter_add_mode(&mut self) {
        // Default date to today
        let today = self.clock.today().format("%Y-%m-%d").to_string();
        self.form.entry_form = Some(EntryForm::blank(today));
        self.ui.mode = Mode::Add;
    }

    pub fn enter_edit_mode(&mut self) {
        if let Some(entry) = self.selected_entry() {
            self.form.entry_form = Some(EntryForm::from_entry(entry));
            self.ui.mode = Mode::Edit;
        } else {
            self.set_status_message("No entry selected".to_string());
        }
    }

    pub fn exit_form_mode(&mut self) {
        self.form.entry_form = None;
        self.ui.mode = Mode::View;
    }

    /// Validate and save the open form. Validation failures stay in the form
    /// with per-field messages; store failures keep the in-memory change and
    /// surface in the status bar.
    pub fn save_form(&mut self) {
        let (draft, editing_id) = match self.form.entry_form.as_ref() {
            Some(form) => (form.draft(), form.editing_id.clone()),
            None => return,
        };

        let errors = validate::validate(&draft, self.clock.today());
        if !errors.is_empty() {
            if let Some(form) = self.form.entry_form.as_mut() {
                form.errors = errors;
            }
            return;
        }

        match editing_id {
            None => match self.timesheet.add(&self.store, &self.clock, &draft) {
                Ok(_) => {
                    // New entries prepend; move the selection onto the new one
                    self.ui.selected_index = 0;
                    self.exit_form_mode();
                    self.sync_table_state();
                    self.set_status_message("Entry added".to_string());
                }
                Err(e) => self.finish_form_with_error(e),
            },
            Some(id) => match self.timesheet.update(&self.store, &id, &draft) {
                Ok(_) => {
                    self.exit_form_mode();
                    self.set_status_message("Entry updated".to_string());
                }
                Err(e) => self.finish_form_with_error(e),
            },
        }
    }

    fn finish_form_with_error(&mut self, error: TimesheetError) {
        match error {
            TimesheetError::NotFound(_) => {
                // The entry vanished under the form (stale id)
                self.exit_form_mode();
                self.adjust_selected_index();
                self.set_status_message(error.to_string());
            }
            TimesheetError::StoreError(_) => {
                // The in-memory collection already carries the change; only
                // the write to disk failed
                log::error!("failed to persist timesheet: {}", error);
                self.exit_form_mode();
                self.adjust_selected_index();
                self.set_status_message(format!("Save failed: {}", error));
            }
            TimesheetError::InvalidHours(_) => {
                // Validation runs before save, so reaching this is a bug;
                // keep the form open rather than losing input
                self.set_status_message(error.to_string());
            }
        }
    }

    /// Ask for confirmation before deleting the selected entry
    pub fn request_delete(&mut self) {
        if let Some(entry) = self.selected_entry() {
            self.modal.pending_delete = Some(entry.id.clone());
            self.modal.confirm_selection = 0;
            self.ui.mode = Mode::ConfirmDelete;
        } else {
            self.set_status_message("No entry selected".to_string());
        }
    }

    /// The entry the open confirm modal refers to
    pub fn pending_delete_entry(&self) -> Option<&TimesheetEntry> {
        let id = self.modal.pending_delete.as_deref()?;
        self.timesheet.entries().iter().find(|e| e.id == id)
    }

    pub fn confirm_delete(&mut self) {
        if let Some(id) = self.modal.pending_delete.take() {
            match self.timesheet.delete(&self.store, &id) {
                Ok(()) => {
                    self.adjust_selected_index();
                    self.set_status_message("Entry deleted".to_string());
                }
                Err(e) => {
                    // Removal already happened in memory; only the write failed
                    log::error!("failed to persist timesheet: {}", e);
                    self.adjust_selected_index();
                    self.set_status_message(format!("Save failed: {}", e));
                }
            }
        }
        self.ui.mode = Mode::View;
    }

    pub fn cancel_delete(&mut self) {
        self.modal.pending_delete = None;
        self.ui.mode = Mode::View;
    }

    /// Flip the theme and persist the choice. The flip always applies to the
    /// running session; a failed write only warns.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(e) = self.store.save_theme(self.theme) {
            log::warn!("failed to persist theme: {}", e);
            self.set_status_message(format!("Failed to save theme: {}", e));
        }
    }

    pub fn enter_help_mode(&mut self) {
        self.ui.mode = Mode::Help;
    }

    pub fn exit_help_mode(&mut self) {
        self.ui.mode = Mode::View;
    }
}
