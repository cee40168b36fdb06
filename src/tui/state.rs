// File: ./src/tui/state.rs
// Manages the application state for the TUI.
use crate::forecast::ForecastPoint;
use crate::model::ProcedureRecord;
use crate::session::{Session, ViewError};
use crate::tui::action::Page;
use chrono::{Local, NaiveDate};
use ratatui::widgets::{ListState, TableState};
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Focus {
    Sidebar,
    Main,
}

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputMode {
    Normal,
    EditingField,
    EditingStaff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum FormField {
    Date,
    Hospital,
    Region,
    Procedure,
    Surgeon,
    Staff,
    Notes,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormField::Date => "Date",
            FormField::Hospital => "Hospital",
            FormField::Region => "Region",
            FormField::Procedure => "Procedure",
            FormField::Surgeon => "Surgeon",
            FormField::Staff => "Staff",
            FormField::Notes => "Notes",
        };
        write!(f, "{}", label)
    }
}

/// The "Add Procedure" form. Staff is picked from the roster by index, every
/// other field is free text.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureForm {
    pub date: String,
    pub hospital: String,
    pub region: String,
    pub procedure: String,
    pub surgeon: String,
    pub notes: String,
    pub staff_index: usize,
    pub active: FormField,
}

impl ProcedureForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today.format(DATE_FORMAT).to_string(),
            hospital: String::new(),
            region: String::new(),
            procedure: String::new(),
            surgeon: String::new(),
            notes: String::new(),
            staff_index: 0,
            active: FormField::Date,
        }
    }

    /// Text buffer behind `field`; `None` for the roster-backed staff field.
    pub fn text(&self, field: FormField) -> Option<&String> {
        match field {
            FormField::Date => Some(&self.date),
            FormField::Hospital => Some(&self.hospital),
            FormField::Region => Some(&self.region),
            FormField::Procedure => Some(&self.procedure),
            FormField::Surgeon => Some(&self.surgeon),
            FormField::Notes => Some(&self.notes),
            FormField::Staff => None,
        }
    }

    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Date => Some(&mut self.date),
            FormField::Hospital => Some(&mut self.hospital),
            FormField::Region => Some(&mut self.region),
            FormField::Procedure => Some(&mut self.procedure),
            FormField::Surgeon => Some(&mut self.surgeon),
            FormField::Notes => Some(&mut self.notes),
            FormField::Staff => None,
        }
    }

    pub fn move_field(&mut self, delta: isize) {
        let fields: Vec<FormField> = FormField::iter().collect();
        let idx = fields.iter().position(|f| *f == self.active).unwrap_or(0) as isize;
        let len = fields.len() as isize;
        self.active = fields[(idx + delta).rem_euclid(len) as usize];
    }

    pub fn cycle_staff(&mut self, delta: isize, roster_len: usize) {
        if roster_len == 0 {
            self.staff_index = 0;
            return;
        }
        let idx = self.staff_index as isize + delta;
        self.staff_index = idx.rem_euclid(roster_len as isize) as usize;
    }

    pub fn to_record(&self, roster: &[String]) -> Result<ProcedureRecord, String> {
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|_| format!("Invalid date '{}', expected YYYY-MM-DD", self.date.trim()))?;
        Ok(ProcedureRecord {
            date,
            hospital: self.hospital.clone(),
            region: self.region.clone(),
            procedure: self.procedure.clone(),
            surgeon: self.surgeon.clone(),
            staff: roster.get(self.staff_index).cloned().unwrap_or_default(),
            notes: self.notes.clone(),
        })
    }
}

pub struct AppState {
    // Data
    pub session: Session,

    // UI State
    pub page: Page,
    pub menu_state: ListState,
    pub table_state: TableState,
    pub active_focus: Focus,
    pub mode: InputMode,
    pub message: String,
    pub show_full_help: bool,

    // Page State
    pub form: ProcedureForm,
    pub selected_region: usize,
    pub forecast: Option<Result<Vec<ForecastPoint>, ViewError>>,

    // Input Buffer
    pub input_buffer: String,
    pub cursor_position: usize,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        let mut menu_state = ListState::default();
        menu_state.select(Some(0));

        Self {
            session,
            page: Page::Dashboard,
            menu_state,
            table_state: TableState::default(),
            active_focus: Focus::Sidebar,
            mode: InputMode::Normal,
            message: "Ready.".to_string(),
            show_full_help: false,
            form: ProcedureForm::new(Local::now().date_naive()),
            selected_region: 0,
            forecast: None,
            input_buffer: String::new(),
            cursor_position: 0,
        }
    }

    pub fn set_page(&mut self, page: Page) {
        self.page = page;
        self.menu_state.select(Some(page.index()));
        self.table_state.select(None);
        if page == Page::Forecast {
            self.refresh_forecast();
        }
    }

    /// Draws a new forecast. Cached so redraws don't re-roll the jitter.
    pub fn refresh_forecast(&mut self) {
        let horizon = self.session.forecast_horizon;
        self.forecast = Some(self.session.forecast_next(horizon));
    }

    /// Drops everything derived from the records after a mutation.
    pub fn invalidate_views(&mut self) {
        self.forecast = None;
        self.table_state.select(None);
        let regions = self.session.regions().len();
        if self.selected_region >= regions {
            self.selected_region = 0;
        }
        if self.page == Page::Forecast {
            self.refresh_forecast();
        }
    }

    pub fn current_region(&self) -> Option<String> {
        self.session.regions().into_iter().nth(self.selected_region)
    }

    pub fn cycle_region(&mut self, delta: isize) {
        let len = self.session.regions().len();
        if len == 0 {
            self.selected_region = 0;
            return;
        }
        let idx = self.selected_region as isize + delta;
        self.selected_region = idx.rem_euclid(len as isize) as usize;
        self.table_state.select(None);
    }

    /// Number of scrollable rows on the current page.
    pub fn table_len(&self) -> usize {
        match self.page {
            Page::MonthlyReport => self.session.list_cross_tab().len(),
            Page::RegionReport => self
                .current_region()
                .map(|r| self.session.filter_by_region(&r).len())
                .unwrap_or(0),
            Page::ManageStaff => self.session.list_staff().len(),
            _ => 0,
        }
    }

    // --- INPUT HELPERS ---
    pub fn move_cursor_left(&mut self) {
        let cursor_moved_left = self.cursor_position.saturating_sub(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_left);
    }
    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor_position.saturating_add(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_right);
    }
    pub fn enter_char(&mut self, new_char: char) {
        // Safe insertion for UTF-8 strings
        let byte_index = self
            .input_buffer
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_position)
            .unwrap_or(self.input_buffer.len());

        self.input_buffer.insert(byte_index, new_char);
        self.move_cursor_right();
    }
    pub fn delete_char(&mut self) {
        if self.cursor_position != 0 {
            let current_index = self.cursor_position;
            let before = self.input_buffer.chars().take(current_index - 1);
            let after = self.input_buffer.chars().skip(current_index);
            self.input_buffer = before.chain(after).collect();
            self.move_cursor_left();
        }
    }
    pub fn reset_input(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
    }
    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.clamp(0, self.input_buffer.chars().count())
    }

    /// Loads the active form field into the input buffer for editing.
    pub fn begin_edit_field(&mut self) -> bool {
        let Some(text) = self.form.text(self.form.active) else {
            return false;
        };
        self.input_buffer = text.clone();
        self.cursor_position = self.input_buffer.chars().count();
        self.mode = InputMode::EditingField;
        true
    }

    pub fn commit_edit_field(&mut self) {
        let value = std::mem::take(&mut self.input_buffer);
        if let Some(slot) = self.form.text_mut(self.form.active) {
            *slot = value;
        }
        self.cursor_position = 0;
        self.mode = InputMode::Normal;
    }

    // --- NAVIGATION ---
    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn previous(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, delta: isize) {
        match self.active_focus {
            Focus::Sidebar => {
                let len = Page::all().len() as isize;
                let idx = (self.page.index() as isize + delta).rem_euclid(len) as usize;
                if let Some(page) = Page::from_index(idx) {
                    self.set_page(page);
                }
            }
            Focus::Main => {
                if self.page == Page::AddProcedure {
                    self.form.move_field(delta);
                    return;
                }
                let len = self.table_len();
                if len == 0 {
                    self.table_state.select(None);
                    return;
                }
                let i = match self.table_state.selected() {
                    Some(i) => (i as isize + delta).clamp(0, len as isize - 1) as usize,
                    None => 0,
                };
                self.table_state.select(Some(i));
            }
        }
    }
}
