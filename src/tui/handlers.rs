// File: src/tui/handlers.rs
// Handles keyboard input and applies the resulting actions to the session.
use crate::tui::action::{Action, Page};
use crate::tui::state::{AppState, Focus, FormField, InputMode, ProcedureForm};
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Maps a key press to state changes, returning an action when the press
/// should mutate the session or quit.
pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match state.mode {
        InputMode::EditingField => {
            handle_text_input(key, state, |state| {
                state.commit_edit_field();
                state.form.move_field(1);
                None
            });
            None
        }
        InputMode::EditingStaff => handle_text_input(key, state, |state| {
            let name = state.input_buffer.clone();
            state.reset_input();
            state.mode = InputMode::Normal;
            Some(Action::AddStaff(name))
        }),
        InputMode::Normal => handle_normal(key, state),
    }
}

fn handle_text_input(
    key: KeyEvent,
    state: &mut AppState,
    on_submit: impl FnOnce(&mut AppState) -> Option<Action>,
) -> Option<Action> {
    match key.code {
        KeyCode::Enter => return on_submit(state),
        KeyCode::Esc => {
            state.reset_input();
            state.mode = InputMode::Normal;
            state.message = "Cancelled.".to_string();
        }
        KeyCode::Char(c) => state.enter_char(c),
        KeyCode::Backspace => state.delete_char(),
        KeyCode::Left => state.move_cursor_left(),
        KeyCode::Right => state.move_cursor_right(),
        _ => {}
    }
    None
}

fn handle_normal(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => return Some(Action::Quit),
        KeyCode::Char('?') => state.show_full_help = !state.show_full_help,
        KeyCode::Tab => {
            state.active_focus = match state.active_focus {
                Focus::Sidebar => Focus::Main,
                Focus::Main => Focus::Sidebar,
            };
        }
        KeyCode::Char(c @ '1'..='7') => {
            let idx = c as usize - '1' as usize;
            if let Some(page) = Page::from_index(idx) {
                state.set_page(page);
                state.active_focus = Focus::Main;
            }
        }
        KeyCode::Down | KeyCode::Char('j') => state.next(),
        KeyCode::Up | KeyCode::Char('k') => state.previous(),
        KeyCode::Enter if state.active_focus == Focus::Sidebar => {
            state.active_focus = Focus::Main;
        }
        _ if state.active_focus == Focus::Main => return handle_page_key(key, state),
        _ => {}
    }
    None
}

fn handle_page_key(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    match state.page {
        Page::AddProcedure => match key.code {
            KeyCode::Left | KeyCode::Char('h') if state.form.active == FormField::Staff => {
                let len = state.session.list_staff().len();
                state.form.cycle_staff(-1, len);
            }
            KeyCode::Right | KeyCode::Char('l') if state.form.active == FormField::Staff => {
                let len = state.session.list_staff().len();
                state.form.cycle_staff(1, len);
            }
            KeyCode::Enter | KeyCode::Char('e') => {
                if !state.begin_edit_field() {
                    state.message = "Use Left/Right to pick staff.".to_string();
                }
            }
            KeyCode::Char('s') => match state.form.to_record(state.session.list_staff()) {
                Ok(record) => return Some(Action::AppendRecord(record)),
                Err(e) => state.message = format!("Warning: {}", e),
            },
            _ => {}
        },
        Page::RegionReport => match key.code {
            KeyCode::Left | KeyCode::Char('h') => state.cycle_region(-1),
            KeyCode::Right | KeyCode::Char('l') => state.cycle_region(1),
            _ => {}
        },
        Page::Forecast => {
            if key.code == KeyCode::Char('r') {
                return Some(Action::RefreshForecast);
            }
        }
        Page::ManageStaff => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('a')) {
                state.reset_input();
                state.mode = InputMode::EditingStaff;
            }
        }
        Page::GenerateTestData => {
            if key.code == KeyCode::Enter {
                return Some(Action::GenerateTestData);
            }
        }
        Page::Dashboard | Page::MonthlyReport => {}
    }
    None
}

/// Applies an action to the session. Returns `false` when the app should quit.
pub fn apply_action(state: &mut AppState, action: Action) -> bool {
    match action {
        Action::Quit => return false,
        Action::AppendRecord(record) => {
            state.session.append_record(record);
            // Keep the chosen staff member for the next entry
            state.form = ProcedureForm {
                staff_index: state.form.staff_index,
                ..ProcedureForm::new(Local::now().date_naive())
            };
            state.invalidate_views();
            state.message = "Procedure added!".to_string();
        }
        Action::AddStaff(name) => match state.session.add_staff_name(&name) {
            Ok(added) => state.message = format!("{} added!", added),
            Err(e) => state.message = format!("Warning: {}", e),
        },
        Action::GenerateTestData => {
            let count = state.session.synthetic_count;
            state.session.generate_synthetic_data(count);
            state.invalidate_views();
            state.message = format!("{} test records generated!", count);
        }
        Action::RefreshForecast => state.refresh_forecast(),
    }
    true
}
