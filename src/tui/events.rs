use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    size as terminal_size,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use std::io;

use crate::tui::app::{App, Mode};
use crate::tui::error::TuiError;
use crate::tui::layout::Layout;

/// Guard that ensures terminal state is restored even on panic.
/// If the terminal is left in raw mode or the alternate screen, the user's
/// shell is unusable afterwards.
struct TerminalGuard {
    raw_mode_enabled: bool,
    alternate_screen_enabled: bool,
}

impl TerminalGuard {
    fn new() -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        Ok(Self {
            raw_mode_enabled: true,
            alternate_screen_enabled: true,
        })
    }

    fn restore(&mut self) -> Result<(), TuiError> {
        if self.raw_mode_enabled {
            disable_raw_mode()?;
            self.raw_mode_enabled = false;
        }
        if self.alternate_screen_enabled {
            execute!(io::stdout(), LeaveAlternateScreen)?;
            self.alternate_screen_enabled = false;
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Ignore errors here; this is already a cleanup path
        if self.raw_mode_enabled {
            let _ = disable_raw_mode();
        }
        if self.alternate_screen_enabled {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
        }
    }
}

pub fn run_event_loop(mut app: App) -> Result<(), TuiError> {
    // Check terminal size before entering the alternate screen, so the
    // error lands in the normal terminal where the user can read it
    let (width, height) = terminal_size()?;
    let min_width_with_border = Layout::MIN_WIDTH + 2; // +2 for borders
    let min_height_with_border = Layout::MIN_HEIGHT + 2; // +2 for borders

    if width < min_width_with_border || height < min_height_with_border {
        return Err(TuiError::TerminalTooSmall(format!(
            "current: {}x{}, minimum required: {}x{}. Please resize your terminal window.",
            width, height, min_width_with_border, min_height_with_border
        )));
    }

    // Setup terminal with guard to ensure restoration on panic
    let mut guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    loop {
        // Check if status message should be auto-cleared
        app.check_status_message_timeout();

        // Query the size explicitly rather than trusting f.area(); some
        // terminals report them differently
        let terminal_size = terminal.size()?;
        let terminal_rect = Rect::new(0, 0, terminal_size.width, terminal_size.height);
        terminal.draw(|f| {
            let layout = Layout::calculate(terminal_rect);
            crate::tui::render::render(f, &mut app, &layout);
        })?;

        if event::poll(std::time::Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key_event) => {
                    // Only process Press events (ignore Release events to
                    // prevent double-processing on Windows)
                    if key_event.kind == KeyEventKind::Press {
                        if handle_key_event(&mut app, key_event) {
                            break; // Quit requested
                        }
                    }
                }
                Event::Resize(_width, _height) => {
                    // The next draw picks up the new size
                }
                _ => {
                    // Ignore other event types (mouse, etc.)
                }
            }
        }
    }

    // Restore terminal state explicitly (guard would also restore on drop)
    guard.restore()?;

    Ok(())
}

/// Route a key press to the active mode's handler.
/// Returns true when the user asked to quit.
fn handle_key_event(app: &mut App, key_event: KeyEvent) -> bool {
    match app.ui.mode {
        Mode::ConfirmDelete => handle_confirm_delete_mode(app, key_event),
        Mode::Add | Mode::Edit => handle_form_mode(app, key_event),
        Mode::Help => handle_help_mode(app, key_event),
        Mode::View => handle_view_mode(app, key_event),
    }
}

fn handle_view_mode(app: &mut App, key_event: KeyEvent) -> bool {
    match key_event.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('a') => app.enter_add_mode(),
        KeyCode::Char('e') => app.enter_edit_mode(),
        KeyCode::Char('d') => app.request_delete(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('?') => app.enter_help_mode(),
        KeyCode::Char('j') | KeyCode::Down => app.move_selection_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_selection_up(),
        KeyCode::Esc => app.clear_status_message(),
        _ => {}
    }
    false
}

fn handle_form_mode(app: &mut App, key_event: KeyEvent) -> bool {
    // Ctrl+S saves from any field
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key_event.code, KeyCode::Char('s') | KeyCode::Char('S'))
    {
        app.save_form();
        return false;
    }

    match key_event.code {
        KeyCode::Esc => {
            app.exit_form_mode();
            return false;
        }
        KeyCode::Tab | KeyCode::Enter | KeyCode::Down => {
            if let Some(form) = app.form.entry_form.as_mut() {
                form.navigate(true);
            }
            return false;
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = app.form.entry_form.as_mut() {
                form.navigate(false);
            }
            return false;
        }
        _ => {}
    }

    let Some(form) = app.form.entry_form.as_mut() else {
        return false;
    };
    match key_event.code {
        KeyCode::Char(c) => {
            // Skip when a control chord is held, so shortcuts never type text
            if key_event.modifiers.contains(KeyModifiers::CONTROL) {
                return false;
            }
            form.clear_active_error();
            form.active_input_mut().insert_char(c);
        }
        KeyCode::Backspace => {
            form.clear_active_error();
            form.active_input_mut().delete_char();
        }
        KeyCode::Left => form.active_input_mut().move_cursor_left(),
        KeyCode::Right => form.active_input_mut().move_cursor_right(),
        KeyCode::Home => form.active_input_mut().move_cursor_home(),
        KeyCode::End => form.active_input_mut().move_cursor_end(),
        _ => {
            // Ignore other keys while the form is open
        }
    }
    false
}

fn handle_confirm_delete_mode(app: &mut App, key_event: KeyEvent) -> bool {
    match key_event.code {
        KeyCode::Up | KeyCode::Down | KeyCode::Char('k') | KeyCode::Char('j') => {
            // Two options, so moving in either direction flips the selection
            app.modal.confirm_selection = if app.modal.confirm_selection == 0 { 1 } else { 0 };
        }
        KeyCode::Enter => {
            if app.modal.confirm_selection == 0 {
                app.confirm_delete();
            } else {
                app.cancel_delete();
            }
        }
        KeyCode::Esc => app.cancel_delete(),
        _ => {}
    }
    false
}

fn handle_help_mode(app: &mut App, key_event: KeyEvent) -> bool {
    match key_event.code {
        KeyCode::Esc | KeyCode::Char('?') => app.exit_help_mode(),
        _ => {
            // Ignore all other keys in help mode
        }
    }
    false
}
