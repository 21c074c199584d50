use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout as RatLayout};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Mode};
use crate::tui::{Layout, widgets};

pub fn render(f: &mut Frame, app: &mut App, layout: &Layout) {
    let palette = app.palette();

    // Outer border with the app name centered in the top edge; its style
    // paints the whole frame in the active theme
    let outer_block = Block::default()
        .borders(Borders::ALL)
        .title("timecard")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(palette.fg).bg(palette.bg));
    f.render_widget(outer_block, f.area());

    // Header line: screen title on the left, theme affordance on the right
    let title = match app.ui.mode {
        Mode::Add => "Add Timesheet Entry",
        Mode::Edit => "Edit Timesheet Entry",
        _ => "Timesheet",
    };
    let theme_label = format!("Theme: {} (t)", app.theme.as_str());
    let header_chunks = RatLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(theme_label.chars().count() as u16),
        ])
        .split(layout.header_area);
    let title_paragraph = Paragraph::new(title).style(
        Style::default()
            .fg(palette.accent)
            .bg(palette.bg)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(title_paragraph, header_chunks[0]);
    let theme_paragraph =
        Paragraph::new(theme_label).style(Style::default().fg(palette.dim).bg(palette.bg));
    f.render_widget(theme_paragraph, header_chunks[1]);

    // Main pane. Help and the delete confirmation render as overlays after
    // the normal content, so those modes still draw the table beneath
    match app.ui.mode {
        Mode::View | Mode::Help | Mode::ConfirmDelete => {
            widgets::entry_table::render_entry_table(
                f,
                layout.main_area,
                app.timesheet.entries(),
                app.timesheet.total_hours(),
                &mut app.ui.table_state,
                &app.config.date_format,
                &palette,
            );
        }
        Mode::Add | Mode::Edit => {
            if let Some(ref form) = app.form.entry_form {
                widgets::form::render_entry_form(f, layout.main_area, form, &palette);
            } else {
                // Empty state (shouldn't happen)
                let paragraph = Paragraph::new("No form")
                    .block(Block::default().borders(Borders::ALL))
                    .style(Style::default().fg(palette.fg).bg(palette.bg));
                f.render_widget(paragraph, layout.main_area);
            }
        }
    }

    // Render help popup overlay if in help mode (after normal content)
    if app.ui.mode == Mode::Help {
        widgets::help::render_help(f, f.area(), &palette);
    }

    // Render delete confirmation modal if pending (after normal content)
    if app.ui.mode == Mode::ConfirmDelete {
        if let Some(entry) = app.pending_delete_entry() {
            widgets::confirm_delete::render_confirm_delete(
                f,
                f.area(),
                entry,
                app.modal.confirm_selection,
                &palette,
            );
        }
    }

    // Render status bar
    let key_hints = get_key_hints(app);
    widgets::status_bar::render_status_bar(
        f,
        layout.status_area,
        app.status.message.as_ref(),
        &key_hints,
        &palette,
    );
}

fn get_key_hints(app: &App) -> Vec<String> {
    match app.ui.mode {
        Mode::Help => {
            vec!["Esc or ?: Close help".to_string()]
        }
        Mode::Add | Mode::Edit => {
            vec![
                "Tab/Enter: Next field".to_string(),
                "Shift+Tab: Previous field".to_string(),
                "Ctrl+S: Save".to_string(),
                "Esc: Cancel".to_string(),
            ]
        }
        Mode::ConfirmDelete => {
            vec![
                "↑/↓: Select".to_string(),
                "Enter: Confirm".to_string(),
                "Esc: Cancel".to_string(),
            ]
        }
        Mode::View => {
            vec![
                "q: Quit".to_string(),
                "a: Add".to_string(),
                "e: Edit".to_string(),
                "d: Delete".to_string(),
                "t: Theme".to_string(),
                "j/k: Select".to_string(),
                "?: Help".to_string(),
            ]
        }
    }
}
