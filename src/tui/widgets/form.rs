use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{EntryForm, FormField};
use crate::tui::palette::Palette;

/// Field order and captions, top to bottom. The date caption carries the
/// entry rules (ISO format, no future dates) so they are visible while
/// typing, as does the hours cap.
const FIELDS: [(FormField, &str); 5] = [
    (FormField::Date, "Date (YYYY-MM-DD, today or earlier)"),
    (FormField::Project, "Project"),
    (FormField::Task, "Task"),
    (FormField::Hours, "Hours (max 24)"),
    (FormField::Description, "Description (optional)"),
];

pub fn render_entry_form(f: &mut Frame, area: Rect, form: &EntryForm, palette: &Palette) {
    if area.width < 2 || area.height < 2 {
        return;
    }

    let highlight_style = Style::default()
        .bg(palette.highlight_bg)
        .fg(palette.highlight_fg);
    let inactive_field_style = Style::default()
        .fg(palette.fg)
        .add_modifier(Modifier::DIM);
    let block_style = Style::default().fg(palette.fg).bg(palette.bg);
    let error_style = Style::default().fg(palette.error);

    // One bordered row per field (border top + content + border bottom),
    // leftover space stays empty below the form
    let constraints = [
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
    ];
    let field_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (index, (field, caption)) in FIELDS.iter().enumerate() {
        let field_area = field_areas[index];
        let is_active = form.current_field == *field;
        let value_style = if is_active {
            highlight_style
        } else {
            inactive_field_style
        };

        // A failing field shows its message on the block title in the error
        // color, so the reason stays visible while the user retypes
        let error = field
            .validation_field()
            .and_then(|vf| form.errors.get(&vf));
        let title = match error {
            Some(err) => Line::from(vec![
                Span::raw(*caption),
                Span::styled(format!(" - {}", err.message), error_style),
            ]),
            None => Line::from(*caption),
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(block_style);
        if error.is_some() {
            block = block.border_style(error_style);
        }

        let content_width = field_area.width.saturating_sub(2) as usize;
        let (visible, _) = form.input(*field).display(content_width);
        let paragraph = Paragraph::new(Line::from(Span::styled(visible, value_style))).block(block);
        f.render_widget(paragraph, field_area);
    }

    // Set cursor position for active field
    if let Some((x, y)) = get_cursor_position(form, &field_areas) {
        f.set_cursor_position((x, y));
    }
}

fn get_cursor_position(form: &EntryForm, field_areas: &[Rect]) -> Option<(u16, u16)> {
    let field_index = FIELDS
        .iter()
        .position(|(field, _)| *field == form.current_field)?;
    if field_index >= field_areas.len() {
        return None;
    }

    let field_area = field_areas[field_index];
    if field_area.width < 2 || field_area.height < 2 {
        return None;
    }

    let content_width = field_area.width.saturating_sub(2) as usize;
    let (_, cursor_col) = form.input(form.current_field).display(content_width);
    Some((field_area.x + 1 + cursor_col as u16, field_area.y + 1))
}
