use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, StatefulWidget, Table, TableState};

use crate::models::TimesheetEntry;
use crate::tui::palette::Palette;
use crate::utils::format_date_for_display;

pub fn render_entry_table(
    f: &mut Frame,
    area: Rect,
    entries: &[TimesheetEntry],
    total_hours: f64,
    table_state: &mut TableState,
    date_format: &str,
    palette: &Palette,
) {
    let base_style = Style::default().fg(palette.fg).bg(palette.bg);
    let title = format!("Entries ({})", entries.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(base_style);

    if entries.is_empty() {
        let lines = vec![
            Line::from(""),
            Line::from("No timesheet entries yet."),
            Line::from("Press a to add your first entry."),
        ];
        let paragraph = Paragraph::new(lines)
            .block(block)
            .style(base_style)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    // Table above, a 1-line running total below
    let rows_and_total = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let header = Row::new(vec!["Date", "Project", "Task", "Hours", "Description"]).style(
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = entries
        .iter()
        .map(|entry| {
            let description = if entry.description.is_empty() {
                "-".to_string()
            } else {
                entry.description.clone()
            };
            Row::new(vec![
                Cell::from(format_date_for_display(&entry.date, date_format)),
                Cell::from(entry.project.clone()),
                Cell::from(entry.task.clone()),
                Cell::from(format!("{:.1}", entry.hours)),
                Cell::from(description),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(18),
        Constraint::Min(18),
        Constraint::Length(6),
        Constraint::Min(12),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .style(base_style)
        .row_highlight_style(
            Style::default()
                .fg(palette.highlight_fg)
                .bg(palette.highlight_bg),
        );
    StatefulWidget::render(table, rows_and_total[0], f.buffer_mut(), table_state);

    let total = Paragraph::new(format!("Total: {:.1} h", total_hours))
        .style(
            Style::default()
                .fg(palette.accent)
                .bg(palette.bg)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Right);
    f.render_widget(total, rows_and_total[1]);
}
