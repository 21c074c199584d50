use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::style::Style;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use crate::models::TimesheetEntry;
use crate::tui::palette::Palette;

pub fn render_confirm_delete(
    f: &mut Frame,
    area: Rect,
    entry: &TimesheetEntry,
    selection: usize,
    palette: &Palette,
) {
    // Calculate popup area (50% width, 35% height, centered)
    let popup_area = popup_area(area, 50, 35);

    // Clear the background first - this prevents content from showing through
    f.render_widget(Clear, popup_area);

    let base_style = Style::default().fg(palette.fg).bg(palette.bg);

    // Build all lines for the combined content
    let mut all_lines = Vec::new();

    all_lines.push(Line::from(Span::styled(
        "Are you sure you want to delete this entry?",
        base_style,
    )));
    all_lines.push(Line::from(Span::styled("", Style::default()))); // Empty line
    all_lines.push(Line::from(Span::styled(
        format!("{}: {}", entry.project, entry.task),
        base_style,
    )));
    all_lines.push(Line::from(Span::styled("", Style::default()))); // Empty line

    // Build options with selection highlighting
    let options = vec!["Delete", "Cancel"];
    for (index, option) in options.iter().enumerate() {
        let is_selected = index == selection;
        let prefix = if is_selected { "> " } else { "  " };
        let text = format!("{}{}", prefix, option);

        let style = if is_selected {
            Style::default()
                .fg(palette.highlight_fg)
                .bg(palette.highlight_bg)
        } else {
            base_style
        };

        all_lines.push(Line::from(Span::styled(text, style)));
    }

    // Add instruction line
    all_lines.push(Line::from(Span::styled("", Style::default()))); // Empty line
    all_lines.push(Line::from(Span::styled(
        "Use ↑↓ to navigate, Enter to confirm, Esc to cancel",
        base_style,
    )));

    let paragraph = Paragraph::new(all_lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Confirm Delete")
                .title_alignment(Alignment::Center)
                .style(base_style),
        )
        .style(base_style)
        .wrap(ratatui::widgets::Wrap { trim: true })
        .alignment(Alignment::Center);

    f.render_widget(paragraph, popup_area);
}

/// Helper function to create a centered rect using up certain percentage of the available rect
/// Based on ratatui popup example: https://ratatui.rs/examples/apps/popup/
fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
