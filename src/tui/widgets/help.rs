use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::style::Style;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use crate::tui::palette::Palette;

pub fn render_help(f: &mut Frame, area: Rect, palette: &Palette) {
    // Calculate popup area (60% width, 70% height, centered)
    // Using Layout with Flex::Center for proper centering, following ratatui popup example
    let popup_area = popup_area(area, 60, 70);

    // Clear the background first - this prevents content from showing through
    f.render_widget(Clear, popup_area);

    let base_style = Style::default().fg(palette.fg).bg(palette.bg);
    let paragraph = Paragraph::new(build_help_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help - Key Bindings")
                .title_alignment(Alignment::Center)
                .style(base_style),
        )
        .style(base_style)
        .wrap(ratatui::widgets::Wrap { trim: true });

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

fn build_help_text() -> String {
    let mut text = String::new();

    // Navigation section
    text.push_str("Navigation:\n");
    text.push_str("  j / k or ↑ / ↓: Select entry\n");
    text.push_str("\n");

    // Actions section
    text.push_str("Actions:\n");
    text.push_str("  a: Add entry\n");
    text.push_str("  e: Edit selected entry\n");
    text.push_str("  d: Delete selected entry\n");
    text.push_str("  t: Toggle light/dark theme\n");
    text.push_str("\n");

    // Form section
    text.push_str("Form:\n");
    text.push_str("  Tab / Enter: Next field\n");
    text.push_str("  Shift+Tab: Previous field\n");
    text.push_str("  Up / Down: Previous/next field\n");
    text.push_str("  Ctrl+S: Save entry\n");
    text.push_str("  Left / Right: Move cursor\n");
    text.push_str("  Home / End: Start/end of field\n");
    text.push_str("  Backspace: Delete character\n");
    text.push_str("  Esc: Cancel\n");
    text.push_str("\n");

    // General section
    text.push_str("General:\n");
    text.push_str("  q: Quit\n");
    text.push_str("  ?: Show/hide help\n");

    text
}
