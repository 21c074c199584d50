use ratatui::widgets::Paragraph;
use ratatui::style::{Modifier, Style};
use ratatui::Frame;
use ratatui::layout::Rect;
use crate::tui::palette::Palette;

pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    message: Option<&String>,
    key_hints: &[String],
    palette: &Palette,
) {
    let (mut content, style) = if let Some(msg) = message {
        // Status messages get a highlighted background for visibility
        (
            msg.clone(),
            Style::default()
                .fg(palette.highlight_fg)
                .bg(palette.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        // Key hints use normal styling with bullet separators,
        // fitting as many hints as possible when space is limited
        let max_width = area.width as usize;
        let separator = " • ";
        let separator_len = separator.chars().count();

        let mut hints_text = String::new();
        for (i, hint) in key_hints.iter().enumerate() {
            let hint_len = hint.chars().count();
            let current_len = hints_text.chars().count();

            let would_be_len = if i == 0 {
                hint_len
            } else {
                current_len + separator_len + hint_len
            };

            // If adding this hint would exceed the width, stop
            if would_be_len > max_width {
                if !hints_text.is_empty() {
                    let ellipsis = "...";
                    let ellipsis_len = ellipsis.chars().count();
                    if current_len + ellipsis_len <= max_width {
                        hints_text.push_str(ellipsis);
                    } else {
                        let truncate_to = max_width.saturating_sub(ellipsis_len);
                        hints_text = hints_text.chars().take(truncate_to).collect::<String>();
                        hints_text.push_str(ellipsis);
                    }
                } else if i == 0 {
                    // Even the first hint is too long, truncate it with ellipsis
                    let ellipsis = "...";
                    let ellipsis_len = ellipsis.chars().count();
                    let truncate_to = max_width.saturating_sub(ellipsis_len);
                    hints_text = hint.chars().take(truncate_to).collect::<String>();
                    hints_text.push_str(ellipsis);
                }
                break;
            }

            // Add separator before hint (except for first one)
            if i > 0 {
                hints_text.push_str(separator);
            }
            hints_text.push_str(hint);
        }

        (hints_text, Style::default().fg(palette.fg).bg(palette.bg))
    };

    // Status messages also truncate to the available width
    if message.is_some() {
        let max_width = area.width as usize;
        if content.chars().count() > max_width {
            content =
                content.chars().take(max_width.saturating_sub(3)).collect::<String>() + "...";
        }
    }

    // Render status bar without Block wrapper - simple 1-line display
    let paragraph = Paragraph::new(content)
        .style(style)
        .wrap(ratatui::widgets::Wrap { trim: true });

    f.render_widget(paragraph, area);
}
