use ratatui::layout::{Constraint, Direction, Layout as RatLayout, Rect};

pub struct Layout {
    pub inner_area: Rect, // Area inside the outer border
    pub header_area: Rect,
    pub main_area: Rect,
    pub status_area: Rect,
}

impl Layout {
    /// Minimum terminal dimensions required for the application
    /// Width: 44 columns keeps the widest form captions and the table header readable
    /// Height: 12 lines (2 outer borders + 1 header + 8 content + 1 status)
    pub const MIN_WIDTH: u16 = 44;
    pub const MIN_HEIGHT: u16 = 12;

    pub fn calculate(size: Rect) -> Self {
        // Ensure minimum terminal size (accounting for outer border)
        let min_width_with_border = Self::MIN_WIDTH + 2; // +2 for left/right borders
        let min_height_with_border = Self::MIN_HEIGHT + 2; // +2 for top/bottom borders
        let width = size.width.max(min_width_with_border);
        let height = size.height.max(min_height_with_border);
        let size = Rect::new(size.x, size.y, width, height);

        // Calculate inner area (accounting for outer border: 1 char on each side)
        let inner_area = Rect::new(
            size.x + 1,
            size.y + 1,
            size.width.saturating_sub(2),
            size.height.saturating_sub(2),
        );

        // Split vertically: header (1 line), main content, status (1 line)
        let vertical = RatLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(1),    // Main content (table or form)
                Constraint::Length(1), // Status
            ])
            .split(inner_area);

        Self {
            inner_area,
            header_area: vertical[0],
            main_area: vertical[1],
            status_area: vertical[2],
        }
    }
}
