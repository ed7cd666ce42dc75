//! Layout management and calculations

use crate::constants::{MAIN_AREA_MIN_WIDTH, SIDEBAR_MIN_WIDTH};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split into the content area and the one-line status bar below it
    #[must_use]
    pub fn main_layout(area: Rect) -> (Rect, Rect) {
        let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(area);
        (chunks[0], chunks[1])
    }

    /// Split the content area into sidebar and item list.
    ///
    /// The sidebar shrinks on narrow terminals so the list keeps at least
    /// `MAIN_AREA_MIN_WIDTH` columns.
    #[must_use]
    pub fn top_pane_layout(area: Rect, sidebar_width: u16) -> (Rect, Rect) {
        let max_sidebar = area.width.saturating_sub(MAIN_AREA_MIN_WIDTH).max(SIDEBAR_MIN_WIDTH);
        let width = sidebar_width.min(max_sidebar).min(area.width);

        let chunks = Layout::horizontal([Constraint::Length(width), Constraint::Min(0)]).split(area);
        (chunks[0], chunks[1])
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Whether a point lies inside `area`
    #[must_use]
    pub fn contains(area: Rect, column: u16, row: u16) -> bool {
        column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_respects_configured_width() {
        let (sidebar, main) = LayoutManager::top_pane_layout(Rect::new(0, 0, 120, 40), 30);
        assert_eq!(sidebar.width, 30);
        assert_eq!(main.width, 90);
    }

    #[test]
    fn test_sidebar_shrinks_on_narrow_terminal() {
        let (sidebar, main) = LayoutManager::top_pane_layout(Rect::new(0, 0, 45, 20), 40);
        assert_eq!(sidebar.width, 25);
        assert_eq!(main.width, 20);
    }

    #[test]
    fn test_status_bar_is_one_line() {
        let (content, status) = LayoutManager::main_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(content.height, 23);
        assert_eq!(status.height, 1);
        assert_eq!(status.y, 23);
    }
}
