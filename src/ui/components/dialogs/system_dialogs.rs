use super::scroll_behavior::ScrollState;
use crate::constants::DIALOG_TITLE_LOGS;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
    Frame,
};

pub const HELP_TEXT: &str = r"
TICKLIST - terminal to-do client
================================

ITEMS
-----
j/k, Up/Down  Move selection
a             New item
e             Edit item text
d             Delete item
i             Toggle important
x, Space      Toggle checked (local only)
Enter, o      Expand or collapse extra text
m             Grab item for moving

MOVING AN ITEM
--------------
j/k           Move the grabbed item
m, Enter      Drop it here and save the order
Esc           Put it back

LISTS
-----
J/K           Previous/next list
A             New list
E             Rename list
D             Delete list (not the last one)

GENERAL
-------
r             Reload from the server
c             Cycle icon theme
G             Show logs
?, h          Toggle this help
q, Ctrl+C     Quit

HELP SCROLLING
--------------
j/k, Up/Down  Scroll
PageUp/Down   Page
Home/End      Top/bottom
";

pub fn render_info_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    message: &str,
    scroll: &mut ScrollState,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 10, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{} Info", icons.info()))
        .style(Style::default().fg(Color::Blue));

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );
    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let instructions = Paragraph::new("Press Enter or Esc to continue")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    render_scrolled_text(f, content_area, message, content_area.height as usize, scroll, true);
    f.render_widget(instructions, instructions_area);
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll: &mut ScrollState) {
    let help_area = LayoutManager::centered_rect(90, 90, area);
    render_overlay_text(f, help_area, "Help - Press 'Esc', '?' or 'h' to close", HELP_TEXT, scroll);
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, logger: &Logger, scroll: &mut ScrollState) {
    let logs = logger.get_logs();
    let content = if logs.is_empty() {
        "No log entries yet".to_string()
    } else {
        logs.join("\n")
    };

    let logs_area = LayoutManager::centered_rect(90, 90, area);
    render_overlay_text(f, logs_area, DIALOG_TITLE_LOGS, &content, scroll);
}

/// Bordered full-screen-ish overlay with scrollable text
fn render_overlay_text(f: &mut Frame, outer: Rect, title: &str, content: &str, scroll: &mut ScrollState) {
    f.render_widget(Clear, outer);

    let margin_x = 2;
    let margin_y = 1;
    let content_area = Rect::new(
        outer.x + margin_x,
        outer.y + margin_y,
        outer.width.saturating_sub(margin_x * 2),
        outer.height.saturating_sub(margin_y * 2),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .title_alignment(Alignment::Center);
    let inner = block.inner(content_area);
    f.render_widget(block, content_area);

    render_scrolled_text(f, inner, content, inner.height as usize, scroll, false);
}

fn render_scrolled_text(
    f: &mut Frame,
    area: Rect,
    content: &str,
    visible_height: usize,
    scroll: &mut ScrollState,
    wrap: bool,
) {
    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();
    let offset = scroll.clamp(total_lines, visible_height);

    let visible = lines
        .iter()
        .skip(offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    let mut paragraph = Paragraph::new(visible).style(Style::default().fg(Color::White));
    if wrap {
        paragraph = paragraph.wrap(Wrap { trim: true });
    }
    f.render_widget(paragraph, area);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray))
            .thumb_style(Style::default().fg(Color::White));

        f.render_stateful_widget(scrollbar, area, &mut scroll.scrollbar);
    }
}
