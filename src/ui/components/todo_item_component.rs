//! Rendering of a single to-do item

use crate::api::TodoItem;
use crate::config::DisplayConfig;
use crate::icons::IconService;
use crate::utils::datetime;
use chrono::NaiveDate;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// Per-row UI flags that never leave the client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowState {
    pub selected: bool,
    pub checked: bool,
    pub expanded: bool,
    pub grabbed: bool,
}

pub struct TodoItemView<'a> {
    pub item: &'a TodoItem,
    pub state: RowState,
    pub icons: &'a IconService,
    pub display: &'a DisplayConfig,
    pub today: NaiveDate,
}

impl<'a> TodoItemView<'a> {
    /// One line for the item, plus one line per line of extra text when expanded
    pub fn render(&self) -> ListItem<'static> {
        let mut lines = vec![self.title_line()];

        if self.state.expanded {
            if let Some(extra) = self.item.extra_text() {
                let style = Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC);
                for text in extra.lines() {
                    lines.push(Line::from(Span::styled(format!("      {}", text), style)));
                }
            }
        }

        ListItem::new(lines)
    }

    fn title_line(&self) -> Line<'static> {
        let mut spans = Vec::new();

        if self.state.grabbed {
            spans.push(Span::styled(
                format!("{} ", self.icons.grabbed()),
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            ));
        }

        let checkbox = if self.state.checked {
            self.icons.todo_checked()
        } else {
            self.icons.todo_pending()
        };
        let checkbox_style = if self.state.checked {
            Style::default().fg(Color::Green)
        } else if self.state.selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("{} ", checkbox), checkbox_style));

        if self.item.important {
            spans.push(Span::styled(
                format!("{} ", self.icons.important()),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        }

        let mut text_style = if self.state.selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        if self.state.checked {
            text_style = text_style.fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT);
        }
        spans.push(Span::styled(self.item.todo.clone(), text_style));

        if self.item.extra_text().is_some() {
            let expanded = self.state.expanded;
            spans.push(Span::styled(
                format!(" {}", self.icons.disclosure(expanded)),
                Style::default().fg(Color::DarkGray),
            ));
        }

        if let Some(deadline) = self.item.deadline_str() {
            let formatted = datetime::format_deadline(
                deadline,
                self.today,
                self.display.human_dates,
                &self.display.date_format,
            );
            let color = if !self.state.checked && datetime::is_overdue(deadline, self.today) {
                Color::Red
            } else {
                Color::Rgb(255, 165, 0)
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!("{} {}", self.icons.deadline(), formatted),
                Style::default().fg(color),
            ));
        }

        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> TodoItem {
        TodoItem {
            id: 1,
            todo: "Call the plumber".to_string(),
            todo_extra: Some("ask about\nthe boiler".to_string()),
            deadline: Some("2025-03-11".to_string()),
            important: true,
            position: 0,
            list_id: Some(1),
        }
    }

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_collapsed_item_is_one_line() {
        let item = item();
        let icons = IconService::default();
        let display = DisplayConfig::default();
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let view = TodoItemView {
            item: &item,
            state: RowState::default(),
            icons: &icons,
            display: &display,
            today,
        };

        assert_eq!(view.render().height(), 1);
        let title = text_of(&view.title_line());
        assert!(title.starts_with("[ ] * Call the plumber"));
        assert!(title.ends_with("@ tomorrow"));
    }

    #[test]
    fn test_expanded_item_shows_extra_lines() {
        let item = item();
        let icons = IconService::default();
        let display = DisplayConfig::default();
        let view = TodoItemView {
            item: &item,
            state: RowState {
                expanded: true,
                ..RowState::default()
            },
            icons: &icons,
            display: &display,
            today: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        };

        assert_eq!(view.render().height(), 3);
    }

    #[test]
    fn test_checked_item_is_crossed_out() {
        let item = item();
        let icons = IconService::default();
        let display = DisplayConfig::default();
        let view = TodoItemView {
            item: &item,
            state: RowState {
                checked: true,
                ..RowState::default()
            },
            icons: &icons,
            display: &display,
            today: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        };

        let line = view.title_line();
        let text_span = line
            .spans
            .iter()
            .find(|s| s.content == "Call the plumber")
            .unwrap();
        assert!(text_span.style.add_modifier.contains(Modifier::CROSSED_OUT));
        assert!(text_of(&line).starts_with("[X]"));
    }
}
