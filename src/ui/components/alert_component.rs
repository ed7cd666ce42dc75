//! Confirmation banner.
//!
//! Holds a message and the action to run when the user confirms. Its only
//! logic is visibility: `y`/Enter hands the pending action back and hides,
//! `n`/Esc just hides.

use crate::icons::IconService;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Default)]
pub struct AlertComponent {
    message: String,
    pending: Option<Action>,
    pub icons: IconService,
}

impl AlertComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.pending.is_some()
    }

    pub fn show(&mut self, message: String, confirm: Action) {
        self.message = message;
        self.pending = Some(confirm);
    }

    pub fn hide(&mut self) {
        self.message.clear();
        self.pending = None;
    }
}

impl Component for AlertComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.is_visible() {
            return Action::None;
        }

        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                let confirmed = self.pending.take().unwrap_or(Action::None);
                self.hide();
                confirmed
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::HideAlert,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowAlert { message, confirm } => {
                self.show(message, *confirm);
                Action::None
            }
            Action::HideAlert => {
                self.hide();
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                action
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.is_visible() {
            return;
        }

        let area = LayoutManager::centered_rect_lines(50, 5, rect);
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!("{} Confirm", self.icons.warning()))
            .style(Style::default().fg(Color::Red));

        let text = vec![
            Line::from(Span::styled(self.message.clone(), Style::default().fg(Color::White))),
            Line::from(vec![
                Span::styled("y", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::styled(" Yes • ", Style::default().fg(Color::Gray)),
                Span::styled("n", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::styled(" No", Style::default().fg(Color::Gray)),
            ]),
        ];

        let paragraph = Paragraph::new(text).block(block).alignment(Alignment::Center);
        f.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_confirm_returns_pending_action() {
        let mut alert = AlertComponent::new();
        alert.update(Action::ShowAlert {
            message: "Delete?".to_string(),
            confirm: Box::new(Action::DeleteTodo(4)),
        });
        assert!(alert.is_visible());

        assert_eq!(alert.handle_key_events(key('y')), Action::DeleteTodo(4));
        assert!(!alert.is_visible());
    }

    #[test]
    fn test_dismiss_hides_without_action() {
        let mut alert = AlertComponent::new();
        alert.show("Delete?".to_string(), Action::DeleteList(2));

        let action = alert.handle_key_events(key('n'));
        assert_eq!(action, Action::HideAlert);
        alert.update(action);
        assert!(!alert.is_visible());
    }

    #[test]
    fn test_other_keys_are_swallowed() {
        let mut alert = AlertComponent::new();
        alert.show("Delete?".to_string(), Action::DeleteTodo(1));
        assert_eq!(alert.handle_key_events(key('d')), Action::None);
        assert!(alert.is_visible());
    }
}
