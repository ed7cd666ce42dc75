//! Status bar component

use crate::constants::LOADING;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// One-line key hints, replaced by a notice while something is in flight
pub struct StatusBar;

impl StatusBar {
    pub fn text(loading: bool, grabbing: bool) -> &'static str {
        if loading {
            LOADING
        } else if grabbing {
            "j/k: move • m: drop • Esc: put back"
        } else {
            "a: add • e: edit • d: delete • i: important • m: move • r: reload • ?: help • q: quit"
        }
    }

    pub fn render(f: &mut Frame, area: Rect, loading: bool, grabbing: bool) {
        let color = if loading || grabbing { Color::Yellow } else { Color::Gray };

        let status_bar = Paragraph::new(Self::text(loading, grabbing))
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(color));

        f.render_widget(status_bar, area);
    }
}
