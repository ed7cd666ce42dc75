//! Scrolling for read-only dialogs (info, help, logs)

use crossterm::event::KeyCode;
use ratatui::widgets::ScrollbarState;

const PAGE: usize = 10;

#[derive(Debug, Default, Clone)]
pub struct ScrollState {
    pub offset: usize,
    pub scrollbar: ScrollbarState,
}

impl ScrollState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn scroll_up(&mut self) {
        self.set(self.offset.saturating_sub(1));
    }

    pub fn scroll_down(&mut self) {
        self.set(self.offset.saturating_add(1));
    }

    pub fn page_up(&mut self) {
        self.set(self.offset.saturating_sub(PAGE));
    }

    pub fn page_down(&mut self) {
        self.set(self.offset.saturating_add(PAGE));
    }

    pub fn to_top(&mut self) {
        self.set(0);
    }

    /// Rendering clamps the offset to the last full page
    pub fn to_bottom(&mut self) {
        self.set(usize::MAX);
    }

    fn set(&mut self, offset: usize) {
        self.offset = offset;
        self.scrollbar = self.scrollbar.position(offset);
    }

    /// Pull the offset back into range once the content size is known
    pub fn clamp(&mut self, total_lines: usize, visible_height: usize) -> usize {
        let max_scroll = total_lines.saturating_sub(visible_height);
        self.offset = self.offset.min(max_scroll);
        self.scrollbar = self
            .scrollbar
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(self.offset);
        self.offset
    }

    /// Apply a scroll key; returns whether the key was a scroll key
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Home => self.to_top(),
            KeyCode::End => self.to_bottom(),
            _ => return false,
        }
        true
    }
}
