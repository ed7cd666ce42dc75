//! Sidebar listing the named lists.
//!
//! Shows every list with its cached item count and the current selection.
//! Selection, creation, renaming and deletion are emitted as actions; the app
//! decides what to do with them. Without named lists the sidebar shows a
//! single "All Todos" entry.

use crate::api::TodoList;
use crate::constants::FLAT_MODE_LIST_NAME;
use crate::icons::IconService;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{actions::Action, actions::DialogType, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

pub struct SidebarComponent {
    pub lists: Vec<TodoList>,
    pub selected: Option<i64>,
    pub lists_enabled: bool,
    pub icons: IconService,
    /// Total item count shown for the flat-mode entry
    flat_count: usize,
    list_state: ListState,
    scrollbar_helper: ScrollbarHelper,
    last_area: Rect,
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SidebarComponent {
    pub fn new(lists_enabled: bool) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            lists: Vec::new(),
            selected: None,
            lists_enabled,
            icons: IconService::default(),
            flat_count: 0,
            list_state,
            scrollbar_helper: ScrollbarHelper::new(),
            last_area: Rect::default(),
        }
    }

    pub fn update_data(&mut self, lists: Vec<TodoList>, selected: Option<i64>, flat_count: usize) {
        self.lists = lists;
        self.selected = selected;
        self.flat_count = flat_count;
        self.update_list_state();
    }

    fn entry_count(&self) -> usize {
        if self.lists_enabled {
            self.lists.len()
        } else {
            1
        }
    }

    fn selected_index(&self) -> Option<usize> {
        if !self.lists_enabled {
            return Some(0);
        }
        self.selected
            .and_then(|id| self.lists.iter().position(|l| l.id == id))
    }

    fn update_list_state(&mut self) {
        let index = self.selected_index();
        self.list_state.select(index);
        self.scrollbar_helper
            .update_state(self.entry_count(), index.unwrap_or(0), None);
    }

    pub fn selected_list(&self) -> Option<&TodoList> {
        self.selected
            .and_then(|id| self.lists.iter().find(|l| l.id == id))
    }

    fn select_index(&mut self, index: usize) -> Action {
        if !self.lists_enabled {
            return Action::None;
        }
        match self.lists.get(index) {
            Some(list) => {
                self.list_state.select(Some(index));
                Action::SelectList(Some(list.id))
            }
            None => Action::None,
        }
    }

    fn select_next(&mut self) -> Action {
        if self.lists.is_empty() {
            return Action::None;
        }
        let next = match self.selected_index() {
            Some(i) => (i + 1) % self.lists.len(),
            None => 0,
        };
        self.select_index(next)
    }

    fn select_previous(&mut self) -> Action {
        if self.lists.is_empty() {
            return Action::None;
        }
        let prev = match self.selected_index() {
            Some(0) | None => self.lists.len() - 1,
            Some(i) => i - 1,
        };
        self.select_index(prev)
    }

    fn render_entry(&self, name: &str, count: usize, selected: bool, width: u16) -> ListItem<'static> {
        let icon = self.icons.list();
        let count_text = count.to_string();
        // Borders, icon, spaces and count
        let name_width = (width as usize)
            .saturating_sub(2)
            .saturating_sub(icon.chars().count() + 2)
            .saturating_sub(count_text.len() + 1);

        let mut name: String = name.chars().take(name_width).collect();
        let padding = name_width.saturating_sub(name.chars().count());
        name.push_str(&" ".repeat(padding));

        let name_style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        ListItem::new(Line::from(vec![
            Span::styled(format!("{} ", icon), Style::default().fg(Color::Cyan)),
            Span::styled(name, name_style),
            Span::styled(format!(" {}", count_text), Style::default().fg(Color::DarkGray)),
        ]))
    }

    fn title(&self) -> String {
        let mut title = format!("{} Lists", self.icons.lists_title());
        if self.lists_enabled && self.lists.len() > 1 {
            title.push_str(" (D: delete)");
        }
        title
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('J') => self.select_next(),
            KeyCode::Char('K') => self.select_previous(),
            KeyCode::Down if key.modifiers.contains(KeyModifiers::SHIFT) => self.select_next(),
            KeyCode::Up if key.modifiers.contains(KeyModifiers::SHIFT) => self.select_previous(),
            KeyCode::Char('A') if self.lists_enabled => Action::ShowDialog(DialogType::ListCreation),
            KeyCode::Char('E') if self.lists_enabled => match self.selected_list() {
                Some(list) => Action::ShowDialog(DialogType::ListRename {
                    id: list.id,
                    name: list.name.clone(),
                }),
                None => Action::None,
            },
            KeyCode::Char('D') if self.lists_enabled => match self.selected_list() {
                Some(list) => Action::DeleteList(list.id),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let area = self.last_area;
        if !LayoutManager::contains(area, mouse.column, mouse.row) {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // Skip the top and bottom borders
                if mouse.row > area.y && mouse.row + 1 < area.y + area.height {
                    let clicked = self.list_state.offset() + (mouse.row - area.y - 1) as usize;
                    self.select_index(clicked)
                } else {
                    Action::None
                }
            }
            MouseEventKind::ScrollUp => self.select_previous(),
            MouseEventKind::ScrollDown => self.select_next(),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::SelectList(selected) => {
                self.selected = selected;
                self.update_list_state();
                Action::SelectList(selected)
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                action
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.last_area = rect;
        self.update_list_state();

        let items: Vec<ListItem> = if self.lists_enabled {
            self.lists
                .iter()
                .map(|list| {
                    self.render_entry(
                        &list.name,
                        list.todo_count.max(0) as usize,
                        Some(list.id) == self.selected,
                        rect.width,
                    )
                })
                .collect()
        } else {
            vec![self.render_entry(FLAT_MODE_LIST_NAME, self.flat_count, true, rect.width)]
        };

        let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, items.len());
        let available_height = rect.height.saturating_sub(2) as usize;
        let position = self.list_state.selected().unwrap_or(0);
        self.scrollbar_helper
            .update_state(items.len(), position, Some(available_height));

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(self.title())
                    .title_style(Style::default().fg(Color::White))
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray))
            .style(Style::default().fg(Color::White));

        f.render_stateful_widget(list, list_area, &mut self.list_state);
        self.scrollbar_helper.render(f, scrollbar_area);
    }
}
