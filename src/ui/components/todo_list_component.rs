//! Item list for the selected list.
//!
//! Besides navigation and per-item shortcuts this component owns the
//! keyboard equivalent of drag and drop: `m` grabs the selected item, `j`/`k`
//! move it, `m`/Enter drops it and Esc puts it back. A drop that changed the
//! order emits the full id sequence; a drop at the origin emits nothing.
//! Checked and expanded flags are kept here and never sent anywhere.

use crate::api::TodoItem;
use crate::config::DisplayConfig;
use crate::icons::IconService;
use crate::ordering;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::components::todo_item_component::{RowState, TodoItemView};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};
use std::collections::HashSet;

/// An item picked up for reordering
#[derive(Debug, Clone)]
struct Grab {
    id: i64,
    original_order: Vec<i64>,
}

pub struct TodoListComponent {
    pub todos: Vec<TodoItem>,
    pub list_id: Option<i64>,
    pub list_name: String,
    pub selected_index: usize,
    pub icons: IconService,
    pub display: DisplayConfig,
    checked: HashSet<i64>,
    /// Items whose expansion differs from `display.expand_extra_by_default`
    toggled: HashSet<i64>,
    grab: Option<Grab>,
    list_state: ListState,
    scrollbar_helper: ScrollbarHelper,
    last_area: Rect,
}

impl Default for TodoListComponent {
    fn default() -> Self {
        Self::new(DisplayConfig::default())
    }
}

impl TodoListComponent {
    pub fn new(display: DisplayConfig) -> Self {
        Self {
            todos: Vec::new(),
            list_id: None,
            list_name: String::new(),
            selected_index: 0,
            icons: IconService::default(),
            display,
            checked: HashSet::new(),
            toggled: HashSet::new(),
            grab: None,
            list_state: ListState::default(),
            scrollbar_helper: ScrollbarHelper::new(),
            last_area: Rect::default(),
        }
    }

    /// Replace the items shown. An in-progress grab is abandoned because the
    /// server order now wins.
    pub fn update_data(&mut self, todos: Vec<TodoItem>, list_id: Option<i64>, list_name: String) {
        if list_id != self.list_id {
            self.selected_index = 0;
        } else if let Some(id) = self.selected_id() {
            // Keep the cursor on the same item when it moved
            if let Some(index) = todos.iter().position(|t| t.id == id) {
                self.selected_index = index;
            }
        }

        let ids: HashSet<i64> = todos.iter().map(|t| t.id).collect();
        self.checked.retain(|id| ids.contains(id));
        self.toggled.retain(|id| ids.contains(id));

        self.grab = None;
        self.todos = todos;
        self.list_id = list_id;
        self.list_name = list_name;
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.todos.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.todos.len() {
                self.selected_index = self.todos.len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn selected_todo(&self) -> Option<&TodoItem> {
        self.todos.get(self.selected_index)
    }

    fn selected_id(&self) -> Option<i64> {
        self.selected_todo().map(|t| t.id)
    }

    pub fn is_grabbing(&self) -> bool {
        self.grab.is_some()
    }

    pub fn is_checked(&self, id: i64) -> bool {
        self.checked.contains(&id)
    }

    pub fn is_expanded(&self, id: i64) -> bool {
        self.display.expand_extra_by_default != self.toggled.contains(&id)
    }

    fn toggle_checked(&mut self) {
        if let Some(id) = self.selected_id() {
            if !self.checked.remove(&id) {
                self.checked.insert(id);
            }
        }
    }

    fn toggle_expanded(&mut self) {
        if let Some(id) = self.selected_id() {
            if !self.toggled.remove(&id) {
                self.toggled.insert(id);
            }
        }
    }

    fn start_grab(&mut self) {
        if let Some(id) = self.selected_id() {
            self.grab = Some(Grab {
                id,
                original_order: ordering::ordered_ids(&self.todos),
            });
        }
    }

    /// Move the grabbed item one row up (`-1`) or down (`+1`)
    fn move_grabbed(&mut self, delta: isize) {
        if self.grab.is_none() || self.todos.is_empty() {
            return;
        }
        let from = self.selected_index;
        let to = from as isize + delta;
        if to < 0 || to as usize >= self.todos.len() {
            return;
        }
        if ordering::move_item(&mut self.todos, from, to as usize) {
            self.selected_index = to as usize;
            self.update_list_state();
        }
    }

    fn drop_grabbed(&mut self) -> Action {
        let Some(grab) = self.grab.take() else {
            return Action::None;
        };

        let ordered_ids = ordering::ordered_ids(&self.todos);
        if ordered_ids == grab.original_order {
            return Action::None;
        }

        log::debug!("Dropped item {} at position {}", grab.id, self.selected_index);
        Action::ReorderTodos {
            list_id: self.list_id,
            ordered_ids,
        }
    }

    fn cancel_grab(&mut self) {
        if let Some(grab) = self.grab.take() {
            ordering::apply_order(&mut self.todos, &grab.original_order);
            if let Some(index) = self.todos.iter().position(|t| t.id == grab.id) {
                self.selected_index = index;
            }
            self.update_list_state();
        }
    }

    fn handle_grab_keys(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_grabbed(1);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_grabbed(-1);
                Action::None
            }
            KeyCode::Char('m') | KeyCode::Enter | KeyCode::Char(' ') => self.drop_grabbed(),
            KeyCode::Esc => {
                self.cancel_grab();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn row_state(&self, index: usize, item: &TodoItem) -> RowState {
        RowState {
            selected: index == self.selected_index,
            checked: self.is_checked(item.id),
            expanded: self.is_expanded(item.id),
            grabbed: self.grab.as_ref().is_some_and(|g| g.id == item.id),
        }
    }

    /// Map a clicked row to an item index, accounting for multi-line items
    fn index_at_row(&self, row: u16) -> Option<usize> {
        let area = self.last_area;
        if row <= area.y || row + 1 >= area.y + area.height {
            return None;
        }
        let mut remaining = (row - area.y - 1) as usize;
        for (index, item) in self.todos.iter().enumerate().skip(self.list_state.offset()) {
            let height = if self.is_expanded(item.id) {
                1 + item.extra_text().map(|t| t.lines().count()).unwrap_or(0)
            } else {
                1
            };
            if remaining < height {
                return Some(index);
            }
            remaining -= height;
        }
        None
    }

    fn title(&self) -> String {
        let mut title = format!("{} {}", self.icons.todos_title(), self.list_name);
        if self.is_grabbing() {
            title.push_str(" (moving: j/k, m to drop, Esc to cancel)");
        }
        title
    }
}

impl Component for TodoListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.is_grabbing() {
            return self.handle_grab_keys(key);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousTodo,
            KeyCode::Down | KeyCode::Char('j') => Action::NextTodo,
            KeyCode::Char('a') => Action::ShowDialog(DialogType::TodoCreation { list_id: self.list_id }),
            KeyCode::Char('e') => match self.selected_todo() {
                Some(todo) => Action::ShowDialog(DialogType::TodoEdit {
                    id: todo.id,
                    text: todo.todo.clone(),
                }),
                None => Action::None,
            },
            KeyCode::Char('d') => match self.selected_id() {
                Some(id) => Action::DeleteTodo(id),
                None => Action::None,
            },
            KeyCode::Char('i') => match self.selected_id() {
                Some(id) => Action::ToggleImportance(id),
                None => Action::None,
            },
            KeyCode::Char('x') | KeyCode::Char(' ') => {
                self.toggle_checked();
                Action::None
            }
            KeyCode::Enter | KeyCode::Char('o') => {
                self.toggle_expanded();
                Action::None
            }
            KeyCode::Char('m') => {
                self.start_grab();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !LayoutManager::contains(self.last_area, mouse.column, mouse.row) || self.is_grabbing() {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.index_at_row(mouse.row) {
                    self.selected_index = index;
                    self.update_list_state();
                }
                Action::None
            }
            MouseEventKind::ScrollUp => Action::PreviousTodo,
            MouseEventKind::ScrollDown => Action::NextTodo,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTodo => {
                if !self.todos.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.todos.len();
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousTodo => {
                if !self.todos.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.todos.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
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
        self.last_area = rect;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(self.title())
            .title_style(Style::default().fg(Color::White))
            .border_style(Style::default().fg(Color::DarkGray));

        if self.todos.is_empty() {
            let empty = List::new(vec![ListItem::new("No items yet. Press 'a' to create one.")])
                .block(block)
                .style(Style::default().fg(Color::Gray));
            f.render_widget(empty, rect);
            return;
        }

        let today = datetime::today();
        let items: Vec<ListItem> = self
            .todos
            .iter()
            .enumerate()
            .map(|(index, item)| {
                TodoItemView {
                    item,
                    state: self.row_state(index, item),
                    icons: &self.icons,
                    display: &self.display,
                    today,
                }
                .render()
            })
            .collect();

        let total_rows: usize = items.iter().map(|i| i.height()).sum();
        let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, total_rows);
        self.scrollbar_helper.update_state(
            self.todos.len(),
            self.selected_index,
            Some(rect.height.saturating_sub(2) as usize),
        );

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, list_area, &mut self.list_state);
        self.scrollbar_helper.render(f, scrollbar_area);
    }
}
