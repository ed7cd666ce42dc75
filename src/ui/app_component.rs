use crate::api::{ReorderRequest, TodoApi, TodoItem, TodoList};
use crate::config::Config;
use crate::constants::{
    ALERT_DELETE_LIST, ALERT_DELETE_TODO, ERROR_LAST_LIST, ERROR_LISTS_DISABLED, FLAT_MODE_LIST_NAME, LOADING,
    LOG_REORDER_FAILED,
};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ordering;
use crate::ui::components::{AlertComponent, DialogComponent, SidebarComponent, StatusBar, TodoListComponent};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    task_manager::{LoadRequest, RefreshPolicy, TaskManager},
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Authoritative in-memory copy of the server state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub lists: Vec<TodoList>,
    pub todos: Vec<TodoItem>,
    pub selected_list: Option<i64>,
    pub loading: bool,
    /// Generation of the newest requested load; older results are dropped
    pub generation: u64,
}

impl AppState {
    pub fn selected_list_name(&self) -> String {
        self.selected_list
            .and_then(|id| self.lists.iter().find(|l| l.id == id))
            .map(|l| l.name.clone())
            .unwrap_or_else(|| FLAT_MODE_LIST_NAME.to_string())
    }
}

pub struct AppComponent {
    // Component composition
    sidebar: SidebarComponent,
    todo_list: TodoListComponent,
    dialog: DialogComponent,
    alert: AlertComponent,

    // Application state
    state: AppState,
    /// Components need fresh data on the next sync
    data_dirty: bool,

    // Services
    api: Arc<dyn TodoApi>,
    config: Config,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(api: Arc<dyn TodoApi>, config: Config, logger: Logger) -> Self {
        let icons = IconService::new(config.ui.icon_theme);
        let lists_enabled = config.server.lists_enabled;

        let mut sidebar = SidebarComponent::new(lists_enabled);
        sidebar.icons = icons.clone();
        let mut todo_list = TodoListComponent::new(config.display.clone());
        todo_list.icons = icons.clone();
        let mut dialog = DialogComponent::new(logger);
        dialog.icons = icons.clone();
        let mut alert = AlertComponent::new();
        alert.icons = icons;

        let (task_manager, background_action_rx) = TaskManager::new();

        Self {
            sidebar,
            todo_list,
            dialog,
            alert,
            state: AppState::default(),
            data_dirty: true,
            api,
            config,
            task_manager,
            background_action_rx,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Load lists and items on startup
    pub fn trigger_initial_load(&mut self) {
        log::info!("Loading data from {}", self.config.server.base_url);
        self.request_load();
    }

    /// Spawn a snapshot load, superseding any load still in flight
    fn request_load(&mut self) {
        self.state.generation += 1;
        self.state.loading = true;

        let request = LoadRequest {
            generation: self.state.generation,
            selected_list: self.state.selected_list,
            lists_enabled: self.config.server.lists_enabled,
            default_list: self.config.ui.default_list.clone(),
        };
        self.task_manager.spawn_data_load(self.api.clone(), request);
    }

    /// Push the current state into the child components
    fn sync_component_data(&mut self) {
        if !self.data_dirty {
            return;
        }
        self.data_dirty = false;

        self.sidebar
            .update_data(self.state.lists.clone(), self.state.selected_list, self.state.todos.len());

        let list_id = if self.config.server.lists_enabled {
            self.state.selected_list
        } else {
            None
        };
        self.todo_list
            .update_data(self.state.todos.clone(), list_id, self.state.selected_list_name());
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('?') | KeyCode::Char('h') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('r') => {
                log::info!("Manual reload requested");
                Action::RefreshData
            }
            KeyCode::Char('c') => Action::CycleIconTheme,
            _ => Action::None,
        }
    }

    /// Put deletes behind the confirmation banner when configured to.
    /// A list delete that will be refused anyway is passed through.
    fn confirm_guard(&self, action: Action) -> Action {
        if !self.config.ui.confirm_delete {
            return action;
        }

        match action {
            Action::DeleteTodo(_) => Action::ShowAlert {
                message: ALERT_DELETE_TODO.to_string(),
                confirm: Box::new(action),
            },
            Action::DeleteList(_) if self.state.lists.len() > 1 => Action::ShowAlert {
                message: ALERT_DELETE_LIST.to_string(),
                confirm: Box::new(action),
            },
            _ => action,
        }
    }

    fn spawn_mutation<F, Fut>(&mut self, description: String, policy: RefreshPolicy, call: F)
    where
        F: FnOnce(Arc<dyn TodoApi>) -> Fut,
        Fut: std::future::Future<Output = crate::api::ApiResult<()>> + Send + 'static,
    {
        log::debug!("{}", description);
        let operation = call(self.api.clone());
        self.task_manager.spawn_mutation(operation, description, policy);
    }

    fn show_info(&mut self, message: &str) {
        log::warn!("{}", message);
        self.dialog.open(DialogType::Info(message.to_string()));
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::RefreshData => {
                self.request_load();
                Action::None
            }
            Action::SelectList(Some(id)) => {
                if self.state.selected_list != Some(id) {
                    self.state.selected_list = Some(id);
                    self.request_load();
                }
                Action::None
            }
            Action::DataLoaded {
                generation,
                lists,
                selected_list,
                todos,
            } => {
                if generation != self.state.generation {
                    log::debug!(
                        "Discarding stale load (generation {}, latest {})",
                        generation,
                        self.state.generation
                    );
                    return Action::None;
                }
                self.state.lists = lists;
                self.state.selected_list = selected_list;
                self.state.todos = todos;
                self.state.loading = false;
                self.data_dirty = true;
                Action::None
            }
            Action::DataLoadFailed { generation, .. } => {
                // The task already logged the error; prior state is kept
                if generation == self.state.generation {
                    self.state.loading = false;
                }
                Action::None
            }
            Action::CreateTodo(mut new_todo) => {
                if self.config.server.lists_enabled {
                    new_todo.list_id = new_todo.list_id.or(self.state.selected_list);
                } else {
                    new_todo.list_id = None;
                }
                let description = format!("Create item '{}'", new_todo.todo);
                self.spawn_mutation(description, RefreshPolicy::AfterSuccess, move |api| async move {
                    api.create_todo(&new_todo).await
                });
                Action::None
            }
            Action::EditTodo { id, text } => {
                let description = format!("Edit item {}", id);
                self.spawn_mutation(description, RefreshPolicy::AfterSuccess, move |api| async move {
                    api.edit_todo(id, &text).await
                });
                Action::None
            }
            Action::DeleteTodo(id) => {
                let description = format!("Delete item {}", id);
                self.spawn_mutation(description, RefreshPolicy::AfterSuccess, move |api| async move {
                    api.delete_todo(id).await
                });
                Action::None
            }
            Action::ToggleImportance(id) => {
                let description = format!("Toggle importance of item {}", id);
                self.spawn_mutation(description, RefreshPolicy::AfterSuccess, move |api| async move {
                    api.toggle_importance(id).await
                });
                Action::None
            }
            Action::ReorderTodos { list_id, ordered_ids } => {
                // Optimistic: the new order is shown before the server answers
                ordering::apply_order(&mut self.state.todos, &ordered_ids);
                self.data_dirty = true;

                // A load already in flight still carries the old order: drop its
                // result and refetch once the new order is saved
                let policy = if self.state.loading {
                    self.state.generation += 1;
                    RefreshPolicy::Always
                } else {
                    RefreshPolicy::OnFailure
                };

                let request = ReorderRequest {
                    list_id,
                    todo_ids: ordered_ids,
                };
                let description = format!("Save order of {} items", request.todo_ids.len());
                self.spawn_mutation(description, policy, move |api| async move {
                    api.reorder_todos(&request)
                        .await
                        .inspect_err(|_| log::warn!("{}", LOG_REORDER_FAILED))
                });
                Action::None
            }
            Action::CreateList { name } => {
                if !self.config.server.lists_enabled {
                    self.show_info(ERROR_LISTS_DISABLED);
                    return Action::None;
                }
                let description = format!("Create list '{}'", name);
                self.spawn_mutation(description, RefreshPolicy::AfterSuccess, move |api| async move {
                    api.create_list(&name).await
                });
                Action::None
            }
            Action::RenameList { id, name } => {
                if !self.config.server.lists_enabled {
                    self.show_info(ERROR_LISTS_DISABLED);
                    return Action::None;
                }
                let description = format!("Rename list {} to '{}'", id, name);
                self.spawn_mutation(description, RefreshPolicy::AfterSuccess, move |api| async move {
                    api.rename_list(id, &name).await
                });
                Action::None
            }
            Action::DeleteList(id) => {
                if !self.config.server.lists_enabled {
                    self.show_info(ERROR_LISTS_DISABLED);
                    return Action::None;
                }
                if self.state.lists.len() <= 1 {
                    self.show_info(ERROR_LAST_LIST);
                    return Action::None;
                }
                let description = format!("Delete list {}", id);
                self.spawn_mutation(description, RefreshPolicy::AfterSuccess, move |api| async move {
                    api.delete_list(id).await
                });
                Action::None
            }
            other => other,
        }
    }

    /// Drain results of finished background tasks
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        // Clean up first: a task counted as finished has already sent its result
        let finished = self.task_manager.cleanup_finished_tasks();
        if finished > 0 {
            log::trace!("Cleaned up {} finished tasks", finished);
        }

        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            log::debug!("Background: received {}", action.name());
            actions.push(action);
        }
        actions
    }

    /// Run an action through the components and then the app logic
    pub fn apply_action(&mut self, action: Action) {
        let action = self.update(action);
        self.handle_app_action(action);
        self.sync_component_data();
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => {
                if self.alert.is_visible() {
                    // A confirmed action must not be wrapped again
                    self.alert.handle_key_events(key)
                } else if self.dialog.is_visible() {
                    self.dialog.handle_key_events(key)
                } else if self.todo_list.is_grabbing() {
                    self.todo_list.handle_key_events(key)
                } else {
                    let sidebar_action = self.sidebar.handle_key_events(key);
                    let action = if !matches!(sidebar_action, Action::None) {
                        sidebar_action
                    } else {
                        let list_action = self.todo_list.handle_key_events(key);
                        if !matches!(list_action, Action::None) {
                            list_action
                        } else {
                            self.handle_global_key(key)
                        }
                    };
                    self.confirm_guard(action)
                }
            }
            EventType::Mouse(mouse) => {
                if self.alert.is_visible() || self.dialog.is_visible() {
                    Action::None
                } else {
                    let sidebar_action = self.sidebar.handle_mouse_events(mouse);
                    if !matches!(sidebar_action, Action::None) {
                        sidebar_action
                    } else {
                        self.todo_list.handle_mouse_events(mouse)
                    }
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.apply_action(action);
        Ok(())
    }

    fn render_loading(&self, f: &mut Frame, rect: Rect) {
        let popup_area = LayoutManager::centered_rect_lines(30, 3, rect);
        let content = Paragraph::new(Line::from(Span::styled(
            format!("⟳ {}", LOADING),
            Style::default().fg(Color::Yellow),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(Style::default().fg(Color::Yellow)));

        f.render_widget(Clear, popup_area);
        f.render_widget(content, popup_area);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.alert.update(action);
        let action = self.dialog.update(action);
        let action = self.sidebar.update(action);
        self.todo_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.sync_component_data();

        let (content, status) = LayoutManager::main_layout(rect);
        let (sidebar_area, list_area) = LayoutManager::top_pane_layout(content, self.config.ui.sidebar_width);

        self.sidebar.render(f, sidebar_area);
        self.todo_list.render(f, list_area);
        StatusBar::render(f, status, self.state.loading, self.todo_list.is_grabbing());

        // Only the first load blocks the view; later ones refresh silently
        if self.state.loading && self.state.lists.is_empty() && self.state.todos.is_empty() {
            self.render_loading(f, content);
        }

        self.dialog.render(f, rect);
        self.alert.render(f, list_area);
    }
}
