use super::actions::Action;
use crate::api::{ApiResult, TodoApi, TodoItem, TodoList};
use crate::constants::LOG_LOAD_FAILED;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// When a finished mutation should trigger a fresh snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPolicy {
    /// Refetch once the call succeeds
    AfterSuccess,
    /// The local state is already correct; refetch only to roll back a failure
    OnFailure,
    /// Refetch whatever the outcome
    Always,
}

impl RefreshPolicy {
    fn refresh_after(self, succeeded: bool) -> bool {
        match self {
            Self::AfterSuccess => succeeded,
            Self::OnFailure => !succeeded,
            Self::Always => true,
        }
    }
}

/// Parameters of a snapshot load
#[derive(Debug, Clone)]
pub struct LoadRequest {
    pub generation: u64,
    pub selected_list: Option<i64>,
    pub lists_enabled: bool,
    pub default_list: String,
}

/// Lists plus the items of the selected list
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub lists: Vec<TodoList>,
    pub selected_list: Option<i64>,
    pub todos: Vec<TodoItem>,
}

/// Pick the list to show: the current one if it still exists, then the
/// configured default (by name, case-insensitive), then the first list.
pub fn resolve_selection(lists: &[TodoList], current: Option<i64>, default_list: &str) -> Option<i64> {
    if let Some(id) = current {
        if lists.iter().any(|l| l.id == id) {
            return Some(id);
        }
    }

    let wanted = default_list.trim();
    if !wanted.is_empty() {
        if let Some(list) = lists.iter().find(|l| l.name.eq_ignore_ascii_case(wanted)) {
            return Some(list.id);
        }
    }

    lists.first().map(|l| l.id)
}

/// Fetch lists and the items of the resolved selection
pub async fn load_snapshot(api: &dyn TodoApi, request: &LoadRequest) -> ApiResult<Snapshot> {
    if !request.lists_enabled {
        let todos = api.get_todos(None).await?;
        return Ok(Snapshot {
            lists: Vec::new(),
            selected_list: None,
            todos,
        });
    }

    let lists = api.get_lists().await?;
    let selected_list = resolve_selection(&lists, request.selected_list, &request.default_list);
    let todos = match selected_list {
        Some(id) => api.get_todos(Some(id)).await?,
        None => Vec::new(),
    };

    Ok(Snapshot {
        lists,
        selected_list,
        todos,
    })
}

pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    fn track(&mut self, handle: JoinHandle<()>, description: String) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
        task_id
    }

    /// Spawn a snapshot load; the result comes back as `DataLoaded` or `DataLoadFailed`
    pub fn spawn_data_load(&mut self, api: Arc<dyn TodoApi>, request: LoadRequest) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = format!("Load data (generation {})", request.generation);

        let handle = tokio::spawn(async move {
            let action = match load_snapshot(api.as_ref(), &request).await {
                Ok(snapshot) => {
                    log::debug!(
                        "Loaded {} lists and {} items (generation {})",
                        snapshot.lists.len(),
                        snapshot.todos.len(),
                        request.generation
                    );
                    Action::DataLoaded {
                        generation: request.generation,
                        lists: snapshot.lists,
                        selected_list: snapshot.selected_list,
                        todos: snapshot.todos,
                    }
                }
                Err(e) => {
                    log::error!("{}: {}", LOG_LOAD_FAILED, e);
                    Action::DataLoadFailed {
                        generation: request.generation,
                        error: e.to_string(),
                    }
                }
            };
            let _ = action_sender.send(action);
        });

        self.track(handle, description)
    }

    /// Spawn a single API mutation and request a refresh according to `policy`
    pub fn spawn_mutation<Fut>(&mut self, operation: Fut, description: String, policy: RefreshPolicy) -> TaskId
    where
        Fut: Future<Output = ApiResult<()>> + Send + 'static,
    {
        let action_sender = self.action_sender.clone();
        let desc_for_task = description.clone();

        let handle = tokio::spawn(async move {
            match operation.await {
                Ok(()) => {
                    log::info!("{}: done", desc_for_task);
                    if policy.refresh_after(true) {
                        let _ = action_sender.send(Action::RefreshData);
                    }
                }
                Err(e) => {
                    log::error!("{} failed: {}", desc_for_task, e);
                    if policy.refresh_after(false) {
                        let _ = action_sender.send(Action::RefreshData);
                    }
                }
            }
        });

        self.track(handle, description)
    }

    /// Drop bookkeeping for tasks that have finished; returns how many were removed
    pub fn cleanup_finished_tasks(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|_, task| !task.handle.is_finished());
        before - self.tasks.len()
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            log::debug!(
                "Cancelling task {} '{}' after {:?}",
                task.id,
                task.description,
                task.started_at.elapsed()
            );
            task.handle.abort();
        }
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.cancel_all_tasks();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;
    use crate::api::ApiError;

    fn lists() -> Vec<TodoList> {
        vec![
            TodoList {
                id: 1,
                name: "Home".to_string(),
                todo_count: 0,
            },
            TodoList {
                id: 2,
                name: "Work".to_string(),
                todo_count: 0,
            },
        ]
    }

    #[test]
    fn test_resolve_selection_keeps_current() {
        assert_eq!(resolve_selection(&lists(), Some(2), "home"), Some(2));
    }

    #[test]
    fn test_resolve_selection_falls_back_to_default_then_first() {
        assert_eq!(resolve_selection(&lists(), Some(9), "work"), Some(2));
        assert_eq!(resolve_selection(&lists(), None, ""), Some(1));
        assert_eq!(resolve_selection(&[], None, "work"), None);
    }

    #[tokio::test]
    async fn test_load_snapshot_lists_mode() {
        let api = FakeApi::new()
            .with_list(1, "Home")
            .with_list(2, "Work")
            .with_todo(10, Some(2), "write report")
            .with_todo(11, Some(1), "water plants");

        let request = LoadRequest {
            generation: 1,
            selected_list: None,
            lists_enabled: true,
            default_list: "Work".to_string(),
        };
        let snapshot = load_snapshot(&api, &request).await.unwrap();

        assert_eq!(snapshot.selected_list, Some(2));
        assert_eq!(snapshot.todos.len(), 1);
        assert_eq!(snapshot.todos[0].todo, "write report");
        assert_eq!(snapshot.lists[1].todo_count, 1);
    }

    #[tokio::test]
    async fn test_load_snapshot_flat_mode_skips_lists() {
        let api = FakeApi::new().with_todo(1, None, "buy milk");
        let request = LoadRequest {
            generation: 1,
            selected_list: None,
            lists_enabled: false,
            default_list: String::new(),
        };
        let snapshot = load_snapshot(&api, &request).await.unwrap();

        assert!(snapshot.lists.is_empty());
        assert_eq!(snapshot.todos.len(), 1);
        assert_eq!(api.calls(), vec!["get_todos None".to_string()]);
    }

    #[tokio::test]
    async fn test_mutation_failure_requests_refresh_only_on_failure_policy() {
        let (mut manager, mut rx) = TaskManager::new();

        manager.spawn_mutation(
            async { Err(ApiError::NotFound("gone".to_string())) },
            "Delete item".to_string(),
            RefreshPolicy::AfterSuccess,
        );
        manager.spawn_mutation(
            async { Err(ApiError::NotFound("gone".to_string())) },
            "Reorder".to_string(),
            RefreshPolicy::OnFailure,
        );

        let action = rx.recv().await.unwrap();
        assert_eq!(action, Action::RefreshData);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_always_policy_refreshes_after_success() {
        let (mut manager, mut rx) = TaskManager::new();

        manager.spawn_mutation(async { Ok(()) }, "Create item".to_string(), RefreshPolicy::OnFailure);
        manager.spawn_mutation(async { Ok(()) }, "Save order".to_string(), RefreshPolicy::Always);

        assert_eq!(rx.recv().await.unwrap(), Action::RefreshData);
        assert!(rx.try_recv().is_err());
    }
}
