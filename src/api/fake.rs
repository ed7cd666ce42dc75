//! In-memory [`TodoApi`] used by unit tests

use std::sync::Mutex;

use async_trait::async_trait;

use super::{ApiError, ApiResult, NewTodo, ReorderRequest, TodoApi, TodoItem, TodoList};

#[derive(Default)]
struct State {
    lists: Vec<TodoList>,
    todos: Vec<TodoItem>,
    next_id: i64,
    calls: Vec<String>,
    fail_reorder: bool,
    fail_all: bool,
}

#[derive(Default)]
pub struct FakeApi {
    state: Mutex<State>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                next_id: 100,
                ..State::default()
            }),
        }
    }

    pub fn with_list(self, id: i64, name: &str) -> Self {
        self.state.lock().unwrap().lists.push(TodoList {
            id,
            name: name.to_string(),
            todo_count: 0,
        });
        self
    }

    pub fn with_todo(self, id: i64, list_id: Option<i64>, text: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            let position = state.todos.iter().filter(|t| t.list_id == list_id).count() as i64;
            state.todos.push(TodoItem {
                id,
                todo: text.to_string(),
                todo_extra: None,
                deadline: None,
                important: false,
                position,
                list_id,
            });
        }
        self
    }

    pub fn set_fail_reorder(&self, fail: bool) {
        self.state.lock().unwrap().fail_reorder = fail;
    }

    pub fn set_fail_all(&self, fail: bool) {
        self.state.lock().unwrap().fail_all = fail;
    }

    /// Every request received so far, formatted as `"<op> <args>"`
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn todos(&self) -> Vec<TodoItem> {
        self.state.lock().unwrap().todos.clone()
    }

    fn record(&self, call: String) -> ApiResult<std::sync::MutexGuard<'_, State>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if state.fail_all {
            return Err(ApiError::Status {
                status: 500,
                message: "fake failure".to_string(),
            });
        }
        Ok(state)
    }
}

#[async_trait]
impl TodoApi for FakeApi {
    async fn get_lists(&self) -> ApiResult<Vec<TodoList>> {
        let state = self.record("get_lists".to_string())?;
        Ok(state
            .lists
            .iter()
            .map(|list| TodoList {
                todo_count: state.todos.iter().filter(|t| t.list_id == Some(list.id)).count() as i64,
                ..list.clone()
            })
            .collect())
    }

    async fn create_list(&self, name: &str) -> ApiResult<()> {
        let mut state = self.record(format!("create_list {}", name))?;
        let id = state.next_id;
        state.next_id += 1;
        state.lists.push(TodoList {
            id,
            name: name.to_string(),
            todo_count: 0,
        });
        Ok(())
    }

    async fn rename_list(&self, id: i64, name: &str) -> ApiResult<()> {
        let mut state = self.record(format!("rename_list {} {}", id, name))?;
        let list = state
            .lists
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| ApiError::NotFound("List not found".to_string()))?;
        list.name = name.to_string();
        Ok(())
    }

    async fn delete_list(&self, id: i64) -> ApiResult<()> {
        let mut state = self.record(format!("delete_list {}", id))?;
        state.lists.retain(|l| l.id != id);
        state.todos.retain(|t| t.list_id != Some(id));
        Ok(())
    }

    async fn get_todos(&self, list_id: Option<i64>) -> ApiResult<Vec<TodoItem>> {
        let state = self.record(format!("get_todos {:?}", list_id))?;
        let mut todos: Vec<TodoItem> = state
            .todos
            .iter()
            .filter(|t| list_id.is_none() || t.list_id == list_id)
            .cloned()
            .collect();
        crate::ordering::sort_by_position(&mut todos);
        Ok(todos)
    }

    async fn create_todo(&self, todo: &NewTodo) -> ApiResult<()> {
        let mut state = self.record(format!("create_todo {}", todo.todo))?;
        let id = state.next_id;
        state.next_id += 1;
        let position = state.todos.iter().filter(|t| t.list_id == todo.list_id).count() as i64;
        state.todos.push(TodoItem {
            id,
            todo: todo.todo.clone(),
            todo_extra: Some(todo.todo_extra.clone()),
            deadline: todo.deadline.clone(),
            important: todo.important,
            position,
            list_id: todo.list_id,
        });
        Ok(())
    }

    async fn edit_todo(&self, id: i64, text: &str) -> ApiResult<()> {
        let mut state = self.record(format!("edit_todo {} {}", id, text))?;
        let item = state
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ApiError::NotFound("Todo not found".to_string()))?;
        item.todo = text.to_string();
        Ok(())
    }

    async fn toggle_importance(&self, id: i64) -> ApiResult<()> {
        let mut state = self.record(format!("toggle_importance {}", id))?;
        let item = state
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ApiError::NotFound("Todo not found".to_string()))?;
        item.important = !item.important;
        Ok(())
    }

    async fn delete_todo(&self, id: i64) -> ApiResult<()> {
        let mut state = self.record(format!("delete_todo {}", id))?;
        let before = state.todos.len();
        state.todos.retain(|t| t.id != id);
        if state.todos.len() == before {
            return Err(ApiError::NotFound("Todo not found".to_string()));
        }
        Ok(())
    }

    async fn reorder_todos(&self, request: &ReorderRequest) -> ApiResult<()> {
        let mut state = self.record(format!("reorder_todos {:?}", request.todo_ids))?;
        if state.fail_reorder {
            return Err(ApiError::Status {
                status: 500,
                message: "reorder rejected".to_string(),
            });
        }
        for (position, id) in request.todo_ids.iter().enumerate() {
            if let Some(item) = state.todos.iter_mut().find(|t| t.id == *id) {
                item.position = position as i64;
            }
        }
        Ok(())
    }
}
