use crate::api::{NewTodo, TodoItem, TodoList};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    SelectList(Option<i64>),
    NextTodo,
    PreviousTodo,

    // Item operations
    CreateTodo(NewTodo),
    EditTodo {
        id: i64,
        text: String,
    },
    DeleteTodo(i64),
    ToggleImportance(i64),
    ReorderTodos {
        list_id: Option<i64>,
        ordered_ids: Vec<i64>,
    },

    // List operations
    CreateList {
        name: String,
    },
    RenameList {
        id: i64,
        name: String,
    },
    DeleteList(i64),

    // Data loading
    RefreshData,
    DataLoaded {
        generation: u64,
        lists: Vec<TodoList>,
        selected_list: Option<i64>,
        todos: Vec<TodoItem>,
    },
    DataLoadFailed {
        generation: u64,
        error: String,
    },

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    ShowAlert {
        message: String,
        confirm: Box<Action>,
    },
    HideAlert,
    CycleIconTheme,

    // App control
    Quit,
    None,
}

impl Action {
    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectList(_) => "SelectList",
            Self::NextTodo => "NextTodo",
            Self::PreviousTodo => "PreviousTodo",
            Self::CreateTodo(_) => "CreateTodo",
            Self::EditTodo { .. } => "EditTodo",
            Self::DeleteTodo(_) => "DeleteTodo",
            Self::ToggleImportance(_) => "ToggleImportance",
            Self::ReorderTodos { .. } => "ReorderTodos",
            Self::CreateList { .. } => "CreateList",
            Self::RenameList { .. } => "RenameList",
            Self::DeleteList(_) => "DeleteList",
            Self::RefreshData => "RefreshData",
            Self::DataLoaded { .. } => "DataLoaded",
            Self::DataLoadFailed { .. } => "DataLoadFailed",
            Self::ShowDialog(_) => "ShowDialog",
            Self::HideDialog => "HideDialog",
            Self::ShowAlert { .. } => "ShowAlert",
            Self::HideAlert => "HideAlert",
            Self::CycleIconTheme => "CycleIconTheme",
            Self::Quit => "Quit",
            Self::None => "None",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    TodoCreation { list_id: Option<i64> },
    TodoEdit { id: i64, text: String },
    ListCreation,
    ListRename { id: i64, name: String },
    Info(String),
    Help,
    Logs,
}
