//! Modal dialog component.
//!
//! Hosts the item creation form, the single-line edit dialogs (item text,
//! list name) and the read-only info, help and log dialogs. Input forms
//! validate on submit: blank text or an unparseable deadline leaves the form
//! open with an inline error and emits nothing. A valid submit closes the
//! dialog and emits exactly one action.

use crate::api::NewTodo;
use crate::constants::{ERROR_EMPTY_ENTRY, ERROR_EMPTY_LIST_NAME};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::dialogs::{list_dialogs, scroll_behavior::ScrollState, system_dialogs, todo_dialogs};
use crate::ui::components::input_field::InputField;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::utils::datetime;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

/// Focusable fields of the item creation form, in Tab order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Todo,
    Extra,
    Deadline,
    Important,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            Self::Todo => Self::Extra,
            Self::Extra => Self::Deadline,
            Self::Deadline => Self::Important,
            Self::Important => Self::Todo,
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::Todo => Self::Important,
            Self::Extra => Self::Todo,
            Self::Deadline => Self::Extra,
            Self::Important => Self::Deadline,
        }
    }
}

/// State of the item creation form
#[derive(Debug, Clone, Default)]
pub struct TodoForm {
    pub todo: InputField,
    pub extra: InputField,
    pub deadline: InputField,
    pub important: bool,
    pub focus: FormField,
    pub list_id: Option<i64>,
    pub error: Option<String>,
}

impl TodoForm {
    fn for_list(list_id: Option<i64>) -> Self {
        Self {
            list_id,
            ..Self::default()
        }
    }

    fn focused_input(&mut self) -> Option<&mut InputField> {
        match self.focus {
            FormField::Todo => Some(&mut self.todo),
            FormField::Extra => Some(&mut self.extra),
            FormField::Deadline => Some(&mut self.deadline),
            FormField::Important => None,
        }
    }

    /// Validate the form into a creation request
    fn to_new_todo(&self) -> Result<NewTodo, String> {
        if self.todo.is_blank() {
            return Err(ERROR_EMPTY_ENTRY.to_string());
        }
        let deadline = datetime::normalize_deadline_input(self.deadline.text(), datetime::today())?;

        Ok(NewTodo {
            todo: self.todo.text().trim().to_string(),
            todo_extra: self.extra.text().trim().to_string(),
            important: self.important,
            deadline,
            list_id: self.list_id,
        })
    }
}

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub form: TodoForm,
    /// Input of the single-line dialogs
    pub input: InputField,
    pub error: Option<String>,
    pub icons: IconService,
    scroll: ScrollState,
    logger: Logger,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new(Logger::new())
    }
}

impl DialogComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            dialog_type: None,
            form: TodoForm::default(),
            input: InputField::new(),
            error: None,
            icons: IconService::default(),
            scroll: ScrollState::default(),
            logger,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    /// Open a dialog, prefilling inputs from its payload
    pub fn open(&mut self, dialog_type: DialogType) {
        self.clear_dialog();
        match &dialog_type {
            DialogType::TodoCreation { list_id } => self.form = TodoForm::for_list(*list_id),
            DialogType::TodoEdit { text, .. } => self.input = InputField::with_text(text),
            DialogType::ListRename { name, .. } => self.input = InputField::with_text(name),
            _ => {}
        }
        self.dialog_type = Some(dialog_type);
    }

    pub fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.form = TodoForm::default();
        self.input.clear();
        self.error = None;
        self.scroll.reset();
    }

    /// Alt+Enter or Ctrl+J in the extra text field
    fn is_newline_key(&self, key: KeyEvent) -> bool {
        self.form.focus == FormField::Extra
            && match key.code {
                KeyCode::Enter => key.modifiers.contains(KeyModifiers::ALT),
                KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
                _ => false,
            }
    }

    fn handle_form_keys(&mut self, key: KeyEvent) -> Action {
        if self.is_newline_key(key) {
            self.form.extra.insert('\n');
            self.form.error = None;
            return Action::None;
        }

        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Enter => self.submit_form(),
            KeyCode::Tab => {
                self.form.focus = self.form.focus.next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.focus = self.form.focus.previous();
                Action::None
            }
            KeyCode::Char(' ') if self.form.focus == FormField::Important => {
                self.form.important = !self.form.important;
                Action::None
            }
            _ => {
                if let Some(input) = self.form.focused_input() {
                    if input.handle_key(key) {
                        self.form.error = None;
                    }
                }
                Action::None
            }
        }
    }

    fn submit_form(&mut self) -> Action {
        match self.form.to_new_todo() {
            Ok(new_todo) => {
                self.clear_dialog();
                Action::CreateTodo(new_todo)
            }
            Err(error) => {
                log::warn!("{}", error);
                self.form.error = Some(error);
                Action::None
            }
        }
    }

    fn handle_input_keys(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Enter => self.submit_input(),
            _ => {
                if self.input.handle_key(key) {
                    self.error = None;
                }
                Action::None
            }
        }
    }

    fn submit_input(&mut self) -> Action {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return Action::None;
        };

        if self.input.is_blank() {
            let message = match dialog_type {
                DialogType::ListCreation | DialogType::ListRename { .. } => ERROR_EMPTY_LIST_NAME,
                _ => ERROR_EMPTY_ENTRY,
            };
            log::warn!("{}", message);
            self.error = Some(message.to_string());
            return Action::None;
        }

        let text = self.input.text().trim().to_string();
        let action = match dialog_type {
            DialogType::TodoEdit { id, .. } => Action::EditTodo { id, text },
            DialogType::ListCreation => Action::CreateList { name: text },
            DialogType::ListRename { id, .. } => Action::RenameList { id, name: text },
            _ => Action::None,
        };
        self.clear_dialog();
        action
    }

    fn handle_scroll_keys(&mut self, key: KeyEvent, close_keys: &[KeyCode]) -> Action {
        if key.code == KeyCode::Esc || close_keys.contains(&key.code) {
            return Action::HideDialog;
        }
        self.scroll.handle_key(key.code);
        Action::None
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return Action::None;
        };

        match dialog_type {
            DialogType::TodoCreation { .. } => self.handle_form_keys(key),
            DialogType::TodoEdit { .. } | DialogType::ListCreation | DialogType::ListRename { .. } => {
                self.handle_input_keys(key)
            }
            DialogType::Info(_) => self.handle_scroll_keys(key, &[KeyCode::Enter, KeyCode::Char('q')]),
            DialogType::Help => {
                self.handle_scroll_keys(key, &[KeyCode::Char('?'), KeyCode::Char('h'), KeyCode::Char('q')])
            }
            DialogType::Logs => self.handle_scroll_keys(key, &[KeyCode::Char('G'), KeyCode::Char('q')]),
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.open(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
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
        let Some(dialog_type) = &self.dialog_type else {
            return;
        };

        match dialog_type {
            DialogType::TodoCreation { .. } => {
                todo_dialogs::render_todo_creation_dialog(f, rect, &self.icons, &self.form);
            }
            DialogType::TodoEdit { .. } => {
                todo_dialogs::render_todo_edit_dialog(f, rect, &self.icons, &self.input, self.error.as_deref());
            }
            DialogType::ListCreation => {
                list_dialogs::render_list_creation_dialog(f, rect, &self.icons, &self.input, self.error.as_deref());
            }
            DialogType::ListRename { name, .. } => {
                list_dialogs::render_list_rename_dialog(
                    f,
                    rect,
                    &self.icons,
                    name,
                    &self.input,
                    self.error.as_deref(),
                );
            }
            DialogType::Info(message) => {
                system_dialogs::render_info_dialog(f, rect, &self.icons, message, &mut self.scroll);
            }
            DialogType::Help => system_dialogs::render_help_dialog(f, rect, &mut self.scroll),
            DialogType::Logs => system_dialogs::render_logs_dialog(f, rect, &self.logger, &mut self.scroll),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(dialog: &mut DialogComponent, text: &str) {
        for c in text.chars() {
            dialog.handle_key_events(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_creation_form_submits_once_and_clears() {
        let mut dialog = DialogComponent::default();
        dialog.open(DialogType::TodoCreation { list_id: Some(3) });

        type_text(&mut dialog, "Buy milk");
        dialog.handle_key_events(key(KeyCode::Tab));
        type_text(&mut dialog, "two liters");
        dialog.handle_key_events(key(KeyCode::Tab));
        type_text(&mut dialog, "2030-01-02");
        dialog.handle_key_events(key(KeyCode::Tab));
        dialog.handle_key_events(key(KeyCode::Char(' ')));

        let action = dialog.handle_key_events(key(KeyCode::Enter));
        assert_eq!(
            action,
            Action::CreateTodo(NewTodo {
                todo: "Buy milk".to_string(),
                todo_extra: "two liters".to_string(),
                important: true,
                deadline: Some("2030-01-02".to_string()),
                list_id: Some(3),
            })
        );
        assert!(!dialog.is_visible());
        assert_eq!(dialog.form.todo.text(), "");
    }

    #[test]
    fn test_extra_text_accepts_newlines() {
        let mut dialog = DialogComponent::default();
        dialog.open(DialogType::TodoCreation { list_id: None });
        type_text(&mut dialog, "Groceries");
        dialog.handle_key_events(key(KeyCode::Tab));
        type_text(&mut dialog, "milk");
        dialog.handle_key_events(KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT));
        type_text(&mut dialog, "eggs");
        dialog.handle_key_events(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL));
        type_text(&mut dialog, "bread");
        assert!(dialog.is_visible());

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| dialog.render(f, f.area())).unwrap();
        let rows: Vec<String> = terminal
            .backend()
            .buffer()
            .content()
            .chunks(80)
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect();
        assert!(rows.iter().any(|row| row.contains("eggs") && !row.contains("milk")));

        match dialog.handle_key_events(key(KeyCode::Enter)) {
            Action::CreateTodo(new_todo) => assert_eq!(new_todo.todo_extra, "milk\neggs\nbread"),
            other => panic!("expected CreateTodo, got {:?}", other),
        }
    }

    #[test]
    fn test_alt_enter_outside_extra_field_submits() {
        let mut dialog = DialogComponent::default();
        dialog.open(DialogType::TodoCreation { list_id: None });
        dialog.handle_key_events(KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT));

        // Alt+Enter on the item text submits, and blank text is refused
        assert_eq!(dialog.form.error.as_deref(), Some(ERROR_EMPTY_ENTRY));
        assert!(!dialog.form.todo.text().contains('\n'));
    }

    #[test]
    fn test_blank_entry_is_refused() {
        let mut dialog = DialogComponent::default();
        dialog.open(DialogType::TodoCreation { list_id: None });
        type_text(&mut dialog, "   ");

        assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None);
        assert!(dialog.is_visible());
        assert_eq!(dialog.form.error.as_deref(), Some(ERROR_EMPTY_ENTRY));
    }

    #[test]
    fn test_invalid_deadline_is_refused() {
        let mut dialog = DialogComponent::default();
        dialog.open(DialogType::TodoCreation { list_id: None });
        type_text(&mut dialog, "Pay rent");
        dialog.handle_key_events(key(KeyCode::Tab));
        dialog.handle_key_events(key(KeyCode::Tab));
        type_text(&mut dialog, "someday");

        assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None);
        assert!(dialog.form.error.is_some());
        assert!(dialog.is_visible());
    }

    #[test]
    fn test_edit_dialog_is_prefilled() {
        let mut dialog = DialogComponent::default();
        dialog.update(Action::ShowDialog(DialogType::TodoEdit {
            id: 9,
            text: "Old".to_string(),
        }));
        type_text(&mut dialog, "er");

        assert_eq!(
            dialog.handle_key_events(key(KeyCode::Enter)),
            Action::EditTodo {
                id: 9,
                text: "Older".to_string()
            }
        );
    }

    #[test]
    fn test_blank_list_name_is_refused() {
        let mut dialog = DialogComponent::default();
        dialog.open(DialogType::ListRename {
            id: 1,
            name: "Home".to_string(),
        });
        for _ in 0..4 {
            dialog.handle_key_events(key(KeyCode::Backspace));
        }

        assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None);
        assert_eq!(dialog.error.as_deref(), Some(ERROR_EMPTY_LIST_NAME));
    }

    #[test]
    fn test_escape_hides_dialog() {
        let mut dialog = DialogComponent::default();
        dialog.open(DialogType::ListCreation);
        let action = dialog.handle_key_events(key(KeyCode::Esc));
        assert_eq!(action, Action::HideDialog);
        dialog.update(action);
        assert!(!dialog.is_visible());
    }

    #[test]
    fn test_logs_dialog_renders_entries() {
        let logger = Logger::new();
        logger.log("saved new order".to_string());
        let mut dialog = DialogComponent::new(logger);
        dialog.open(DialogType::Logs);

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| dialog.render(f, f.area())).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("saved new order"));
    }
}
