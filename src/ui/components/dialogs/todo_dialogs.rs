use super::common::{
    create_dialog_block, create_error_paragraph, create_input_paragraph, create_instructions_paragraph,
    create_selection_paragraph, render_text_input_dialog, shortcuts,
};
use crate::icons::IconService;
use crate::ui::components::dialog_component::{FormField, TodoForm};
use crate::ui::components::input_field::InputField;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    widgets::Clear,
    Frame,
};

pub fn render_todo_creation_dialog(f: &mut Frame, area: Rect, icons: &IconService, form: &TodoForm) {
    let dialog_area = LayoutManager::centered_rect_lines(65, 20, area);
    f.render_widget(Clear, dialog_area);

    let main_block = create_dialog_block("New Item".to_string(), Color::Cyan);
    let inner_area = main_block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Text
            Constraint::Length(5), // Extra text, three lines
            Constraint::Length(3), // Deadline
            Constraint::Length(3), // Important toggle
            Constraint::Length(1), // Inline error
            Constraint::Length(1), // Instructions
        ])
        .split(inner_area);

    let important = if form.important {
        format!("{} yes", icons.important())
    } else {
        "no".to_string()
    };

    let instructions = [
        ("Enter", Color::Green, " Create"),
        shortcuts::SEPARATOR,
        shortcuts::TAB_NEXT,
        shortcuts::SEPARATOR,
        ("Space", Color::Yellow, " Toggle important"),
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ];

    f.render_widget(main_block, dialog_area);
    f.render_widget(
        create_input_paragraph(&form.todo, "Item", form.focus == FormField::Todo),
        chunks[0],
    );
    f.render_widget(
        create_input_paragraph(&form.extra, "Extra (optional, Ctrl+J: new line)", form.focus == FormField::Extra),
        chunks[1],
    );
    f.render_widget(
        create_input_paragraph(
            &form.deadline,
            "Deadline (YYYY-MM-DD, today, +3, fri)",
            form.focus == FormField::Deadline,
        ),
        chunks[2],
    );
    f.render_widget(
        create_selection_paragraph(important, "Important", form.focus == FormField::Important),
        chunks[3],
    );
    f.render_widget(create_error_paragraph(form.error.as_deref()), chunks[4]);
    f.render_widget(create_instructions_paragraph(&instructions), chunks[5]);
}

pub fn render_todo_edit_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    input: &InputField,
    error: Option<&str>,
) {
    let title = format!("{} Edit Item", icons.info());
    render_text_input_dialog(f, area, title, "Item", input, error);
}
