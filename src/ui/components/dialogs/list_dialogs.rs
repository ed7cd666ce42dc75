use super::common::render_text_input_dialog;
use crate::icons::IconService;
use crate::ui::components::input_field::InputField;
use ratatui::{layout::Rect, Frame};

pub fn render_list_creation_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    input: &InputField,
    error: Option<&str>,
) {
    let title = format!("{} New List", icons.lists_title());
    render_text_input_dialog(f, area, title, "List name", input, error);
}

pub fn render_list_rename_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    current_name: &str,
    input: &InputField,
    error: Option<&str>,
) {
    let title = format!("{} Rename '{}'", icons.lists_title(), current_name);
    render_text_input_dialog(f, area, title, "List name", input, error);
}
