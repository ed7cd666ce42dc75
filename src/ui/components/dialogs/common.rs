use crate::ui::components::input_field::InputField;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Creates a styled main dialog block
pub fn create_dialog_block(title: String, theme_color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Input box with a block cursor at the field's cursor position.
/// Unfocused fields render without a cursor and with a dimmer border.
pub fn create_input_paragraph(field: &InputField, field_title: &str, focused: bool) -> Paragraph<'static> {
    let text = field.text();
    let split = text
        .char_indices()
        .nth(field.cursor())
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let (before, after) = text.split_at(split);

    let mut lines = Vec::new();
    let mut spans = Vec::new();
    push_raw_lines(before, &mut spans, &mut lines);
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::White)));
    }
    push_raw_lines(after, &mut spans, &mut lines);
    lines.push(Line::from(spans));

    Paragraph::new(lines)
        .block(field_block(field_title, focused))
        .style(Style::default().fg(Color::White))
}

/// Append `text` to the current line, starting a new line at each `\n`
fn push_raw_lines(text: &str, spans: &mut Vec<Span<'static>>, lines: &mut Vec<Line<'static>>) {
    for (i, part) in text.split('\n').enumerate() {
        if i > 0 {
            lines.push(Line::from(std::mem::take(spans)));
        }
        if !part.is_empty() {
            spans.push(Span::raw(part.to_string()));
        }
    }
}

/// Read-only value box, e.g. a toggle
pub fn create_selection_paragraph(value: String, field_title: &str, focused: bool) -> Paragraph<'static> {
    Paragraph::new(value)
        .block(field_block(field_title, focused))
        .style(Style::default().fg(Color::White))
}

fn field_block(field_title: &str, focused: bool) -> Block<'static> {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border))
}

/// One-line inline validation message
pub fn create_error_paragraph(error: Option<&str>) -> Paragraph<'static> {
    Paragraph::new(error.unwrap_or_default().to_string())
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph(instructions: &[InstructionShortcut]) -> Paragraph<'static> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ENTER_SAVE: InstructionShortcut = ("Enter", Color::Green, " Save");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
}

/// Dialog with a single text input, its inline error and instructions.
/// Shared by item editing and the list name dialogs.
pub fn render_text_input_dialog(
    f: &mut Frame,
    area: Rect,
    title: String,
    field_title: &str,
    input: &InputField,
    error: Option<&str>,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 9, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(title, Color::Cyan);
    let inner_area = block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Input field
            Constraint::Length(1), // Inline error
            Constraint::Length(1), // Instructions
        ])
        .split(inner_area);

    let instructions = [shortcuts::ENTER_SAVE, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL];

    f.render_widget(block, dialog_area);
    f.render_widget(create_input_paragraph(input, field_title, true), chunks[0]);
    f.render_widget(create_error_paragraph(error), chunks[1]);
    f.render_widget(create_instructions_paragraph(&instructions), chunks[2]);
}
