use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, List, ListState, Paragraph, Wrap},
};

use crate::board::{Column, ListItem as _};
use crate::config::Theme;

use super::app::AppState;
use super::input::EditorMode;
use super::task_list::{FilterState, TaskList};

const COMPOSE_HELP: &str = "Press 'enter' to confirm, 'esc' to cancel, 'ctrl+c' to quit";
const PLACEHOLDER: &str = "Buy milk";

/// Build footer help text based on current UI state
fn build_footer_text(mode: EditorMode, list: &TaskList) -> String {
    match mode {
        EditorMode::Normal if list.is_filtering() => {
            format!(" Filter: {}█  [enter] apply  [esc] clear ", list.query())
        }
        EditorMode::Normal => {
            " [a] add  [e] edit  [enter] advance  [backspace] move back  [d] delete  [h/l] column  [j/k] select  [/] filter  [q] quit "
                .to_string()
        }
        EditorMode::Adding | EditorMode::Editing => format!(" {} ", COMPOSE_HELP),
    }
}

pub(super) fn draw(state: &AppState, frame: &mut Frame) {
    let area = frame.area();

    if !state.is_loaded() {
        frame.render_widget(Paragraph::new("Loading..."), area);
        return;
    }

    // Main layout: header, board, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Board
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let header = Paragraph::new(" taskboard ").style(Style::default().fg(state.theme.focused).bold());
    frame.render_widget(header, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(1, 3), Constraint::Ratio(1, 3)])
        .split(chunks[1]);

    let focused = state.board.focused();
    for (i, column) in state.board.columns().iter().enumerate() {
        let is_focused = column.status() == focused;
        draw_column(frame, column, &state.lists[i], is_focused, &state.theme, columns[i]);
    }

    let footer_text = build_footer_text(state.session.mode(), state.focused_list());
    let footer = Paragraph::new(footer_text).style(Style::default().fg(state.theme.dimmed));
    frame.render_widget(footer, chunks[2]);

    match state.session.mode() {
        EditorMode::Adding => draw_editor(state, frame, " Add Task ", area),
        EditorMode::Editing => draw_editor(state, frame, " Edit Task ", area),
        EditorMode::Normal => {}
    }
}

fn draw_column(frame: &mut Frame, column: &Column, list: &TaskList, is_focused: bool, theme: &Theme, area: Rect) {
    let (border_style, border_type) = if is_focused {
        (Style::default().fg(theme.focused), BorderType::Rounded)
    } else {
        (Style::default().fg(theme.normal), BorderType::Plain)
    };

    let title = format!(" {} ({}) ", column.status().as_str(), column.len());
    let mut block = Block::default()
        .title(title)
        .title_style(Style::default().fg(theme.column_header).bold())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);
    if list.filter_state() != FilterState::Unfiltered {
        block = block.title_bottom(format!(" /{} ", list.query()));
    }

    if column.is_empty() {
        let empty = Paragraph::new("No items.")
            .style(Style::default().fg(theme.dimmed))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let visible = list.visible_indices(column);
    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ratatui::widgets::ListItem> = visible
        .iter()
        .map(|&i| {
            let task = &column.items()[i];
            ratatui::widgets::ListItem::new(vec![
                Line::styled(truncate(task.title(), width), Style::default().fg(theme.text).bold()),
                Line::styled(truncate(task.description(), width), Style::default().fg(theme.description)),
                Line::default(),
            ])
        })
        .collect();

    let selected = column
        .selected_index()
        .and_then(|selected| visible.iter().position(|&i| i == selected));
    let mut list_state = ListState::default().with_selected(selected);

    let highlight = if is_focused { theme.selected } else { theme.dimmed };
    let list_widget = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(highlight))
        .highlight_symbol("│ ");
    frame.render_stateful_widget(list_widget, area, &mut list_state);
}

fn draw_editor(state: &AppState, frame: &mut Frame, title: &str, area: Rect) {
    let popup_area = centered_rect(60, 30, area);
    frame.render_widget(Clear, popup_area);

    let input = state.session.input();
    let text_style = Style::default().fg(state.theme.text);
    let input_line = if input.value().is_empty() {
        Line::from(vec![
            Span::styled("█", text_style),
            Span::styled(PLACEHOLDER, Style::default().fg(state.theme.dimmed)),
        ])
    } else {
        let (before, after) = input.split_at_cursor();
        let cursor = if input.is_focused() { "█" } else { "" };
        Line::styled(format!("{}{}{}", before, cursor, after), text_style)
    };

    let text = Text::from(vec![
        input_line,
        Line::default(),
        Line::styled(COMPOSE_HELP, Style::default().fg(state.theme.dimmed)),
    ]);

    let popup = Paragraph::new(text).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(state.theme.focused)),
    );
    frame.render_widget(popup, popup_area);
}

/// Truncate to fit (char-safe for UTF-8)
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let truncated: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
