use crossterm::event::{KeyCode, KeyEvent};

use crate::board::{Column, ListItem, Task};

/// Rows skipped by PageUp/PageDown
const PAGE_SIZE: usize = 5;

/// Filter state of a task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterState {
    #[default]
    Unfiltered,
    /// Typing a filter; every key goes to the query
    Filtering,
    /// Filter accepted; the list shows matches only
    Applied,
}

/// View state of one column: cursor navigation and filtering.
///
/// Never changes which tasks a column holds, only which one is selected.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    query: String,
    state: FilterState,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter_state(&self) -> FilterState {
        self.state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_filtering(&self) -> bool {
        self.state == FilterState::Filtering
    }

    /// Whether a task is shown under the current filter
    pub fn matches(&self, task: &Task) -> bool {
        self.state == FilterState::Unfiltered || fuzzy_match(task.filter_value(), &self.query)
    }

    /// Indices of the column's tasks that are shown
    pub fn visible_indices(&self, column: &Column) -> Vec<usize> {
        column
            .items()
            .iter()
            .enumerate()
            .filter(|(_, task)| self.matches(task))
            .map(|(i, _)| i)
            .collect()
    }

    /// The column's cursor, unless the filter hides that task
    pub fn selected_visible(&self, column: &Column) -> Option<usize> {
        let selected = column.selected_index()?;
        let task = column.selected_task()?;
        self.matches(task).then_some(selected)
    }

    /// Put the selection on a shown task when the current one is filtered out
    pub fn sync(&self, column: &mut Column) {
        let Some(selected) = column.selected_index() else {
            return;
        };
        let visible = self.visible_indices(column);
        if visible.contains(&selected) {
            return;
        }
        // Prefer the nearest match below, then the nearest above
        let target = visible
            .iter()
            .find(|&&i| i > selected)
            .or_else(|| visible.last())
            .copied();
        if let Some(index) = target {
            column.select(index);
        }
    }

    pub fn handle_key(&mut self, column: &mut Column, key: KeyEvent) {
        if self.state == FilterState::Filtering {
            self.handle_filter_key(column, key);
            return;
        }
        match key.code {
            KeyCode::Char('k') | KeyCode::Up => self.step_back(column, 1),
            KeyCode::Char('j') | KeyCode::Down => self.step_forward(column, 1),
            KeyCode::PageUp => self.step_back(column, PAGE_SIZE),
            KeyCode::PageDown => self.step_forward(column, PAGE_SIZE),
            KeyCode::Char('g') | KeyCode::Home => self.step_back(column, usize::MAX),
            KeyCode::Char('G') | KeyCode::End => self.step_forward(column, usize::MAX),
            KeyCode::Char('/') => {
                self.query.clear();
                self.state = FilterState::Filtering;
            }
            KeyCode::Esc if self.state == FilterState::Applied => self.clear(),
            _ => {}
        }
    }

    fn handle_filter_key(&mut self, column: &mut Column, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.clear(),
            KeyCode::Enter => {
                self.state = if self.query.is_empty() {
                    FilterState::Unfiltered
                } else {
                    FilterState::Applied
                };
            }
            KeyCode::Backspace => {
                self.query.pop();
            }
            KeyCode::Up => self.step_back(column, 1),
            KeyCode::Down => self.step_forward(column, 1),
            KeyCode::Char(c) => self.query.push(c),
            _ => {}
        }
        self.sync(column);
    }

    fn clear(&mut self) {
        self.query.clear();
        self.state = FilterState::Unfiltered;
    }

    fn step_back(&self, column: &mut Column, step: usize) {
        let visible = self.visible_indices(column);
        if visible.is_empty() {
            return;
        }
        let pos = column
            .selected_index()
            .and_then(|selected| visible.iter().position(|&i| i == selected))
            .map(|p| p.saturating_sub(step))
            .unwrap_or(0);
        column.select(visible[pos]);
    }

    fn step_forward(&self, column: &mut Column, step: usize) {
        let visible = self.visible_indices(column);
        if visible.is_empty() {
            return;
        }
        let last = visible.len() - 1;
        let pos = column
            .selected_index()
            .and_then(|selected| visible.iter().position(|&i| i == selected))
            .map(|p| p.saturating_add(step).min(last))
            .unwrap_or(0);
        column.select(visible[pos]);
    }
}

/// Case-insensitive subsequence match
fn fuzzy_match(haystack: &str, needle: &str) -> bool {
    let mut needle_chars = needle.chars().flat_map(char::to_lowercase).peekable();
    for c in haystack.chars().flat_map(char::to_lowercase) {
        if needle_chars.peek() == Some(&c) {
            needle_chars.next();
        }
    }
    needle_chars.peek().is_none()
}
