use super::models::{Status, Task};

/// Ordered tasks of one lifecycle stage plus a selection cursor.
///
/// `selected` is only meaningful while the column holds tasks. Mutations that
/// could leave it dangling repair it so that it always points at a task.
#[derive(Debug, Clone)]
pub struct Column {
    status: Status,
    items: Vec<Task>,
    selected: usize,
}

impl Column {
    pub fn new(status: Status) -> Self {
        Self {
            status,
            items: vec![],
            selected: 0,
        }
    }

    pub(crate) fn with_items(status: Status, items: Vec<Task>) -> Self {
        debug_assert!(items.iter().all(|t| t.status() == status));
        Self {
            status,
            items,
            selected: 0,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn items(&self) -> &[Task] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Cursor position, or None for an empty column
    pub fn selected_index(&self) -> Option<usize> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.selected)
        }
    }

    /// Get the currently selected task
    pub fn selected_task(&self) -> Option<&Task> {
        self.items.get(self.selected)
    }

    /// Move the cursor, clamped to the last task. Ignored on an empty column.
    pub fn select(&mut self, index: usize) {
        if !self.items.is_empty() {
            self.selected = index.min(self.items.len() - 1);
        }
    }

    /// Append a task. An empty column starts selecting it.
    pub(crate) fn insert(&mut self, task: Task) {
        if self.items.is_empty() {
            self.selected = 0;
        }
        self.items.push(task);
    }

    /// Insert a task at `index` (clamped to the end) without moving the cursor.
    pub(crate) fn insert_at(&mut self, index: usize, task: Task) {
        let was_empty = self.items.is_empty();
        let index = index.min(self.items.len());
        self.items.insert(index, task);
        if was_empty {
            self.selected = 0;
        }
    }

    /// Remove the task at `index`.
    ///
    /// The cursor keeps its position so the following task slides up under it;
    /// if that would leave it past the end it is pulled back to the last task.
    pub(crate) fn remove_at(&mut self, index: usize) -> Option<Task> {
        if index >= self.items.len() {
            return None;
        }
        let task = self.items.remove(index);
        if self.selected >= self.items.len() {
            self.selected = self.items.len().saturating_sub(1);
        }
        Some(task)
    }
}
