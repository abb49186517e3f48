use super::column::Column;
use super::models::{ListItem, Status, Task};
use super::seed;

/// Direction of a move between adjacent columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Result of [`Board::move_selected`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Task left `from` and was appended to `to`
    Moved { from: Status, to: Status },
    /// The focused column has no tasks
    Empty,
    /// The selected task is already at the end of the lifecycle in that direction
    Blocked(Status),
}

/// The kanban board: one column per status and the focused column.
#[derive(Debug, Clone)]
pub struct Board {
    columns: [Column; 3],
    focused: Status,
}

impl Board {
    /// A board with three empty columns, focused on To Do
    pub fn new() -> Self {
        Self {
            columns: [
                Column::new(Status::ToDo),
                Column::new(Status::InProgress),
                Column::new(Status::Done),
            ],
            focused: Status::ToDo,
        }
    }

    /// A board filled with the demonstration tasks
    pub fn seeded() -> Self {
        let columns = [Status::ToDo, Status::InProgress, Status::Done]
            .map(|status| Column::with_items(status, seed::tasks_for(status)));
        Self {
            columns,
            focused: Status::ToDo,
        }
    }

    pub fn columns(&self) -> &[Column; 3] {
        &self.columns
    }

    pub fn column(&self, status: Status) -> &Column {
        &self.columns[status.index()]
    }

    pub fn focused(&self) -> Status {
        self.focused
    }

    pub fn focused_column(&self) -> &Column {
        self.column(self.focused)
    }

    pub(crate) fn focused_column_mut(&mut self) -> &mut Column {
        &mut self.columns[self.focused.index()]
    }

    /// Get the selected task of the focused column
    pub fn selected_task(&self) -> Option<&Task> {
        self.focused_column().selected_task()
    }

    /// Place a task in the column matching its status
    pub fn insert(&mut self, task: Task) {
        self.columns[task.status().index()].insert(task);
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.cycle_next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.cycle_prev();
    }

    /// Move the selection cursor of the focused column
    pub fn select(&mut self, index: usize) {
        self.focused_column_mut().select(index);
    }

    /// Create a To Do task whose title and description are both `text`.
    ///
    /// Lands in To Do regardless of which column has focus.
    pub fn add_task(&mut self, text: &str) {
        self.insert(Task::new(text, text));
        tracing::debug!(title = text, "task added");
    }

    /// Replace the text of the selected task in the focused column.
    ///
    /// The task is taken out and put back at the same index so list views see
    /// a structural change. Returns false when nothing is selected.
    pub fn edit_selected(&mut self, text: &str) -> bool {
        let column = self.focused_column_mut();
        let Some(index) = column.selected_index() else {
            tracing::debug!("edit ignored: no selection");
            return false;
        };
        let Some(mut task) = column.remove_at(index) else {
            return false;
        };
        task.set_text(text, text);
        column.insert_at(index, task);
        column.select(index);
        tracing::debug!(index, title = text, "task edited");
        true
    }

    /// Delete the selected task of the focused column
    pub fn remove_selected(&mut self) -> Option<Task> {
        let column = self.focused_column_mut();
        let index = column.selected_index()?;
        let task = column.remove_at(index)?;
        tracing::debug!(index, title = task.title(), "task removed");
        Some(task)
    }

    /// Move the selected task of the focused column to the adjacent column.
    ///
    /// Focus stays on the source column.
    pub fn move_selected(&mut self, direction: Direction) -> MoveOutcome {
        let from = self.focused;
        let source = self.focused_column_mut();

        let Some(index) = source.selected_index() else {
            tracing::debug!(column = from.as_str(), "move ignored: column empty");
            return MoveOutcome::Empty;
        };
        let blocked = match (direction, source.selected_task().map(Task::status)) {
            (Direction::Forward, Some(Status::Done)) => true,
            (Direction::Backward, Some(Status::ToDo)) => true,
            (_, Some(_)) => false,
            (_, None) => return MoveOutcome::Empty,
        };
        if blocked {
            tracing::debug!(column = from.as_str(), ?direction, "move ignored: at lifecycle boundary");
            return MoveOutcome::Blocked(from);
        }

        let Some(mut task) = source.remove_at(index) else {
            return MoveOutcome::Empty;
        };
        match direction {
            Direction::Forward => task.advance(),
            Direction::Backward => task.retreat(),
        };
        let to = task.status();
        tracing::debug!(title = task.title(), from = from.as_str(), to = to.as_str(), "task moved");
        self.insert(task);

        MoveOutcome::Moved { from, to }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
