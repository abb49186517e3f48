/// Lifecycle stage of a task. Also identifies the column that holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    ToDo,
    InProgress,
    Done,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::ToDo => "To Do",
            Status::InProgress => "In Progress",
            Status::Done => "Done",
        }
    }

    /// All statuses in board order
    pub fn columns() -> &'static [Status; 3] {
        &[Status::ToDo, Status::InProgress, Status::Done]
    }

    /// Position of this status on the board
    pub fn index(self) -> usize {
        match self {
            Status::ToDo => 0,
            Status::InProgress => 1,
            Status::Done => 2,
        }
    }

    /// The following lifecycle stage, if any
    pub fn next(self) -> Option<Status> {
        match self {
            Status::ToDo => Some(Status::InProgress),
            Status::InProgress => Some(Status::Done),
            Status::Done => None,
        }
    }

    /// The preceding lifecycle stage, if any
    pub fn prev(self) -> Option<Status> {
        match self {
            Status::ToDo => None,
            Status::InProgress => Some(Status::ToDo),
            Status::Done => Some(Status::InProgress),
        }
    }

    /// Next column for focus navigation, wrapping Done -> To Do
    pub fn cycle_next(self) -> Status {
        self.next().unwrap_or(Status::ToDo)
    }

    /// Previous column for focus navigation, wrapping To Do -> Done
    pub fn cycle_prev(self) -> Status {
        self.prev().unwrap_or(Status::Done)
    }
}

/// Accessors a list-display widget needs to show and filter an entry.
pub trait ListItem {
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn filter_value(&self) -> &str;
}

/// A task on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    status: Status,
    title: String,
    description: String,
}

impl Task {
    /// New tasks always start in To Do
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_status(Status::ToDo, title, description)
    }

    pub fn with_status(status: Status, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub(crate) fn set_text(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.title = title.into();
        self.description = description.into();
    }

    /// Step the status forward. Returns false when already Done.
    pub(crate) fn advance(&mut self) -> bool {
        match self.status.next() {
            Some(next) => {
                self.status = next;
                true
            }
            None => false,
        }
    }

    /// Step the status back. Returns false when already To Do.
    pub(crate) fn retreat(&mut self) -> bool {
        match self.status.prev() {
            Some(prev) => {
                self.status = prev;
                true
            }
            None => false,
        }
    }
}

impl ListItem for Task {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn filter_value(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_ordering() {
        assert!(Status::ToDo < Status::InProgress);
        assert!(Status::InProgress < Status::Done);
    }

    #[test]
    fn test_status_index_matches_columns() {
        for (i, status) in Status::columns().iter().enumerate() {
            assert_eq!(status.index(), i);
        }
    }

    #[test]
    fn test_status_cycle_wraps() {
        assert_eq!(Status::Done.cycle_next(), Status::ToDo);
        assert_eq!(Status::ToDo.cycle_prev(), Status::Done);
        assert_eq!(Status::ToDo.cycle_next(), Status::InProgress);
        assert_eq!(Status::InProgress.cycle_prev(), Status::ToDo);
    }

    #[test]
    fn test_new_task_is_todo() {
        let task = Task::new("Title", "Description");
        assert_eq!(task.status(), Status::ToDo);
        assert_eq!(task.title(), "Title");
        assert_eq!(task.description(), "Description");
    }

    #[test]
    fn test_filter_value_is_title() {
        let task = Task::new("Pay bills", "All of them");
        assert_eq!(task.filter_value(), "Pay bills");
    }

    #[test]
    fn test_advance_then_retreat_from_in_progress() {
        let mut task = Task::with_status(Status::InProgress, "t", "d");
        assert!(task.advance());
        assert_eq!(task.status(), Status::Done);
        assert!(task.retreat());
        assert_eq!(task.status(), Status::InProgress);

        assert!(task.retreat());
        assert_eq!(task.status(), Status::ToDo);
        assert!(task.advance());
        assert_eq!(task.status(), Status::InProgress);
    }

    #[test]
    fn test_advance_blocked_at_done() {
        let mut task = Task::with_status(Status::Done, "t", "d");
        assert!(!task.advance());
        assert_eq!(task.status(), Status::Done);
        // Retreat still works from the upper boundary
        assert!(task.retreat());
        assert_eq!(task.status(), Status::InProgress);
    }

    #[test]
    fn test_retreat_blocked_at_todo() {
        let mut task = Task::new("t", "d");
        assert!(!task.retreat());
        assert_eq!(task.status(), Status::ToDo);
        // Advance still works from the lower boundary
        assert!(task.advance());
        assert_eq!(task.status(), Status::InProgress);
    }
}
