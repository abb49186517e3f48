use super::text_input::TextInput;

/// Input mode for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Normal mode - navigating the board
    #[default]
    Normal,
    /// Composing a new task
    Adding,
    /// Rewriting the selected task
    Editing,
}

/// Transient state while a task text is being composed
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    mode: EditorMode,
    input: TextInput,
}

impl EditorSession {
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn buffer(&self) -> &str {
        self.input.value()
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut TextInput {
        &mut self.input
    }

    /// Enter Adding mode with an empty, focused buffer
    pub fn begin_add(&mut self) {
        self.mode = EditorMode::Adding;
        self.input.set_value("");
        self.input.focus();
    }

    /// Enter Editing mode seeded with the task's current description
    pub fn begin_edit(&mut self, description: &str) {
        self.mode = EditorMode::Editing;
        self.input.set_value(description);
        self.input.focus();
    }

    /// Leave the session, returning what was composed
    pub fn finish(&mut self) -> String {
        let text = self.input.value().to_string();
        self.reset();
        text
    }

    /// Back to Normal with an empty buffer
    pub fn reset(&mut self) {
        self.mode = EditorMode::Normal;
        self.input.set_value("");
        self.input.blur();
    }
}
