use super::models::{Status, Task};

const TODO: &[(&str, &str)] = &[
    ("Complete Weekly Report", "Finish the weekly report by the end of the day."),
    ("Grocery Shopping", "Buy groceries for the week."),
    ("Attend Team Meeting", "Participate in the weekly team meeting."),
    ("Learn a New Skill", "Dedicate 30 minutes to learning a new skill."),
    ("Schedule Doctor's Appointment", "Book a doctor's appointment for a check-up."),
];

const IN_PROGRESS: &[(&str, &str)] = &[
    ("Research New Software", "Compare different software options for the project."),
    ("Write Blog Post", "Draft a blog post about [topic]."),
    ("Exercise", "Do a 30-minute workout."),
    ("Prepare Presentation", "Create slides for the upcoming presentation."),
];

const DONE: &[(&str, &str)] = &[
    ("Complete Project Proposal", "Submit the project proposal to the client."),
    ("Pay Bills", "Pay all outstanding bills."),
    ("Read Book", "Finish reading the book."),
    ("Clean House", "Thoroughly clean the house."),
];

/// Demonstration tasks shown on first render
pub fn tasks_for(status: Status) -> Vec<Task> {
    let fixtures = match status {
        Status::ToDo => TODO,
        Status::InProgress => IN_PROGRESS,
        Status::Done => DONE,
    };
    fixtures
        .iter()
        .map(|(title, description)| Task::with_status(status, *title, *description))
        .collect()
}
