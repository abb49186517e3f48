use taskboard::board::{Board, Direction, ListItem, MoveOutcome, Status, Task};

fn board_with_todo(titles: &[&str]) -> Board {
    let mut board = Board::new();
    for title in titles {
        board.insert(Task::new(*title, *title));
    }
    board
}

fn titles(board: &Board, status: Status) -> Vec<&str> {
    board.column(status).items().iter().map(|t| t.title()).collect()
}

fn assert_ownership_invariant(board: &Board) {
    for (i, column) in board.columns().iter().enumerate() {
        assert_eq!(column.status().index(), i);
        for task in column.items() {
            assert_eq!(task.status(), column.status());
        }
    }
}

// === Construction ===

#[test]
fn test_board_new() {
    let board = Board::new();

    assert_eq!(board.focused(), Status::ToDo);
    for status in Status::columns() {
        assert!(board.column(*status).is_empty());
        assert_eq!(board.column(*status).status(), *status);
    }
    assert!(board.selected_task().is_none());
}

#[test]
fn test_board_default() {
    let board = Board::default();
    assert_eq!(board.focused(), Status::ToDo);
    assert!(board.columns().iter().all(|c| c.is_empty()));
}

#[test]
fn test_board_seeded() {
    let board = Board::seeded();

    assert_eq!(board.column(Status::ToDo).len(), 5);
    assert_eq!(board.column(Status::InProgress).len(), 4);
    assert_eq!(board.column(Status::Done).len(), 4);
    assert_eq!(titles(&board, Status::ToDo)[0], "Complete Weekly Report");
    assert_eq!(titles(&board, Status::Done)[3], "Clean House");
    for column in board.columns() {
        assert_eq!(column.selected_index(), Some(0));
    }
    assert_ownership_invariant(&board);
}

#[test]
fn test_insert_routes_by_status() {
    let mut board = Board::new();
    board.insert(Task::with_status(Status::Done, "Shipped", "v1"));

    assert!(board.column(Status::ToDo).is_empty());
    assert_eq!(titles(&board, Status::Done), vec!["Shipped"]);
    assert_ownership_invariant(&board);
}

// === Focus ===

#[test]
fn test_focus_cycles() {
    let mut board = Board::new();

    board.focus_next();
    assert_eq!(board.focused(), Status::InProgress);
    board.focus_next();
    assert_eq!(board.focused(), Status::Done);
    board.focus_next();
    assert_eq!(board.focused(), Status::ToDo);

    board.focus_prev();
    assert_eq!(board.focused(), Status::Done);
}

#[test]
fn test_focus_does_not_touch_contents() {
    let mut board = Board::seeded();
    board.select(2);
    board.focus_next();
    board.focus_prev();

    assert_eq!(board.focused_column().selected_index(), Some(2));
    assert_eq!(board.column(Status::ToDo).len(), 5);
}

// === Move ===

#[test]
fn test_move_forward_through_lifecycle() {
    let mut board = board_with_todo(&["X"]);

    assert_eq!(
        board.move_selected(Direction::Forward),
        MoveOutcome::Moved {
            from: Status::ToDo,
            to: Status::InProgress
        }
    );
    assert!(board.column(Status::ToDo).is_empty());
    assert_eq!(titles(&board, Status::InProgress), vec!["X"]);
    assert_eq!(board.focused(), Status::ToDo);

    board.focus_next();
    assert_eq!(
        board.move_selected(Direction::Forward),
        MoveOutcome::Moved {
            from: Status::InProgress,
            to: Status::Done
        }
    );
    assert_eq!(titles(&board, Status::Done), vec!["X"]);

    board.focus_next();
    assert_eq!(
        board.move_selected(Direction::Forward),
        MoveOutcome::Blocked(Status::Done)
    );
    assert_eq!(titles(&board, Status::Done), vec!["X"]);
    assert_ownership_invariant(&board);
}

#[test]
fn test_move_backward_blocked_in_todo() {
    let mut board = board_with_todo(&["X"]);

    assert_eq!(
        board.move_selected(Direction::Backward),
        MoveOutcome::Blocked(Status::ToDo)
    );
    assert_eq!(titles(&board, Status::ToDo), vec!["X"]);
    assert_eq!(board.selected_task().unwrap().status(), Status::ToDo);
}

#[test]
fn test_move_backward_from_done() {
    let mut board = Board::new();
    board.insert(Task::with_status(Status::Done, "Y", "Y"));
    board.focus_prev();

    assert_eq!(
        board.move_selected(Direction::Backward),
        MoveOutcome::Moved {
            from: Status::Done,
            to: Status::InProgress
        }
    );
    assert_eq!(titles(&board, Status::InProgress), vec!["Y"]);
    assert_eq!(
        board.column(Status::InProgress).items()[0].status(),
        Status::InProgress
    );
}

#[test]
fn test_move_empty_column() {
    let mut board = Board::new();
    assert_eq!(board.move_selected(Direction::Forward), MoveOutcome::Empty);
    assert_eq!(board.move_selected(Direction::Backward), MoveOutcome::Empty);
}

#[test]
fn test_move_appends_to_destination() {
    let mut board = Board::seeded();
    board.select(1);

    board.move_selected(Direction::Forward);

    assert_eq!(
        titles(&board, Status::InProgress).last().copied(),
        Some("Grocery Shopping")
    );
    // Next task slid up under the cursor in the source column
    assert_eq!(board.selected_task().unwrap().title(), "Attend Team Meeting");
    assert_ownership_invariant(&board);
}

#[test]
fn test_move_last_selected_repairs_cursor() {
    let mut board = board_with_todo(&["A", "B"]);
    board.select(1);

    board.move_selected(Direction::Forward);

    assert_eq!(board.focused_column().selected_index(), Some(0));
    assert_eq!(board.selected_task().unwrap().title(), "A");
}

// === Add ===

#[test]
fn test_add_task_mirrors_text() {
    let mut board = Board::new();
    board.focus_prev();

    board.add_task("Buy milk");

    let task = &board.column(Status::ToDo).items()[0];
    assert_eq!(task.title(), "Buy milk");
    assert_eq!(task.description(), "Buy milk");
    assert_eq!(task.status(), Status::ToDo);
    assert!(board.column(Status::Done).is_empty());
}

#[test]
fn test_add_task_appends() {
    let mut board = board_with_todo(&["A"]);
    board.add_task("B");
    assert_eq!(titles(&board, Status::ToDo), vec!["A", "B"]);
    assert_eq!(board.focused_column().selected_index(), Some(0));
}

// === Edit ===

#[test]
fn test_edit_selected() {
    let mut board = board_with_todo(&["A", "B", "C"]);
    board.select(2);

    assert!(board.edit_selected("Gamma"));

    assert_eq!(titles(&board, Status::ToDo), vec!["A", "B", "Gamma"]);
    let task = board.selected_task().unwrap();
    assert_eq!(task.description(), "Gamma");
    assert_eq!(task.status(), Status::ToDo);
    assert_eq!(board.focused_column().selected_index(), Some(2));
}

#[test]
fn test_edit_never_changes_column() {
    let mut board = Board::seeded();
    board.focus_next();

    assert!(board.edit_selected("Renamed"));

    assert_eq!(board.column(Status::InProgress).len(), 4);
    assert_eq!(titles(&board, Status::InProgress)[0], "Renamed");
    assert_ownership_invariant(&board);
}

#[test]
fn test_edit_empty_column() {
    let mut board = Board::new();
    assert!(!board.edit_selected("nothing"));
    assert!(board.columns().iter().all(|c| c.is_empty()));
}

// === Remove ===

#[test]
fn test_remove_selected_slides_next_up() {
    let mut board = board_with_todo(&["A", "B"]);

    let removed = board.remove_selected().unwrap();

    assert_eq!(removed.title(), "A");
    assert_eq!(titles(&board, Status::ToDo), vec!["B"]);
    assert_eq!(board.focused_column().selected_index(), Some(0));
}

#[test]
fn test_remove_only_task_leaves_empty() {
    let mut board = board_with_todo(&["A"]);
    board.remove_selected();

    assert!(board.focused_column().is_empty());
    assert_eq!(board.focused_column().selected_index(), None);
    assert!(board.remove_selected().is_none());
}

#[test]
fn test_remove_last_never_points_past_end() {
    let mut board = board_with_todo(&["A", "B", "C"]);
    board.select(2);

    board.remove_selected();

    let column = board.focused_column();
    assert_eq!(column.selected_index(), Some(1));
    assert!(column.selected_index().unwrap() < column.len());
}

// === Invariant over a mixed sequence ===

#[test]
fn test_invariant_holds_across_operations() {
    let mut board = Board::seeded();

    board.move_selected(Direction::Forward);
    board.focus_next();
    board.select(3);
    board.move_selected(Direction::Forward);
    board.move_selected(Direction::Backward);
    board.add_task("Z");
    board.focus_next();
    board.remove_selected();
    board.move_selected(Direction::Backward);
    board.edit_selected("Edited");

    assert_ownership_invariant(&board);
    let total: usize = board.columns().iter().map(|c| c.len()).sum();
    assert_eq!(total, 13);
    for column in board.columns() {
        if let Some(index) = column.selected_index() {
            assert!(index < column.len());
        }
    }
}
