mod column;
mod models;
pub mod seed;
mod state;

pub use column::Column;
pub use models::{ListItem, Status, Task};
pub use state::{Board, Direction, MoveOutcome};
