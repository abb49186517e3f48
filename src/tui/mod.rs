mod app;
pub mod input;
pub mod task_list;
pub mod text_input;
mod view;

pub use app::App;
