mod add_task_form;
mod filter_bar;
mod global_actions;
mod image_dropzone;
mod task_list;
mod task_list_row;

pub use add_task_form::AddTaskForm;
pub use filter_bar::FilterBar;
pub use global_actions::GlobalActions;
pub use image_dropzone::ImageDropzone;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
