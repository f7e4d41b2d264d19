use tasklet_core::TaskId;
use tasklet_core::render::TaskRow;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub rows:            Vec<TaskRow>,
  pub show_empty:      bool,
  pub on_toggle:       Callback<TaskId>,
  pub on_delete:       Callback<TaskId>,
  pub on_remove_image: Callback<TaskId>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  html! {
      <div class="task-list">
          {
              for props.rows.iter().cloned().map(|row| html! {
                  <TaskListRow
                      key={row.id.to_string()}
                      row={row.clone()}
                      on_toggle={props.on_toggle.clone()}
                      on_delete={props.on_delete.clone()}
                      on_remove_image={props.on_remove_image.clone()}
                  />
              })
          }
          {
              if props.show_empty {
                  html! { <div class="empty-msg">{ "No tasks yet. Add one above!" }</div> }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
