use tasklet_core::TaskId;
use tasklet_core::render::TaskRow;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub row:             TaskRow,
  pub on_toggle:       Callback<TaskId>,
  pub on_delete:       Callback<TaskId>,
  pub on_remove_image: Callback<TaskId>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let row = &props.row;
  let id = row.id;
  let on_toggle =
    props.on_toggle.clone();
  let on_delete =
    props.on_delete.clone();

  let thumbnail = match &row.thumbnail
  {
    | Some(src) => {
      let on_remove_image =
        props.on_remove_image.clone();
      html! {
          <img
              class="thumb"
              src={src.clone()}
              alt="task image"
              title="Click to remove image"
              onclick={move |_| on_remove_image.emit(id)}
          />
      }
    }
    | None => html! {}
  };

  html! {
      <div class={classes!("task", row.done.then_some("done"))}>
          { thumbnail }
          <div class="title">{ &row.text }</div>
          <div class="meta">
              <div class="muted">{ &row.created_label }</div>
              <div style="flex:1"></div>
              {
                  match row.badge() {
                      Some(badge) => html! { <div class="badge">{ badge }</div> },
                      None => html! {}
                  }
              }
          </div>
          <div class="actions">
              <button
                  type="button"
                  title={row.toggle_title()}
                  onclick={move |_| on_toggle.emit(id)}
              >
                  { row.toggle_glyph() }
              </button>
              <button
                  type="button"
                  title="Delete"
                  onclick={move |_| on_delete.emit(id)}
              >
                  { "✕" }
              </button>
          </div>
      </div>
  }
}
