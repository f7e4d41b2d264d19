use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  Properties,
  SubmitEvent,
  TargetCast,
  function_component,
  html,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct AddTaskFormProps {
  pub on_add: Callback<String>
}

#[function_component(AddTaskForm)]
pub fn add_task_form(
  props: &AddTaskFormProps
) -> Html {
  let draft = use_state(String::new);

  let submit = {
    let draft = draft.clone();
    let on_add = props.on_add.clone();
    Callback::from(move |_: ()| {
      let text = (*draft).clone();
      if text.trim().is_empty() {
        return;
      }
      on_add.emit(text);
      draft.set(String::new());
    })
  };

  let onsubmit = {
    let submit = submit.clone();
    Callback::from(
      move |event: SubmitEvent| {
        event.prevent_default();
        submit.emit(());
      }
    )
  };

  let oninput = {
    let draft = draft.clone();
    Callback::from(
      move |event: InputEvent| {
        let input: HtmlInputElement =
          event.target_unchecked_into();
        draft.set(input.value());
      }
    )
  };

  html! {
      <form class="add-form" onsubmit={onsubmit}>
          <input
              class="task-input"
              type="text"
              placeholder="What needs doing?"
              value={(*draft).clone()}
              oninput={oninput}
          />
          <button
              class="btn"
              type="button"
              onclick={move |_| submit.emit(())}
          >
              { "Add" }
          </button>
      </form>
  }
}
