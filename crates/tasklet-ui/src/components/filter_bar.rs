use tasklet_core::StatusFilter;
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
  pub status:           StatusFilter,
  pub query:            String,
  pub on_select_status:
    Callback<StatusFilter>,
  pub on_query:         Callback<String>
}

#[function_component(FilterBar)]
pub fn filter_bar(
  props: &FilterBarProps
) -> Html {
  let on_input = {
    let on_query = props.on_query.clone();
    Callback::from(
      move |event: InputEvent| {
        let input: HtmlInputElement =
          event.target_unchecked_into();
        on_query.emit(input.value());
      }
    )
  };

  html! {
      <div class="toolbar">
          <div class="filters">
              {
                  for StatusFilter::ALL.iter().copied().map(|status| {
                      let on_select_status = props.on_select_status.clone();
                      let class = if props.status == status { "active" } else { "" };
                      html! {
                          <button
                              type="button"
                              class={class}
                              data-filter={status.as_str()}
                              onclick={move |_| on_select_status.emit(status)}
                          >
                              { status.label() }
                          </button>
                      }
                  })
              }
          </div>
          <input
              class="search"
              type="search"
              placeholder="Search tasks..."
              value={props.query.clone()}
              oninput={on_input}
          />
      </div>
  }
}
