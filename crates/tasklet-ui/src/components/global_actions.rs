use tasklet_core::store::TaskCounts;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct GlobalActionsProps {
  pub counts:             TaskCounts,
  pub on_clear_done:
    Callback<MouseEvent>,
  pub on_clear_all:
    Callback<MouseEvent>,
  pub on_toggle_theme:
    Callback<MouseEvent>,
  pub theme_toggle_label: String
}

#[function_component(GlobalActions)]
pub fn global_actions(
  props: &GlobalActionsProps
) -> Html {
  let counts = props.counts;

  html! {
      <div class="footer">
          <span class="muted">
              { format!("{} tasks · {} active · {} done", counts.total, counts.active, counts.done) }
          </span>
          <div style="flex:1"></div>
          <button class="btn" type="button" onclick={props.on_clear_done.clone()}>{ "Clear done" }</button>
          <button class="btn danger" type="button" onclick={props.on_clear_all.clone()}>{ "Clear all" }</button>
          <button class="btn" type="button" onclick={props.on_toggle_theme.clone()}>{ props.theme_toggle_label.clone() }</button>
      </div>
  }
}
