use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use gloo::console::log;
use tasklet_core::{
  AppConfig,
  Command,
  TaskApp,
  TaskId
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  classes,
  function_component,
  html,
  use_force_update,
  use_mut_ref,
  use_state
};

use crate::components::{
  AddTaskForm,
  FilterBar,
  GlobalActions,
  ImageDropzone,
  TaskList
};
use crate::prompt::BrowserPrompter;
use crate::storage::LocalStorage;
use crate::theme::{
  load_theme_mode,
  save_theme_mode
};

const APP_CONFIG_TOML: &str =
  include_str!("../assets/tasklet.toml");

type SharedApp =
  Rc<RefCell<TaskApp<LocalStorage>>>;

fn bootstrap() -> TaskApp<LocalStorage> {
  let config =
    AppConfig::load_or_default(
      APP_CONFIG_TOML
    );
  TaskApp::start(
    LocalStorage,
    config,
    Utc::now()
  )
}

#[function_component(App)]
pub fn app() -> Html {
  let state: SharedApp =
    use_mut_ref(bootstrap);
  let redraw = use_force_update();

  let theme_key = state
    .borrow()
    .config()
    .theme_storage_key
    .clone();
  let theme = {
    let theme_key = theme_key.clone();
    use_state(move || {
      load_theme_mode(&theme_key)
    })
  };

  // Every intent goes through here:
  // mutate, persist, then redraw
  // from scratch.
  let dispatch = {
    let state = state.clone();
    let redraw = redraw.clone();
    Callback::from(
      move |command: Command| {
        let outcome = state
          .borrow_mut()
          .dispatch(
            command,
            &mut BrowserPrompter,
            Utc::now()
          );
        if outcome.needs_redraw() {
          redraw.force_update();
        }
      }
    )
  };

  let on_add = dispatch.reform(
    |text: String| Command::Add {
      text
    }
  );
  let on_toggle = dispatch.reform(
    |id: TaskId| Command::ToggleDone {
      id
    }
  );
  let on_delete = dispatch.reform(
    |id: TaskId| Command::Delete { id }
  );
  let on_remove_image = dispatch
    .reform(|id: TaskId| {
      Command::RemoveImage { id }
    });
  let on_select_status = dispatch
    .reform(Command::SetStatus);
  let on_query =
    dispatch.reform(Command::SetQuery);
  let on_clear_done = dispatch.reform(
    |_: MouseEvent| Command::ClearDone
  );
  let on_clear_all = dispatch.reform(
    |_: MouseEvent| Command::ClearAll
  );
  let on_clear_image = dispatch
    .reform(|_: ()| Command::ResetIntake);

  let on_file = {
    let state = state.clone();
    let redraw = redraw.clone();
    Callback::from(
      move |file: web_sys::File| {
        let media_type = file.type_();
        let Some(ticket) = state
          .borrow_mut()
          .begin_image(
            &media_type,
            &mut BrowserPrompter
          )
        else {
          return;
        };

        let state = state.clone();
        let redraw = redraw.clone();
        let file =
          gloo::file::File::from(file);
        wasm_bindgen_futures::spawn_local(
          async move {
            match gloo::file::futures::read_as_bytes(&file).await {
              | Ok(bytes) => {
                let applied = state
                  .borrow_mut()
                  .finish_image(
                    ticket,
                    &media_type,
                    &bytes
                  );
                if applied {
                  ui_debug(
                    "intake.attached",
                    &file.name()
                  );
                  redraw.force_update();
                }
              }
              | Err(error) => {
                tracing::error!(
                  ?error,
                  "failed reading image \
                   file"
                );
              }
            }
          }
        );
      }
    )
  };

  let on_toggle_theme = {
    let theme = theme.clone();
    Callback::from(move |_: MouseEvent| {
      let next = (*theme).next();
      save_theme_mode(&theme_key, next);
      theme.set(next);
    })
  };

  let app = state.borrow();
  let view = app.view();
  let filter = app.filter().clone();

  html! {
      <div class={classes!("app", (*theme).as_class())}>
          <div class="card">
              <h1 class="brand">{ "Tasklet" }</h1>
              <AddTaskForm on_add={on_add} />
              <ImageDropzone
                  image_attached={app.image_attached()}
                  on_file={on_file}
                  on_clear={on_clear_image}
              />
              <FilterBar
                  status={filter.status}
                  query={filter.query}
                  on_select_status={on_select_status}
                  on_query={on_query}
              />
              <TaskList
                  rows={view.rows}
                  show_empty={view.show_empty}
                  on_toggle={on_toggle}
                  on_delete={on_delete}
                  on_remove_image={on_remove_image}
              />
              <GlobalActions
                  counts={app.counts()}
                  on_clear_done={on_clear_done}
                  on_clear_all={on_clear_all}
                  on_toggle_theme={on_toggle_theme}
                  theme_toggle_label={(*theme).toggle_label().to_string()}
              />
          </div>
      </div>
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
