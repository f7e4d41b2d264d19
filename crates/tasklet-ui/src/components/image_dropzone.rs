use web_sys::{
  DragEvent,
  File,
  HtmlInputElement
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  NodeRef,
  Properties,
  TargetCast,
  classes,
  function_component,
  html,
  use_node_ref,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct ImageDropzoneProps {
  pub image_attached: bool,
  pub on_file:        Callback<File>,
  pub on_clear:       Callback<()>
}

fn first_file(
  files: Option<web_sys::FileList>
) -> Option<File> {
  files.and_then(|files| files.get(0))
}

#[function_component(ImageDropzone)]
pub fn image_dropzone(
  props: &ImageDropzoneProps
) -> Html {
  let dragging = use_state(|| false);
  let file_input: NodeRef =
    use_node_ref();

  let onclick = {
    let file_input = file_input.clone();
    Callback::from(move |_| {
      if let Some(input) = file_input
        .cast::<HtmlInputElement>()
      {
        input.click();
      }
    })
  };

  let on_clear = {
    let on_clear = props.on_clear.clone();
    Callback::from(
      move |event: MouseEvent| {
        event.stop_propagation();
        on_clear.emit(());
      }
    )
  };

  let ondragenter = {
    let dragging = dragging.clone();
    Callback::from(
      move |event: DragEvent| {
        event.prevent_default();
        dragging.set(true);
      }
    )
  };

  let ondragover = {
    let dragging = dragging.clone();
    Callback::from(
      move |event: DragEvent| {
        event.prevent_default();
        dragging.set(true);
      }
    )
  };

  let ondragleave = {
    let dragging = dragging.clone();
    Callback::from(
      move |event: DragEvent| {
        event.prevent_default();
        dragging.set(false);
      }
    )
  };

  let ondrop = {
    let dragging = dragging.clone();
    let on_file = props.on_file.clone();
    Callback::from(
      move |event: DragEvent| {
        event.prevent_default();
        dragging.set(false);
        let file = first_file(
          event
            .data_transfer()
            .and_then(|data| data.files())
        );
        match file {
          | Some(file) => {
            on_file.emit(file)
          }
          | None => {
            tracing::debug!(
              "drop carried no file"
            )
          }
        }
      }
    )
  };

  let onchange = {
    let on_file = props.on_file.clone();
    Callback::from(
      move |event: yew::Event| {
        let input: HtmlInputElement =
          event.target_unchecked_into();
        if let Some(file) =
          first_file(input.files())
        {
          on_file.emit(file);
        }
        input.set_value("");
      }
    )
  };

  html! {
      <>
          <div
              class={classes!(
                  "dropzone",
                  (*dragging).then_some("drag"),
                  props.image_attached.then_some("hasimg")
              )}
              onclick={onclick}
              ondragenter={ondragenter}
              ondragover={ondragover}
              ondragleave={ondragleave}
              ondrop={ondrop}
          >
              {
                  if props.image_attached {
                      html! {
                          <>
                              <strong>{ "Image attached" }</strong>
                              { " — it will be added to the next task. Click to change." }
                              <button class="link" type="button" onclick={on_clear}>{ "Discard" }</button>
                          </>
                      }
                  } else {
                      html! { "Drop an image here or click to attach one" }
                  }
              }
          </div>
          <input
              ref={file_input}
              type="file"
              accept="image/*"
              style="display:none"
              onchange={onchange}
          />
      </>
  }
}
