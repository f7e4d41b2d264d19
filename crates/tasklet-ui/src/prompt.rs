use tasklet_core::prompt::{
  Confirmation,
  Notice,
  Prompter
};

/// Native `confirm()` / `alert()`
/// dialogs.
pub struct BrowserPrompter;

impl Prompter for BrowserPrompter {
  fn confirm(
    &mut self,
    confirmation: Confirmation
  ) -> bool {
    let confirmed = web_sys::window()
      .and_then(|window| {
        window
          .confirm_with_message(
            confirmation.message()
          )
          .ok()
      })
      .unwrap_or(false);
    if !confirmed {
      tracing::info!(
        ?confirmation,
        "confirmation declined"
      );
    }
    confirmed
  }

  fn acknowledge(
    &mut self,
    notice: Notice
  ) {
    if let Some(window) =
      web_sys::window()
      && let Err(error) = window
        .alert_with_message(
          notice.message()
        )
    {
      tracing::warn!(
        ?error,
        "failed to show alert"
      );
    }
  }
}
