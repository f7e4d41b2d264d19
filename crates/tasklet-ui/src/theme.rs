#[derive(
  Clone, Copy, PartialEq, Eq,
)]
pub enum ThemeMode {
  Day,
  Night
}

impl ThemeMode {
  pub fn as_class(
    self
  ) -> &'static str {
    match self {
      | Self::Day => "theme-day",
      | Self::Night => "theme-night"
    }
  }

  pub fn next(self) -> Self {
    match self {
      | Self::Day => Self::Night,
      | Self::Night => Self::Day
    }
  }

  fn storage_value(
    self
  ) -> &'static str {
    match self {
      | Self::Day => "day",
      | Self::Night => "night"
    }
  }

  pub fn toggle_label(
    self
  ) -> &'static str {
    match self {
      | Self::Day => "Dark",
      | Self::Night => "Light"
    }
  }
}

pub fn load_theme_mode(
  key: &str
) -> ThemeMode {
  let stored = web_sys::window()
    .and_then(|window| {
      window
        .local_storage()
        .ok()
        .flatten()
    })
    .and_then(|storage| {
      storage.get_item(key).ok().flatten()
    });

  match stored.as_deref() {
    | Some("night") => ThemeMode::Night,
    | _ => ThemeMode::Day
  }
}

pub fn save_theme_mode(
  key: &str,
  theme: ThemeMode
) {
  if let Some(storage) =
    web_sys::window().and_then(
      |window| {
        window
          .local_storage()
          .ok()
          .flatten()
      }
    )
  {
    let _ = storage.set_item(
      key,
      theme.storage_value()
    );
  }
}
