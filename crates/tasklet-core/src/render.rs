use std::fmt;

use chrono::{
  DateTime,
  Local,
  TimeZone,
  Utc
};

use crate::task::{
  Task,
  TaskId
};

const CREATED_FORMAT: &str =
  "%Y-%m-%d %H:%M";

/// Everything one list row shows.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct TaskRow {
  pub id:            TaskId,
  pub text:          String,
  pub thumbnail:     Option<String>,
  pub created_label: String,
  pub done:          bool
}

impl TaskRow {
  pub fn badge(
    &self
  ) -> Option<&'static str> {
    self.done.then_some("Completed")
  }

  pub fn toggle_glyph(
    &self
  ) -> &'static str {
    if self.done { "↺" } else { "✓" }
  }

  pub fn toggle_title(
    &self
  ) -> &'static str {
    if self.done {
      "Mark as active"
    } else {
      "Toggle Done"
    }
  }
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct ListView {
  pub rows:       Vec<TaskRow>,
  pub show_empty: bool
}

pub fn format_created<Tz>(
  created: DateTime<Utc>,
  tz: &Tz
) -> String
where
  Tz: TimeZone,
  Tz::Offset: fmt::Display
{
  created
    .with_timezone(tz)
    .format(CREATED_FORMAT)
    .to_string()
}

/// Projects the visible tasks using the
/// local time zone for timestamps.
pub fn render(
  visible: &[Task]
) -> ListView {
  render_in(visible, &Local)
}

pub fn render_in<Tz>(
  visible: &[Task],
  tz: &Tz
) -> ListView
where
  Tz: TimeZone,
  Tz::Offset: fmt::Display
{
  let rows = visible
    .iter()
    .map(|task| TaskRow {
      id:            task.id,
      text:          task.text.clone(),
      thumbnail:     task
        .img
        .clone()
        .filter(|img| !img.is_empty()),
      created_label: format_created(
        task.created,
        tz
      ),
      done:          task.done
    })
    .collect::<Vec<_>>();

  ListView {
    show_empty: rows.is_empty(),
    rows
  }
}

#[cfg(test)]
mod tests {
  use chrono::FixedOffset;

  use super::*;

  fn task(done: bool) -> Task {
    let created = Utc
      .with_ymd_and_hms(
        2026, 10, 17, 8, 5, 0
      )
      .unwrap();
    let mut t = Task::new(
      9,
      "water plants".to_string(),
      created,
      Some(
        "data:image/png;base64,AA"
          .to_string()
      )
    );
    t.done = done;
    t
  }

  #[test]
  fn empty_visible_set_flags_empty_state()
  {
    let view = render_in(&[], &Utc);
    assert!(view.show_empty);
    assert!(view.rows.is_empty());
  }

  #[test]
  fn row_carries_badge_and_glyph() {
    let view = render_in(
      &[task(true), task(false)],
      &Utc
    );
    assert!(!view.show_empty);

    let done = &view.rows[0];
    assert_eq!(
      done.badge(),
      Some("Completed")
    );
    assert_eq!(done.toggle_glyph(), "↺");
    assert_eq!(
      done.created_label,
      "2026-10-17 08:05"
    );

    let open = &view.rows[1];
    assert_eq!(open.badge(), None);
    assert_eq!(open.toggle_glyph(), "✓");
    assert!(open.thumbnail.is_some());
  }

  #[test]
  fn created_label_follows_time_zone() {
    let plus_two =
      FixedOffset::east_opt(2 * 3600)
        .unwrap();
    let view =
      render_in(&[task(false)], &plus_two);
    assert_eq!(
      view.rows[0].created_label,
      "2026-10-17 10:05"
    );
  }

  #[test]
  fn empty_img_renders_without_thumbnail()
  {
    let mut blank = task(false);
    blank.img = Some(String::new());
    let view = render_in(&[blank], &Utc);
    assert_eq!(view.rows[0].thumbnail, None);
  }
}
