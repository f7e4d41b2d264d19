use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::trace;

use crate::task::Task;

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Hash
)]
pub enum StatusFilter {
  #[default]
  All,
  Active,
  Done
}

impl StatusFilter {
  pub const ALL: [StatusFilter; 3] = [
    StatusFilter::All,
    StatusFilter::Active,
    StatusFilter::Done
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      | Self::All => "all",
      | Self::Active => "active",
      | Self::Done => "done"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::All => "All",
      | Self::Active => "Active",
      | Self::Done => "Done"
    }
  }

  fn admits(
    self,
    task: &Task
  ) -> bool {
    match self {
      | Self::All => true,
      | Self::Active => !task.done,
      | Self::Done => task.done
    }
  }
}

impl fmt::Display for StatusFilter {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
#[error("unknown status filter {0:?}")]
pub struct UnknownStatusFilter(
  pub String
);

impl FromStr for StatusFilter {
  type Err = UnknownStatusFilter;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    match s.trim() {
      | "all" => Ok(Self::All),
      | "active" => Ok(Self::Active),
      | "done" => Ok(Self::Done),
      | other => Err(
        UnknownStatusFilter(
          other.to_string()
        )
      )
    }
  }
}

/// Transient view state: never persisted.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct ViewFilter {
  pub status: StatusFilter,
  pub query:  String
}

impl ViewFilter {
  pub fn new(
    status: StatusFilter,
    query: impl Into<String>
  ) -> Self {
    Self {
      status,
      query: query.into()
    }
  }

  fn needle(&self) -> String {
    self.query.trim().to_lowercase()
  }
}

/// Derives the visible subset in source order.
pub fn visible(
  tasks: &[Task],
  filter: &ViewFilter
) -> Vec<Task> {
  let needle = filter.needle();

  let out: Vec<Task> = tasks
    .iter()
    .filter(|task| {
      filter.status.admits(task)
    })
    .filter(|task| {
      needle.is_empty()
        || task
          .text
          .to_lowercase()
          .contains(&needle)
    })
    .cloned()
    .collect();

  trace!(
    status = %filter.status,
    query = %needle,
    total = tasks.len(),
    shown = out.len(),
    "computed visible tasks"
  );
  out
}

#[cfg(test)]
mod tests {
  use chrono::{
    TimeZone,
    Utc
  };

  use super::*;

  fn task(
    id: i64,
    text: &str,
    done: bool
  ) -> Task {
    let mut t = Task::new(
      id,
      text.to_string(),
      Utc
        .timestamp_millis_opt(id)
        .unwrap(),
      None
    );
    t.done = done;
    t
  }

  fn ids(tasks: &[Task]) -> Vec<i64> {
    tasks.iter().map(|t| t.id).collect()
  }

  #[test]
  fn status_filters_split_done_and_active()
  {
    let tasks = vec![
      task(1, "finished", true),
      task(2, "open", false),
    ];

    let active = visible(
      &tasks,
      &ViewFilter::new(
        StatusFilter::Active,
        ""
      )
    );
    let done = visible(
      &tasks,
      &ViewFilter::new(
        StatusFilter::Done,
        ""
      )
    );
    let all = visible(
      &tasks,
      &ViewFilter::default()
    );

    assert_eq!(ids(&active), vec![2]);
    assert_eq!(ids(&done), vec![1]);
    assert_eq!(ids(&all), vec![1, 2]);
  }

  #[test]
  fn search_is_case_insensitive_substring()
  {
    let tasks = vec![
      task(1, "buy milk", false),
      task(2, "walk dog", false),
    ];

    let hits = visible(
      &tasks,
      &ViewFilter::new(
        StatusFilter::All,
        "MILK"
      )
    );
    assert_eq!(ids(&hits), vec![1]);

    let padded = visible(
      &tasks,
      &ViewFilter::new(
        StatusFilter::All,
        "  Dog "
      )
    );
    assert_eq!(ids(&padded), vec![2]);
  }

  #[test]
  fn whitespace_query_matches_everything()
  {
    let tasks = vec![
      task(1, "a", false),
      task(2, "b", true),
    ];
    let out = visible(
      &tasks,
      &ViewFilter::new(
        StatusFilter::All,
        "   "
      )
    );
    assert_eq!(ids(&out), vec![1, 2]);
  }

  #[test]
  fn status_and_query_combine() {
    let tasks = vec![
      task(1, "milk run", true),
      task(2, "milk again", false),
      task(3, "bread", false),
    ];
    let out = visible(
      &tasks,
      &ViewFilter::new(
        StatusFilter::Active,
        "milk"
      )
    );
    assert_eq!(ids(&out), vec![2]);
  }

  #[test]
  fn visible_is_pure_and_idempotent() {
    let tasks = vec![
      task(3, "Gamma", false),
      task(2, "beta", true),
      task(1, "alphabet", false),
    ];
    let filter = ViewFilter::new(
      StatusFilter::All,
      "a"
    );

    let first =
      visible(&tasks, &filter);
    let second =
      visible(&tasks, &filter);
    assert_eq!(first, second);
    assert_eq!(ids(&first), vec![
      3, 2, 1
    ]);
  }

  #[test]
  fn status_filter_parses_button_values()
  {
    for status in StatusFilter::ALL {
      assert_eq!(
        status
          .as_str()
          .parse::<StatusFilter>(),
        Ok(status)
      );
    }
    assert!(
      "archived"
        .parse::<StatusFilter>()
        .is_err()
    );
  }
}
