use chrono::{DateTime, Utc};
use tracing::{debug, error, info, warn};

use crate::config::AppConfig;
use crate::filter::{StatusFilter, ViewFilter, visible};
use crate::intake::{ImageIntake, IntakeTicket};
use crate::persist::{KeyValueStore, PersistenceAdapter};
use crate::prompt::{Confirmation, Notice, Prompter};
use crate::render::{ListView, render};
use crate::store::{TaskCounts, TaskStore};
use crate::task::{Task, TaskId};

/// A discrete user intent coming from the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { text: String },
    ToggleDone { id: TaskId },
    Delete { id: TaskId },
    RemoveImage { id: TaskId },
    ClearDone,
    ClearAll,
    SetStatus(StatusFilter),
    SetQuery(String),
    ResetIntake,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The collection changed and was saved.
    Changed,
    /// Nothing matched or there was nothing to do.
    Unchanged,
    /// The user declined a confirmation.
    Cancelled,
    /// Only transient view state changed.
    ViewOnly,
}

impl Outcome {
    pub fn needs_redraw(self) -> bool {
        matches!(self, Self::Changed | Self::ViewOnly)
    }
}

/// Owns every piece of application state: the task collection, its
/// persisted mirror, the staged image and the view filter.
#[derive(Debug)]
pub struct TaskApp<S> {
    store: TaskStore,
    persistence: PersistenceAdapter<S>,
    intake: ImageIntake,
    filter: ViewFilter,
    config: AppConfig,
}

impl<S: KeyValueStore> TaskApp<S> {
    /// Loads the stored collection. An empty collection gets one sample task,
    /// saved before any user action.
    #[tracing::instrument(skip_all)]
    pub fn start(storage: S, config: AppConfig, now: DateTime<Utc>) -> Self {
        let persistence = PersistenceAdapter::new(storage, config.storage_key.clone());
        let store = TaskStore::new(persistence.load());

        let mut app = Self {
            store,
            persistence,
            intake: ImageIntake::new(),
            filter: ViewFilter::default(),
            config,
        };

        if app.store.is_empty() {
            let id = app.store.seed_sample(&app.config.sample_task_text, now);
            info!(id, "seeded sample task");
            app.persist();
        }

        info!(count = app.store.len(), "task app started");
        app
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn counts(&self) -> TaskCounts {
        self.store.counts()
    }

    pub fn filter(&self) -> &ViewFilter {
        &self.filter
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        self.persistence.storage()
    }

    pub fn image_attached(&self) -> bool {
        self.intake.has_pending()
    }

    pub fn visible(&self) -> Vec<Task> {
        visible(self.store.tasks(), &self.filter)
    }

    /// Rebuilds the whole list projection from current state.
    pub fn view(&self) -> ListView {
        render(&self.visible())
    }

    pub fn dispatch(
        &mut self,
        command: Command,
        prompter: &mut dyn Prompter,
        now: DateTime<Utc>,
    ) -> Outcome {
        debug!(?command, "dispatching command");
        let outcome = match command {
            Command::Add { text } => self.add(&text, now),
            Command::ToggleDone { id } => self.mutate(|store| store.toggle_done(id)),
            Command::Delete { id } => {
                if self.store.get(id).is_none() {
                    Outcome::Unchanged
                } else if !prompter.confirm(Confirmation::DeleteTask) {
                    Outcome::Cancelled
                } else {
                    self.mutate(|store| store.delete(id))
                }
            }
            Command::RemoveImage { id } => {
                if !self.store.get(id).is_some_and(Task::has_image) {
                    Outcome::Unchanged
                } else if !prompter.confirm(Confirmation::RemoveImage) {
                    Outcome::Cancelled
                } else {
                    self.mutate(|store| store.remove_image(id))
                }
            }
            Command::ClearDone => self.mutate(|store| store.clear_done() > 0),
            Command::ClearAll => {
                if self.store.is_empty() {
                    Outcome::Unchanged
                } else if !prompter.confirm(Confirmation::ClearAll) {
                    Outcome::Cancelled
                } else {
                    self.mutate(|store| store.clear_all() > 0)
                }
            }
            Command::SetStatus(status) => {
                self.filter.status = status;
                Outcome::ViewOnly
            }
            Command::SetQuery(query) => {
                self.filter.query = query;
                Outcome::ViewOnly
            }
            Command::ResetIntake => {
                self.intake.reset();
                Outcome::ViewOnly
            }
        };
        debug!(?outcome, "command finished");
        outcome
    }

    /// Starts staging an image. Non-image files are reported through the
    /// prompter and leave state untouched.
    pub fn begin_image(
        &mut self,
        media_type: &str,
        prompter: &mut dyn Prompter,
    ) -> Option<IntakeTicket> {
        match self.intake.begin(media_type) {
            Ok(ticket) => Some(ticket),
            Err(error) => {
                warn!(%error, "rejected attachment");
                prompter.acknowledge(Notice::NotAnImage);
                None
            }
        }
    }

    pub fn finish_image(&mut self, ticket: IntakeTicket, media_type: &str, bytes: &[u8]) -> bool {
        let applied = self.intake.complete_bytes(ticket, media_type, bytes);
        if applied {
            debug!(generation = ticket.generation(), bytes = bytes.len(), "image attached");
        }
        applied
    }

    fn add(&mut self, text: &str, now: DateTime<Utc>) -> Outcome {
        if text.trim().is_empty() {
            return Outcome::Unchanged;
        }
        let image = self.intake.consume();
        self.intake.reset();
        self.store.create(text, image, now);
        self.persist();
        Outcome::Changed
    }

    fn mutate(&mut self, op: impl FnOnce(&mut TaskStore) -> bool) -> Outcome {
        if op(&mut self.store) {
            self.persist();
            Outcome::Changed
        } else {
            Outcome::Unchanged
        }
    }

    fn persist(&mut self) {
        if let Err(error) = self.persistence.save(self.store.tasks()) {
            error!(%error, "failed to save tasks");
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::persist::MemoryStorage;
    use crate::prompt::FixedAnswer;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    fn started() -> TaskApp<MemoryStorage> {
        TaskApp::start(MemoryStorage::new(), AppConfig::default(), at(1_000))
    }

    #[test]
    fn add_consumes_pending_image_only_on_success() {
        let mut app = started();
        let ticket = app.begin_image("image/png", &mut FixedAnswer(true)).unwrap();
        assert!(app.finish_image(ticket, "image/png", b"png"));

        let blank = app.dispatch(
            Command::Add { text: "   ".into() },
            &mut FixedAnswer(true),
            at(2_000),
        );
        assert_eq!(blank, Outcome::Unchanged);
        assert!(app.image_attached());

        let added = app.dispatch(
            Command::Add { text: "photo".into() },
            &mut FixedAnswer(true),
            at(3_000),
        );
        assert_eq!(added, Outcome::Changed);
        assert!(!app.image_attached());
        assert_eq!(app.tasks()[0].img.as_deref(), Some("data:image/png;base64,cG5n"));
    }

    #[test]
    fn declined_delete_keeps_task() {
        let mut app = started();
        let id = app.tasks()[0].id;
        let outcome = app.dispatch(Command::Delete { id }, &mut FixedAnswer(false), at(2));
        assert_eq!(outcome, Outcome::Cancelled);
        assert_eq!(app.tasks().len(), 1);
    }

    #[test]
    fn filter_changes_are_view_only() {
        let mut app = started();
        let saved = app.storage().raw(&app.config().storage_key).map(str::to_string);

        let outcome = app.dispatch(
            Command::SetStatus(StatusFilter::Done),
            &mut FixedAnswer(true),
            at(2),
        );
        assert_eq!(outcome, Outcome::ViewOnly);
        assert!(app.view().show_empty);
        assert_eq!(
            app.storage().raw(&app.config().storage_key).map(str::to_string),
            saved
        );
    }
}
