use chrono::{DateTime, Utc};
use tracing::debug;

use crate::task::{Task, TaskId, next_id};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub total: usize,
    pub active: usize,
    pub done: usize,
}

/// The in-memory task collection, newest first.
///
/// Mutations here never persist; the caller saves after each change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn counts(&self) -> TaskCounts {
        let done = self.tasks.iter().filter(|t| t.done).count();
        TaskCounts {
            total: self.tasks.len(),
            active: self.tasks.len() - done,
            done,
        }
    }

    /// Prepends a new task. Returns `None` without touching the collection
    /// when `text` is blank.
    pub fn create(
        &mut self,
        text: &str,
        pending_image: Option<String>,
        now: DateTime<Utc>,
    ) -> Option<&Task> {
        let text = text.trim();
        if text.is_empty() {
            debug!("ignoring blank task text");
            return None;
        }

        let id = next_id(now, &self.tasks);
        self.tasks
            .insert(0, Task::new(id, text.to_string(), now, pending_image));
        debug!(id, count = self.tasks.len(), "created task");
        self.tasks.first()
    }

    pub fn seed_sample(&mut self, text: &str, now: DateTime<Utc>) -> TaskId {
        let id = next_id(now, &self.tasks);
        self.tasks.push(Task::new(id, text.to_string(), now, None));
        id
    }

    pub fn toggle_done(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.done = !task.done;
                debug!(id, done = task.done, "toggled task");
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        before != self.tasks.len()
    }

    pub fn remove_image(&mut self, id: TaskId) -> bool {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .and_then(|task| task.img.take())
            .is_some()
    }

    pub fn clear_done(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.done);
        before - self.tasks.len()
    }

    pub fn clear_all(&mut self) -> usize {
        let removed = self.tasks.len();
        self.tasks.clear();
        removed
    }
}
