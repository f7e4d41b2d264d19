pub mod app;
pub mod config;
pub mod error;
pub mod filter;
pub mod intake;
pub mod persist;
pub mod prompt;
pub mod render;
pub mod store;
pub mod task;

pub use app::{Command, Outcome, TaskApp};
pub use config::AppConfig;
pub use filter::{StatusFilter, ViewFilter};
pub use persist::{KeyValueStore, MemoryStorage, PersistenceAdapter};
pub use task::{Task, TaskId};
