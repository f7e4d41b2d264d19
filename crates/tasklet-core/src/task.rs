use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type TaskId = i64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,

    pub text: String,

    #[serde(default)]
    pub done: bool,

    #[serde(with = "iso8601_millis")]
    pub created: DateTime<Utc>,

    #[serde(default)]
    pub img: Option<String>,
}

impl Task {
    pub fn new(id: TaskId, text: String, created: DateTime<Utc>, img: Option<String>) -> Self {
        Self {
            id,
            text,
            done: false,
            created,
            img,
        }
    }

    pub fn has_image(&self) -> bool {
        self.img.as_deref().is_some_and(|img| !img.is_empty())
    }
}

/// Picks an id from the creation instant, bumped past every id already in
/// `existing` so two tasks created in the same millisecond stay distinct.
pub fn next_id(now: DateTime<Utc>, existing: &[Task]) -> TaskId {
    let stamp = now.timestamp_millis();
    match existing.iter().map(|t| t.id).max() {
        Some(max) if max >= stamp => max.saturating_add(1),
        _ => stamp,
    }
}

/// `created` is written the way a browser's `Date.toISOString()` writes it
/// (millisecond precision, `Z` suffix) and read back from any RFC 3339 form.
pub mod iso8601_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(raw.trim())
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| D::Error::custom(format!("invalid timestamp {raw:?}: {e}")))
    }
}
