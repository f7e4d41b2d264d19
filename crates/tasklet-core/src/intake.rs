use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::{debug, warn};

use crate::error::IntakeError;

/// Handle for one in-flight image decode. Only the most recently issued
/// ticket may set the pending image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntakeTicket {
    generation: u64,
}

impl IntakeTicket {
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Holds at most one staged image for the next created task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageIntake {
    pending: Option<String>,
    generation: u64,
}

pub fn is_image_type(media_type: &str) -> bool {
    media_type.trim().starts_with("image/")
}

/// `data:<media_type>;base64,<payload>`, the form an `<img src>` accepts.
pub fn encode_data_url(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", media_type.trim(), BASE64.encode(bytes))
}

impl ImageIntake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Validates the media type and opens a new decode generation. Any
    /// decode started earlier becomes stale.
    pub fn begin(&mut self, media_type: &str) -> Result<IntakeTicket, IntakeError> {
        if !is_image_type(media_type) {
            return Err(IntakeError::InvalidFileType {
                media_type: media_type.to_string(),
            });
        }
        self.generation += 1;
        debug!(generation = self.generation, media_type, "image decode started");
        Ok(IntakeTicket {
            generation: self.generation,
        })
    }

    pub fn complete(&mut self, ticket: IntakeTicket, data_url: String) -> bool {
        if ticket.generation != self.generation {
            warn!(
                stale = ticket.generation,
                current = self.generation,
                "dropping superseded image decode"
            );
            return false;
        }
        self.pending = Some(data_url);
        true
    }

    pub fn complete_bytes(&mut self, ticket: IntakeTicket, media_type: &str, bytes: &[u8]) -> bool {
        self.complete(ticket, encode_data_url(media_type, bytes))
    }

    pub fn consume(&mut self) -> Option<String> {
        self.pending.take()
    }

    pub fn reset(&mut self) {
        self.pending = None;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_image_types() {
        let mut intake = ImageIntake::new();
        let err = intake.begin("application/pdf").unwrap_err();
        assert_eq!(
            err,
            IntakeError::InvalidFileType {
                media_type: "application/pdf".to_string()
            }
        );
        assert!(intake.begin("").is_err());
        assert!(!intake.has_pending());
    }

    #[test]
    fn completed_decode_becomes_pending_and_consumes_once() {
        let mut intake = ImageIntake::new();
        let ticket = intake.begin("image/png").unwrap();
        assert!(intake.complete_bytes(ticket, "image/png", b"hi"));
        assert_eq!(intake.pending(), Some("data:image/png;base64,aGk="));

        assert_eq!(intake.consume().as_deref(), Some("data:image/png;base64,aGk="));
        assert_eq!(intake.consume(), None);
    }

    #[test]
    fn stale_completion_cannot_overwrite_newer_image() {
        let mut intake = ImageIntake::new();
        let first = intake.begin("image/png").unwrap();
        let second = intake.begin("image/jpeg").unwrap();

        assert!(intake.complete(second, "second".to_string()));
        assert!(!intake.complete(first, "first".to_string()));
        assert_eq!(intake.pending(), Some("second"));
    }

    #[test]
    fn rejected_file_does_not_invalidate_in_flight_decode() {
        let mut intake = ImageIntake::new();
        let ticket = intake.begin("image/webp").unwrap();
        assert!(intake.begin("text/plain").is_err());
        assert!(intake.complete(ticket, "webp".to_string()));
    }

    #[test]
    fn reset_clears_and_invalidates() {
        let mut intake = ImageIntake::new();
        let ticket = intake.begin("image/gif").unwrap();
        intake.reset();
        assert!(!intake.complete(ticket, "late".to_string()));
        assert!(!intake.has_pending());
    }

    #[test]
    fn replacing_pending_image_keeps_latest() {
        let mut intake = ImageIntake::new();
        let a = intake.begin("image/png").unwrap();
        intake.complete(a, "a".to_string());
        let b = intake.begin("image/png").unwrap();
        intake.complete(b, "b".to_string());
        assert_eq!(intake.pending(), Some("b"));
    }
}
