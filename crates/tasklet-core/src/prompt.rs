/// Destructive actions that need a yes/no from the user first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    DeleteTask,
    RemoveImage,
    ClearAll,
}

impl Confirmation {
    pub fn message(self) -> &'static str {
        match self {
            Self::DeleteTask => "Delete this task?",
            Self::RemoveImage => "Remove image from this task?",
            Self::ClearAll => "Clear all tasks?",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NotAnImage,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Self::NotAnImage => "Please select an image file.",
        }
    }
}

/// Port to whatever asks the user: browser dialogs in the frontend, a
/// scripted double in tests.
pub trait Prompter {
    fn confirm(&mut self, confirmation: Confirmation) -> bool;

    fn acknowledge(&mut self, notice: Notice);
}

/// Answers every confirmation the same way and ignores notices.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Prompter for FixedAnswer {
    fn confirm(&mut self, _confirmation: Confirmation) -> bool {
        self.0
    }

    fn acknowledge(&mut self, _notice: Notice) {}
}
