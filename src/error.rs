use std::fmt;
use thiserror::Error;

/// Problems found while building the question bank. These are raised once at
/// startup, never while a quiz is running.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("failed to decode question bank: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("question bank is empty")]
    EmptyBank,

    #[error("question {id} has {found} options, expected {expected}")]
    OptionCount {
        id: u32,
        found: usize,
        expected: usize,
    },

    #[error("question {id} marks option {index} as correct but only has {len} options")]
    CorrectIndexOutOfRange { id: u32, index: usize, len: usize },

    #[error("question id {0} appears more than once")]
    DuplicateId(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Email Address",
            ContactField::Message => "Your Message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(ContactField),

    #[error("please enter a valid email address")]
    InvalidEmail,

    #[error("the previous message is still being acknowledged")]
    AwaitingReset,
}
