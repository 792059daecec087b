//! Domain types for the to-do screen.
//!
//! A [`Todo`] is a single task record. The screen state ([`TodoState`]) holds
//! the list, the in-progress [`Draft`], the open toggle dialog and the current
//! toast. All changes go through [`TodoAction`] values processed by the
//! reducer.

use crate::list::TodoList;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque identifier for a todo item
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Wraps an identifier string
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TodoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique within the list
    pub id: TodoId,
    /// Trimmed, never empty
    pub name: String,
    /// Optional free text
    pub description: Option<String>,
    /// Completion flag
    pub done: bool,
}

impl Todo {
    /// Returns a copy with `done` flipped
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            done: !self.done,
            ..self.clone()
        }
    }
}

/// The in-progress new-todo form
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    /// Name as typed (trimmed on add)
    pub name: String,
    /// Description as typed
    pub description: String,
    /// Initial completion flag
    pub done: bool,
}

impl Draft {
    /// Creates a draft with just a name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the initial completion flag
    #[must_use]
    pub const fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    /// Description to store: `None` when blank
    #[must_use]
    pub fn normalized_description(&self) -> Option<String> {
        if self.description.trim().is_empty() {
            None
        } else {
            Some(self.description.clone())
        }
    }
}

/// Toast severity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastKind {
    /// Something the user has to fix
    Error,
}

/// Where the toast is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastPosition {
    /// Bottom edge of the screen
    Bottom,
}

/// A transient notification
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Sequence number, used to match the expiry timer to the toast it belongs to
    pub seq: u64,
    /// Severity
    pub kind: ToastKind,
    /// Text shown to the user
    pub message: String,
    /// Placement
    pub position: ToastPosition,
    /// When the toast appeared
    pub shown_at: DateTime<Utc>,
}

impl Toast {
    /// Creates an error toast at the bottom of the screen
    #[must_use]
    pub fn error(seq: u64, message: impl Into<String>, shown_at: DateTime<Utc>) -> Self {
        Self {
            seq,
            kind: ToastKind::Error,
            message: message.into(),
            position: ToastPosition::Bottom,
            shown_at,
        }
    }
}

/// State of the to-do screen
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TodoState {
    /// Items, newest first
    pub todos: TodoList,
    /// New-todo form
    pub draft: Draft,
    /// Item the toggle dialog is open for
    pub toggling: Option<TodoId>,
    /// Current notification
    pub toast: Option<Toast>,
    /// Last toast sequence number handed out
    pub toast_seq: u64,
}

impl TodoState {
    /// Creates a screen showing `todos` with an empty form
    #[must_use]
    pub fn new(todos: TodoList) -> Self {
        Self {
            todos,
            ..Self::default()
        }
    }

    /// The item the toggle dialog is open for, if any
    #[must_use]
    pub fn toggling_todo(&self) -> Option<&Todo> {
        self.toggling.as_ref().and_then(|id| self.todos.get(id))
    }

    /// Hands out the next toast sequence number
    pub const fn next_toast_seq(&mut self) -> u64 {
        self.toast_seq += 1;
        self.toast_seq
    }
}

/// Everything that can happen on the screen
///
/// UI intents come from event handlers; `ToastExpired` is fed back by the
/// runtime when the toast timer fires.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Name input changed
    DraftNameChanged(String),

    /// Description input changed
    DraftDescriptionChanged(String),

    /// Done switch changed
    DraftDoneChanged(bool),

    /// Add button pressed
    Add,

    /// Flip the completion flag of an item
    Toggle {
        /// Item to flip
        id: TodoId,
    },

    /// An item row was tapped; opens the toggle dialog
    ItemTapped {
        /// Tapped item
        id: TodoId,
    },

    /// Dialog dismissed with Cancel or by touching outside
    ToggleCancelled,

    /// Dialog confirmed
    ToggleConfirmed,

    /// Toast timer fired
    ToastExpired {
        /// Sequence number of the toast the timer was started for
        seq: u64,
    },
}
