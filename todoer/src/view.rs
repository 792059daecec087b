//! View models for the to-do screen.
//!
//! These are plain values derived from [`TodoState`]; a UI toolkit draws them
//! and turns user input back into [`crate::TodoAction`]s. The `Display` impl
//! on [`ScreenView`] is the text rendering used by the demo shell.

use crate::list::TodoList;
use crate::types::{TodoId, TodoState, ToastKind, ToastPosition};
use serde::Serialize;
use std::fmt;

/// Screen heading
pub const SCREEN_TITLE: &str = "Todoer Starter";
/// Shown instead of the list when there are no items
pub const EMPTY_PLACEHOLDER: &str = "No todos...";
/// Name input placeholder
pub const NAME_PLACEHOLDER: &str = "New task";
/// Description input placeholder
pub const DESCRIPTION_PLACEHOLDER: &str = "Optional description";
/// Add button label
pub const ADD_LABEL: &str = "Add";
/// Dialog cancel button label
pub const CANCEL_LABEL: &str = "Cancel";
/// Dialog confirm label for an open item
pub const MARK_COMPLETED_LABEL: &str = "Completed";
/// Dialog confirm label for a done item
pub const MARK_INCOMPLETE_LABEL: &str = "Incomplete";

/// Colour of the check mark icon
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CheckColor {
    /// Item is done
    Green,
    /// Item is open
    LightGray,
}

/// One list row
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RowView {
    /// Item id, passed back in `ItemTapped`
    pub id: TodoId,
    /// Bold first line
    pub name: String,
    /// Second line, only when the item has a description
    pub description: Option<String>,
    /// Completion flag
    pub done: bool,
    /// Last row draws no divider
    pub is_last: bool,
    /// Check mark colour
    pub check: CheckColor,
}

/// The list area
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ListView {
    /// Empty list
    Placeholder {
        /// Placeholder text
        text: &'static str,
    },
    /// One row per item, in display order
    Rows(Vec<RowView>),
}

impl ListView {
    /// Builds the list area for `list`
    #[must_use]
    pub fn from_list(list: &TodoList) -> Self {
        if list.is_empty() {
            return Self::Placeholder {
                text: EMPTY_PLACEHOLDER,
            };
        }

        let count = list.len();
        Self::Rows(
            list.items()
                .iter()
                .enumerate()
                .map(|(index, todo)| RowView {
                    id: todo.id.clone(),
                    name: todo.name.clone(),
                    description: todo.description.clone(),
                    done: todo.done,
                    is_last: index + 1 == count,
                    check: if todo.done {
                        CheckColor::Green
                    } else {
                        CheckColor::LightGray
                    },
                })
                .collect(),
        )
    }

    /// Whether the placeholder is shown
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

/// The new-todo form
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormView {
    /// Name input value
    pub name: String,
    /// Description input value
    pub description: String,
    /// Done switch value
    pub done: bool,
    /// Name input placeholder
    pub name_placeholder: &'static str,
    /// Description input placeholder
    pub description_placeholder: &'static str,
    /// Add button label
    pub add_label: &'static str,
}

/// The toggle dialog
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DialogView {
    /// Name of the tapped item
    pub title: String,
    /// Cancel button label
    pub cancel_label: &'static str,
    /// Confirm button label, names the state the item will move to
    pub confirm_label: &'static str,
}

/// The toast overlay
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ToastView {
    /// Text
    pub message: String,
    /// Severity
    pub kind: ToastKind,
    /// Placement
    pub position: ToastPosition,
}

/// Everything on screen
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScreenView {
    /// Heading
    pub title: &'static str,
    /// Form
    pub form: FormView,
    /// List area
    pub list: ListView,
    /// Dialog, while open
    pub dialog: Option<DialogView>,
    /// Toast, while shown
    pub toast: Option<ToastView>,
}

impl ScreenView {
    /// Builds the screen for `state`
    #[must_use]
    pub fn from_state(state: &TodoState) -> Self {
        Self {
            title: SCREEN_TITLE,
            form: FormView {
                name: state.draft.name.clone(),
                description: state.draft.description.clone(),
                done: state.draft.done,
                name_placeholder: NAME_PLACEHOLDER,
                description_placeholder: DESCRIPTION_PLACEHOLDER,
                add_label: ADD_LABEL,
            },
            list: ListView::from_list(&state.todos),
            dialog: state.toggling_todo().map(|todo| DialogView {
                title: todo.name.clone(),
                cancel_label: CANCEL_LABEL,
                confirm_label: if todo.done {
                    MARK_INCOMPLETE_LABEL
                } else {
                    MARK_COMPLETED_LABEL
                },
            }),
            toast: state.toast.as_ref().map(|toast| ToastView {
                message: toast.message.clone(),
                kind: toast.kind,
                position: toast.position,
            }),
        }
    }
}

impl fmt::Display for ScreenView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.title)?;

        let name = if self.form.name.is_empty() {
            format!("<{}>", self.form.name_placeholder)
        } else {
            self.form.name.clone()
        };
        let description = if self.form.description.is_empty() {
            format!("<{}>", self.form.description_placeholder)
        } else {
            self.form.description.clone()
        };
        let switch = if self.form.done { "on" } else { "off" };
        writeln!(f, "Name: {name}  Done: {switch}")?;
        writeln!(f, "Description: {description}")?;
        writeln!(f, "[ {} ]", self.form.add_label)?;
        writeln!(f)?;

        match &self.list {
            ListView::Placeholder { text } => writeln!(f, "    {text}")?,
            ListView::Rows(rows) => {
                for (index, row) in rows.iter().enumerate() {
                    let check = match row.check {
                        CheckColor::Green => "[x]",
                        CheckColor::LightGray => "[ ]",
                    };
                    writeln!(f, "{:>3}. {check} {}", index + 1, row.name)?;
                    if let Some(description) = &row.description {
                        writeln!(f, "         {description}")?;
                    }
                    if !row.is_last {
                        writeln!(f, "     ----")?;
                    }
                }
            },
        }

        if let Some(dialog) = &self.dialog {
            writeln!(f)?;
            writeln!(f, "+-- {} --+", dialog.title)?;
            writeln!(f, "| [{}]  [{}] |", dialog.cancel_label, dialog.confirm_label)?;
        }

        if let Some(toast) = &self.toast {
            writeln!(f)?;
            writeln!(f, "! {}", toast.message)?;
        }

        Ok(())
    }
}
