//! Line commands for the terminal front end.
//!
//! Each line maps to one UI interaction on the screen: typing into an input,
//! flipping the switch, pressing a button or tapping a row.

use crate::error::ShellError;
use crate::types::{TodoAction, TodoId, TodoState};
use std::future::Future;
use tokio::sync::broadcast::{self, error::RecvError};

/// Help text printed by `help`
pub const HELP: &str = "\
Commands:
  name <text>     type into the name input
  desc <text>     type into the description input
  done on|off     flip the done switch
  add             press Add
  tap <row>       tap a row (opens the dialog)
  confirm         press the dialog's confirm button
  cancel          dismiss the dialog
  toggle <id>     toggle an item by id
  show            redraw the screen
  json            dump the screen state as JSON
  help            show this help
  quit            exit";

/// A parsed input line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Replace the name input
    Name(String),
    /// Replace the description input
    Description(String),
    /// Set the done switch
    Done(bool),
    /// Press Add
    Add,
    /// Tap a row, 1-based
    Tap(usize),
    /// Confirm the dialog
    Confirm,
    /// Cancel the dialog
    Cancel,
    /// Toggle by id
    Toggle(TodoId),
    /// Redraw
    Show,
    /// Dump state as JSON
    Json,
    /// Print help
    Help,
    /// Exit
    Quit,
}

impl Command {
    /// Parses one input line
    ///
    /// `name` and `desc` accept an empty argument, which clears the input.
    /// A blank line is treated as `show`.
    ///
    /// # Errors
    ///
    /// Returns a [`ShellError`] describing what could not be understood.
    pub fn parse(line: &str) -> Result<Self, ShellError> {
        let line = line.trim_start();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim_end_matches(['\r', '\n']);

        match word {
            "" | "show" => Ok(Self::Show),
            "name" => Ok(Self::Name(rest.to_string())),
            "desc" => Ok(Self::Description(rest.to_string())),
            "done" => match rest.trim() {
                "on" | "true" | "yes" => Ok(Self::Done(true)),
                "off" | "false" | "no" => Ok(Self::Done(false)),
                "" => Err(ShellError::MissingArgument("done")),
                other => Err(ShellError::InvalidArgument {
                    command: "done",
                    value: other.to_string(),
                }),
            },
            "add" => Ok(Self::Add),
            "tap" => {
                let arg = rest.trim();
                if arg.is_empty() {
                    return Err(ShellError::MissingArgument("tap"));
                }
                arg.parse()
                    .map(Self::Tap)
                    .map_err(|_| ShellError::InvalidArgument {
                        command: "tap",
                        value: arg.to_string(),
                    })
            },
            "confirm" => Ok(Self::Confirm),
            "cancel" => Ok(Self::Cancel),
            "toggle" => match rest.trim() {
                "" => Err(ShellError::MissingArgument("toggle")),
                id => Ok(Self::Toggle(TodoId::new(id))),
            },
            "json" => Ok(Self::Json),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(ShellError::UnknownCommand(other.to_string())),
        }
    }

    /// The action this command sends, if it sends one
    ///
    /// `show`, `json`, `help` and `quit` are handled by the shell itself.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::NoSuchRow`] when tapping a row that is not on screen.
    pub fn to_action(&self, state: &TodoState) -> Result<Option<TodoAction>, ShellError> {
        let action = match self {
            Self::Name(name) => TodoAction::DraftNameChanged(name.clone()),
            Self::Description(description) => TodoAction::DraftDescriptionChanged(description.clone()),
            Self::Done(done) => TodoAction::DraftDoneChanged(*done),
            Self::Add => TodoAction::Add,
            Self::Tap(row) => {
                let todo = row
                    .checked_sub(1)
                    .and_then(|index| state.todos.items().get(index))
                    .ok_or(ShellError::NoSuchRow(*row))?;
                TodoAction::ItemTapped {
                    id: todo.id.clone(),
                }
            },
            Self::Confirm => TodoAction::ToggleConfirmed,
            Self::Cancel => TodoAction::ToggleCancelled,
            Self::Toggle(id) => TodoAction::Toggle { id: id.clone() },
            Self::Show | Self::Json | Self::Help | Self::Quit => return Ok(None),
        };
        Ok(Some(action))
    }
}

/// Calls `redraw` every time a toast expires on its own
///
/// Runs until the store is gone. A receiver that fell behind may have missed
/// an expiry, so it redraws once and keeps listening.
pub async fn redraw_on_expiry<F, Fut>(mut feedback: broadcast::Receiver<TodoAction>, mut redraw: F)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    loop {
        match feedback.recv().await {
            Ok(TodoAction::ToastExpired { .. }) => redraw().await,
            Ok(_) => {},
            Err(RecvError::Lagged(skipped)) => {
                tracing::debug!(skipped, "Redraw watcher lagged behind");
                redraw().await;
            },
            Err(RecvError::Closed) => break,
        }
    }
}
