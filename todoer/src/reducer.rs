//! Reducer logic for the to-do screen.
//!
//! Form edits replace draft fields, `Add` validates and prepends, the dialog
//! actions open/close the toggle dialog, and a failed add shows a toast whose
//! expiry is scheduled as a delayed action.

use crate::types::{Draft, Toast, TodoAction, TodoState};
use std::sync::Arc;
use std::time::Duration;
use todoer_core::{
    SmallVec,
    effect::Effect,
    environment::{Clock, IdGenerator, RandomHexIdGenerator, SystemClock},
    reducer::Reducer,
    smallvec,
};

/// Environment dependencies for the to-do reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Clock for toast timestamps
    pub clock: Arc<dyn Clock>,
    /// Source of new todo ids
    pub ids: Arc<dyn IdGenerator>,
    /// How long a toast stays on screen
    pub toast_duration: Duration,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>, toast_duration: Duration) -> Self {
        Self {
            clock,
            ids,
            toast_duration,
        }
    }

    /// System clock and random hex ids
    #[must_use]
    pub fn production(toast_duration: Duration) -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(RandomHexIdGenerator), toast_duration)
    }
}

impl std::fmt::Debug for TodoEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoEnvironment")
            .field("toast_duration", &self.toast_duration)
            .finish_non_exhaustive()
    }
}

/// Reducer for the to-do screen
#[derive(Clone, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn add(state: &mut TodoState, env: &TodoEnvironment) -> SmallVec<[Effect<TodoAction>; 4]> {
        match state.todos.add(&state.draft, env.ids.as_ref()) {
            Ok(id) => {
                tracing::info!(%id, "Todo added");
                state.draft = Draft::default();
                state.toast = None;
                SmallVec::new()
            },
            Err(error) => {
                tracing::debug!(%error, "Rejected draft");
                let seq = state.next_toast_seq();
                state.toast = Some(Toast::error(seq, error.to_string(), env.clock.now()));
                smallvec![Effect::delay(
                    env.toast_duration,
                    TodoAction::ToastExpired { seq },
                )]
            },
        }
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Form ==========
            TodoAction::DraftNameChanged(name) => {
                state.draft.name = name;
            },
            TodoAction::DraftDescriptionChanged(description) => {
                state.draft.description = description;
            },
            TodoAction::DraftDoneChanged(done) => {
                state.draft.done = done;
            },
            TodoAction::Add => return Self::add(state, env),

            // ========== List ==========
            TodoAction::Toggle { id } => {
                if !state.todos.toggle(&id) {
                    tracing::debug!(%id, "Ignoring toggle for unknown todo");
                }
            },

            // ========== Dialog ==========
            TodoAction::ItemTapped { id } => {
                if state.todos.contains(&id) {
                    state.toggling = Some(id);
                } else {
                    tracing::debug!(%id, "Ignoring tap on unknown todo");
                }
            },
            TodoAction::ToggleCancelled => {
                state.toggling = None;
            },
            TodoAction::ToggleConfirmed => {
                if let Some(id) = state.toggling.take() {
                    state.todos.toggle(&id);
                }
            },

            // ========== Feedback ==========
            TodoAction::ToastExpired { seq } => {
                if state.toast.as_ref().is_some_and(|toast| toast.seq == seq) {
                    state.toast = None;
                }
            },
        }

        SmallVec::new()
    }
}
