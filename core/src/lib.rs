//! # Todoer Core
//!
//! Core traits and types for the Todoer reducer architecture.
//!
//! This crate provides the fundamental abstractions the to-do screen is built
//! on: a pure reducer, effect descriptions, and injected dependencies.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a screen
//! - **Action**: All possible inputs to a reducer (UI intents and feedback)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden timers or I/O)
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```ignore
//! use todoer_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<CounterAction>; 4]> {
//!         state.count += 1;
//!         smallvec![Effect::None]
//!     }
//! }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{SmallVec, smallvec};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for TodoReducer {
    ///     type State = TodoState;
    ///     type Action = TodoAction;
    ///     type Environment = TodoEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut TodoState,
    ///         action: TodoAction,
    ///         env: &TodoEnvironment,
    ///     ) -> SmallVec<[Effect<TodoAction>; 4]> {
    ///         match action {
    ///             TodoAction::Toggle { id } => {
    ///                 state.todos.toggle(&id);
    ///                 SmallVec::new()
    ///             }
    ///             _ => SmallVec::new(),
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// Effects to be executed by the runtime. Most reducers return none,
        /// so the inline capacity avoids a heap allocation.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values (not execution) and are composable.
pub mod effect {
    use std::time::Duration;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what should happen,
    /// returned from reducers and executed by the Store runtime.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Delayed action (toast expiry, timeouts)
        Delay {
            /// How long to wait
            duration: Duration,
            /// Action to dispatch after delay
            action: Box<Action>,
        },
    }

    impl<Action> Effect<Action> {
        /// Schedule `action` to be sent after `duration`
        #[must_use]
        pub fn delay(duration: Duration, action: Action) -> Effect<Action> {
            Effect::Delay {
                duration,
                action: Box::new(action),
            }
        }

        /// Returns true if this effect does nothing when executed
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Effect::None)
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies (time, randomness) are abstracted behind traits
/// and injected via the Environment parameter, so reducers stay deterministic
/// under test.
pub mod environment {
    use chrono::{DateTime, Utc};
    use rand::RngCore;

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // Test - fixed time for deterministic tests
    /// struct FixedClock { time: DateTime<Utc> }
    /// impl Clock for FixedClock {
    ///     fn now(&self) -> DateTime<Utc> {
    ///         self.time
    ///     }
    /// }
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// `IdGenerator` trait - produces opaque identifiers for new entities
    ///
    /// Generators are not required to guarantee uniqueness on their own;
    /// callers that need uniqueness within a collection must check for
    /// collisions.
    pub trait IdGenerator: Send + Sync {
        /// Produce the next identifier
        fn next_id(&self) -> String;
    }

    /// Number of hex characters in a random id (52 random bits)
    pub const RANDOM_ID_LEN: usize = 13;

    /// Production id generator: 13 lowercase hex characters from a random
    /// 52-bit value
    ///
    /// ```
    /// use todoer_core::environment::{IdGenerator, RandomHexIdGenerator, RANDOM_ID_LEN};
    ///
    /// let id = RandomHexIdGenerator.next_id();
    /// assert_eq!(id.len(), RANDOM_ID_LEN);
    /// ```
    #[derive(Debug, Clone, Copy, Default)]
    pub struct RandomHexIdGenerator;

    impl IdGenerator for RandomHexIdGenerator {
        fn next_id(&self) -> String {
            let bits = rand::thread_rng().next_u64() & ((1_u64 << 52) - 1);
            format!("{bits:013x}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::effect::Effect;
    use super::environment::{Clock, IdGenerator, RandomHexIdGenerator, SystemClock, RANDOM_ID_LEN};
    use std::time::Duration;

    #[test]
    fn random_ids_are_lowercase_hex() {
        let id = RandomHexIdGenerator.next_id();
        assert_eq!(id.len(), RANDOM_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn random_ids_differ() {
        let a = RandomHexIdGenerator.next_id();
        let b = RandomHexIdGenerator.next_id();
        assert_ne!(a, b);
    }

    #[test]
    fn system_clock_moves_forward() {
        let first = SystemClock.now();
        let second = SystemClock.now();
        assert!(second >= first);
    }

    #[test]
    fn effect_is_none() {
        assert!(Effect::<u8>::None.is_none());
        assert!(!Effect::delay(Duration::from_millis(5), 1_u8).is_none());
    }

    #[test]
    fn delay_effect_debug_shows_action() {
        let effect = Effect::delay(Duration::from_secs(3), 9_u8);
        assert_eq!(
            format!("{effect:?}"),
            "Delay { duration: 3s, action: 9 }"
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn delay_keeps_action_and_duration(ms in 0_u64..10_000, action in any::<u32>()) {
                let effect = Effect::delay(Duration::from_millis(ms), action);
                match effect {
                    Effect::Delay { duration, action: boxed } => {
                        prop_assert_eq!(duration, Duration::from_millis(ms));
                        prop_assert_eq!(*boxed, action);
                    }
                    other => prop_assert!(false, "unexpected effect {:?}", other),
                }
            }
        }
    }
}
