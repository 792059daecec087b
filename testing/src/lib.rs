//! # Todoer Testing
//!
//! Testing utilities and helpers for the Todoer reducer architecture.
//!
//! This crate provides:
//! - Deterministic implementations of Environment traits
//! - The [`ReducerTest`] Given-When-Then harness
//! - Assertion helpers for reducer effects
//!
//! ## Example
//!
//! ```ignore
//! use todoer_testing::{test_clock, SequentialIdGenerator};
//!
//! let env = TodoEnvironment::new(
//!     Arc::new(test_clock()),
//!     Arc::new(SequentialIdGenerator::new("todo")),
//!     Duration::from_secs(3),
//! );
//! ```

use chrono::{DateTime, Utc};
use todoer_core::environment::{Clock, IdGenerator};


/// Deterministic implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, IdGenerator, Utc};
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Mutex, PoisonError};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use todoer_testing::mocks::FixedClock;
    /// use todoer_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    #[must_use]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(DateTime::<Utc>::UNIX_EPOCH + chrono::Duration::days(20_089))
    }

    /// Predictable ids: `{prefix}-1`, `{prefix}-2`, ...
    ///
    /// ```
    /// use todoer_testing::SequentialIdGenerator;
    /// use todoer_core::environment::IdGenerator;
    ///
    /// let ids = SequentialIdGenerator::new("todo");
    /// assert_eq!(ids.next_id(), "todo-1");
    /// assert_eq!(ids.next_id(), "todo-2");
    /// ```
    #[derive(Debug)]
    pub struct SequentialIdGenerator {
        prefix: String,
        counter: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a generator whose ids start with `prefix`
        #[must_use]
        pub fn new(prefix: impl Into<String>) -> Self {
            Self {
                prefix: prefix.into(),
                counter: AtomicU64::new(0),
            }
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> String {
            let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
            format!("{}-{n}", self.prefix)
        }
    }

    /// Hands out a fixed script of ids, then repeats the last one forever
    ///
    /// Useful for forcing collisions.
    #[derive(Debug)]
    pub struct ScriptedIdGenerator {
        script: Mutex<VecDeque<String>>,
        last: Mutex<String>,
    }

    impl ScriptedIdGenerator {
        /// Create a generator that yields `ids` in order
        #[must_use]
        pub fn new<I, T>(ids: I) -> Self
        where
            I: IntoIterator<Item = T>,
            T: Into<String>,
        {
            Self {
                script: Mutex::new(ids.into_iter().map(Into::into).collect()),
                last: Mutex::new(String::from("scripted")),
            }
        }
    }

    impl IdGenerator for ScriptedIdGenerator {
        fn next_id(&self) -> String {
            let mut script = self.script.lock().unwrap_or_else(PoisonError::into_inner);
            let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(next) = script.pop_front() {
                *last = next;
            }
            last.clone()
        }
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, ScriptedIdGenerator, SequentialIdGenerator, test_clock};
pub use reducer_test::{ReducerTest, assertions};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().to_rfc3339(), "2025-01-01T00:00:00+00:00");
    }

    #[test]
    fn sequential_ids_count_up() {
        let ids = SequentialIdGenerator::new("t");
        assert_eq!(ids.next_id(), "t-1");
        assert_eq!(ids.next_id(), "t-2");
        assert_eq!(ids.next_id(), "t-3");
    }

    #[test]
    fn scripted_ids_repeat_last() {
        let ids = ScriptedIdGenerator::new(["a", "b"]);
        assert_eq!(ids.next_id(), "a");
        assert_eq!(ids.next_id(), "b");
        assert_eq!(ids.next_id(), "b");
    }

    #[test]
    fn empty_script_uses_placeholder() {
        let ids = ScriptedIdGenerator::new(Vec::<String>::new());
        assert_eq!(ids.next_id(), "scripted");
    }
}
