//! Metric descriptions for the Store runtime.
//!
//! The store records through the `metrics` facade. Nothing is exported
//! unless the host application installs a recorder; [`register_metrics`]
//! attaches units and help text once it has.
//!
//! # Example
//!
//! ```
//! use todoer_runtime::metrics::{register_metrics, METRIC_NAMES};
//!
//! register_metrics();
//! assert!(METRIC_NAMES.contains(&"store.actions.total"));
//! ```

use metrics::{Unit, describe_counter, describe_histogram};

/// Every metric the store records
pub const METRIC_NAMES: &[&str] = &[
    "store.actions.total",
    "store.reducer.duration_seconds",
    "store.effects.executed",
    "store.shutdown.initiated",
    "store.shutdown.completed",
    "store.shutdown.timeout",
    "store.shutdown.rejected_actions",
];

/// Register descriptions for all store metrics
///
/// Safe to call more than once and before any recorder is installed.
pub fn register_metrics() {
    describe_counter!(
        "store.actions.total",
        Unit::Count,
        "Actions processed by the reducer"
    );
    describe_histogram!(
        "store.reducer.duration_seconds",
        Unit::Seconds,
        "Time spent inside the reducer per action"
    );
    describe_counter!(
        "store.effects.executed",
        Unit::Count,
        "Effects started, labelled by effect type"
    );
    describe_counter!(
        "store.shutdown.initiated",
        Unit::Count,
        "Graceful shutdowns started"
    );
    describe_counter!(
        "store.shutdown.completed",
        Unit::Count,
        "Graceful shutdowns that drained all effects"
    );
    describe_counter!(
        "store.shutdown.timeout",
        Unit::Count,
        "Graceful shutdowns that gave up on running effects"
    );
    describe_counter!(
        "store.shutdown.rejected_actions",
        Unit::Count,
        "Actions refused because the store was shutting down"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_names_are_unique() {
        let mut names = METRIC_NAMES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), METRIC_NAMES.len());
    }

    #[test]
    fn register_without_recorder_is_noop() {
        register_metrics();
        register_metrics();
    }
}
