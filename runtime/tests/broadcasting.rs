//! Integration tests for Store action broadcasting
//!
//! Effect-produced actions are published after they are reduced, which is
//! what lets a view re-render from the broadcast alone.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use std::sync::Arc;
use std::time::Duration;
use todoer_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use todoer_runtime::{Store, StoreConfig};

// ============================================================================
// Test Fixtures
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum TestAction {
    /// Start a three step countdown
    Start { id: u64 },
    /// Countdown step completed
    Step { id: u64, step: u32 },
    /// Countdown finished (terminal action)
    Finished { id: u64 },
    /// Plain command with no effects
    Bump,
}

#[derive(Debug, Clone, Default)]
struct TestState {
    steps: Vec<u32>,
    finished: Vec<u64>,
    bumps: u32,
}

#[derive(Clone)]
struct TestEnvironment;

#[derive(Clone)]
struct TestReducer;

impl Reducer for TestReducer {
    type State = TestState;
    type Action = TestAction;
    type Environment = TestEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TestAction::Start { id } => smallvec![Effect::delay(
                Duration::from_millis(10),
                TestAction::Step { id, step: 1 },
            )],
            TestAction::Step { id, step } => {
                state.steps.push(step);
                if step < 3 {
                    smallvec![Effect::delay(
                        Duration::from_millis(10),
                        TestAction::Step { id, step: step + 1 },
                    )]
                } else {
                    smallvec![Effect::delay(Duration::ZERO, TestAction::Finished { id })]
                }
            },
            TestAction::Finished { id } => {
                state.finished.push(id);
                SmallVec::new()
            },
            TestAction::Bump => {
                state.bumps += 1;
                SmallVec::new()
            },
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("todoer_runtime=trace")
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Tests
// ============================================================================

/// Subscribers see every effect-produced action, in order, and never the
/// action that was sent directly.
#[tokio::test(start_paused = true)]
async fn test_subscribe_actions_streaming() {
    init_tracing();
    let store = Store::new(TestState::default(), TestReducer, TestEnvironment);
    let mut rx = store.subscribe_actions();

    store.send(TestAction::Start { id: 7 }).await.unwrap();

    let mut received = Vec::new();
    while received.len() < 4 {
        received.push(rx.recv().await.unwrap());
    }

    assert_eq!(
        received,
        vec![
            TestAction::Step { id: 7, step: 1 },
            TestAction::Step { id: 7, step: 2 },
            TestAction::Step { id: 7, step: 3 },
            TestAction::Finished { id: 7 },
        ]
    );
    assert_eq!(store.state(|s| s.finished.clone()).await, vec![7]);
}

/// Multiple subscribers each receive their own copy
#[tokio::test(start_paused = true)]
async fn test_multiple_subscribers() {
    let store = Store::new(TestState::default(), TestReducer, TestEnvironment);
    let mut first = store.subscribe_actions();
    let mut second = store.subscribe_actions();

    store.send(TestAction::Start { id: 1 }).await.unwrap();

    for _ in 0..4 {
        let a = first.recv().await.unwrap();
        let b = second.recv().await.unwrap();
        assert_eq!(a, b);
    }
}

/// Concurrent sends are serialized by the reducer lock
#[tokio::test]
async fn test_concurrent_sends_are_serialized() {
    let store = Arc::new(Store::with_config(
        TestState::default(),
        TestReducer,
        TestEnvironment,
        StoreConfig::default().with_broadcast_capacity(4),
    ));

    let mut handles = Vec::new();
    for _ in 0..50 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move { store.send(TestAction::Bump).await }));
    }
    for handle in handles {
        handle.await.expect("task panicked").unwrap();
    }

    assert_eq!(store.state(|s| s.bumps).await, 50);
}

/// Shutdown drains running effects before reporting success
#[tokio::test(start_paused = true)]
async fn test_shutdown_with_running_countdown() {
    let store = Store::new(TestState::default(), TestReducer, TestEnvironment);
    store.send(TestAction::Start { id: 3 }).await.unwrap();

    store.shutdown(Duration::from_secs(1)).await.unwrap();

    // The first step was rejected, so the countdown never advanced
    assert!(store.state(|s| s.steps.is_empty()).await);
    assert_eq!(store.pending_effects(), 0);
}
