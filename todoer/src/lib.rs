//! Single-screen to-do list built on the reducer architecture.
//!
//! Users add items with a name, optional description and completion flag;
//! items render newest first; tapping an item opens a dialog that toggles its
//! completion state. State lives in memory for the lifetime of the process.
//!
//! - [`TodoList`]: the list itself (`add`, `toggle`, `items`)
//! - [`TodoReducer`]: turns UI actions into state changes and effects
//! - [`ScreenView`]: what a UI toolkit draws
//!
//! # Quick Start
//!
//! ```no_run
//! use std::time::Duration;
//! use todoer::{ScreenView, TodoAction, TodoEnvironment, TodoReducer, TodoState, seed_todos};
//! use todoer_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = TodoEnvironment::production(Duration::from_secs(3));
//! let state = TodoState::new(seed_todos(4, env.ids.as_ref()));
//! let store = Store::new(state, TodoReducer::new(), env);
//!
//! store.send(TodoAction::DraftNameChanged("Buy milk".to_string())).await?;
//! store.send(TodoAction::Add).await?;
//!
//! let screen = store.state(ScreenView::from_state).await;
//! println!("{screen}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod list;
pub mod reducer;
pub mod seed;
pub mod shell;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use config::TodoerConfig;
pub use error::{ConfigError, ShellError, ValidationError};
pub use list::TodoList;
pub use reducer::{TodoEnvironment, TodoReducer};
pub use seed::{DEFAULT_SEED_COUNT, MAX_SEED_COUNT, seed_todos};
pub use types::{Draft, Toast, ToastKind, ToastPosition, Todo, TodoAction, TodoId, TodoState};
pub use view::{ListView, ScreenView};
