//! Sample items shown at startup.

use crate::list::TodoList;
use crate::types::Draft;
use todoer_core::environment::IdGenerator;

/// Number of sample items when nothing is configured
pub const DEFAULT_SEED_COUNT: usize = 4;

/// Largest accepted seed count; descriptions grow with the item index
pub const MAX_SEED_COUNT: usize = 100;

/// Builds the startup list
///
/// Item `i` is named `Todo {i}`, its description repeats
/// `Description Todo {i} ` `i` times (so the first item has none), and it is
/// done unless `i` is a multiple of three. Items appear in index order.
#[must_use]
pub fn seed_todos(count: usize, ids: &dyn IdGenerator) -> TodoList {
    let mut list = TodoList::new();

    // add() prepends, so walk backwards to end up in index order
    for index in (0..count).rev() {
        let name = format!("Todo {index}");
        let draft = Draft::named(name.clone())
            .with_description(format!("Description {name} ").repeat(index))
            .with_done(index % 3 != 0);

        if let Err(error) = list.add(&draft, ids) {
            tracing::warn!(%error, index, "Skipping seed item");
        }
    }

    tracing::debug!(count = list.len(), "Seeded todo list");
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use todoer_testing::SequentialIdGenerator;

    #[test]
    fn default_seed_matches_startup_screen() {
        let list = seed_todos(DEFAULT_SEED_COUNT, &SequentialIdGenerator::new("seed"));
        let items = list.items();

        assert_eq!(items.len(), 4);

        let names: Vec<_> = items.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Todo 0", "Todo 1", "Todo 2", "Todo 3"]);

        let done: Vec<_> = items.iter().map(|t| t.done).collect();
        assert_eq!(done, [false, true, true, false]);

        assert_eq!(items[0].description, None);
        assert_eq!(items[1].description.as_deref(), Some("Description Todo 1 "));
        assert_eq!(
            items[2].description.as_deref(),
            Some("Description Todo 2 Description Todo 2 ")
        );
    }

    #[test]
    fn seed_ids_are_unique() {
        let list = seed_todos(10, &SequentialIdGenerator::new("seed"));
        let mut ids: Vec<_> = list.items().iter().map(|t| t.id.as_str().to_string()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn zero_seed_is_empty() {
        assert!(seed_todos(0, &SequentialIdGenerator::new("seed")).is_empty());
    }
}
