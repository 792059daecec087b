//! The in-memory todo list.
//!
//! Items are kept newest first. The list only changes through [`TodoList::add`]
//! (prepend) and [`TodoList::toggle`] (replace one element by id), which keep
//! two invariants: ids are unique and names are non-empty after trimming.

use crate::error::ValidationError;
use crate::types::{Draft, Todo, TodoId};
use serde::{Deserialize, Serialize};
use todoer_core::environment::IdGenerator;

/// Ordered todo items, newest first
///
/// Serializes as a plain array. Deserializing goes through
/// [`TodoList::from_items`], so invalid entries are dropped on the way in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Todo>", into = "Vec<Todo>")]
pub struct TodoList {
    items: Vec<Todo>,
}

impl From<Vec<Todo>> for TodoList {
    fn from(items: Vec<Todo>) -> Self {
        Self::from_items(items)
    }
}

impl From<TodoList> for Vec<Todo> {
    fn from(list: TodoList) -> Self {
        list.items
    }
}

impl TodoList {
    /// Creates an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Builds a list from items in display order
    ///
    /// Items that would break an invariant (blank name or repeated id) are
    /// skipped.
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = Todo>) -> Self {
        let mut list = Self::new();
        for todo in items {
            if todo.name.trim().is_empty() {
                tracing::warn!(id = %todo.id, "Skipping todo with blank name");
                continue;
            }
            if list.contains(&todo.id) {
                tracing::warn!(id = %todo.id, "Skipping todo with duplicate id");
                continue;
            }
            list.items.push(todo);
        }
        list
    }

    /// Adds a todo built from `draft` to the front of the list
    ///
    /// The name is trimmed, a blank description becomes `None`, and the id
    /// comes from `ids` (suffixed `-1`, `-2`, ... if it is already taken).
    /// The draft itself is not touched; resetting the form is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] if the name is blank. The list is
    /// unchanged in that case.
    pub fn add(&mut self, draft: &Draft, ids: &dyn IdGenerator) -> Result<TodoId, ValidationError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let id = self.fresh_id(ids);
        self.items.insert(
            0,
            Todo {
                id: id.clone(),
                name: name.to_string(),
                description: draft.normalized_description(),
                done: draft.done,
            },
        );
        Ok(id)
    }

    /// Flips `done` on the item with `id`
    ///
    /// The item is replaced by a new value; position and other fields are
    /// kept. Returns `false` (and changes nothing) if no item has that id.
    pub fn toggle(&mut self, id: &TodoId) -> bool {
        let Some(slot) = self.items.iter_mut().find(|todo| &todo.id == id) else {
            return false;
        };
        *slot = slot.toggled();
        true
    }

    /// Items in display order
    #[must_use]
    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    /// Looks up an item by id
    #[must_use]
    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.items.iter().find(|todo| &todo.id == id)
    }

    /// Whether an item with `id` exists
    #[must_use]
    pub fn contains(&self, id: &TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of completed items
    #[must_use]
    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|todo| todo.done).count()
    }

    fn contains_str(&self, id: &str) -> bool {
        self.items.iter().any(|todo| todo.id.as_str() == id)
    }

    fn fresh_id(&self, ids: &dyn IdGenerator) -> TodoId {
        let base = ids.next_id();
        let mut candidate = base.clone();
        let mut suffix = 0_u64;
        while self.contains_str(&candidate) {
            suffix += 1;
            candidate = format!("{base}-{suffix}");
        }
        if suffix > 0 {
            tracing::debug!(generated = %base, id = %candidate, "Resolved id collision");
        }
        TodoId::from(candidate)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use todoer_testing::{ScriptedIdGenerator, SequentialIdGenerator};

    fn todo(id: &str, name: &str, done: bool) -> Todo {
        Todo {
            id: TodoId::new(id),
            name: name.to_string(),
            description: None,
            done,
        }
    }

    #[test]
    fn add_prepends_with_defaults() {
        let ids = SequentialIdGenerator::new("t");
        let mut list = TodoList::from_items([todo("old", "Old", true)]);

        let id = list.add(&Draft::named("Buy milk"), &ids).unwrap();

        assert_eq!(list.len(), 2);
        let first = &list.items()[0];
        assert_eq!(first.id, id);
        assert_eq!(first.name, "Buy milk");
        assert_eq!(first.description, None);
        assert!(!first.done);
        assert_eq!(list.items()[1].id, TodoId::new("old"));
    }

    #[test]
    fn add_trims_name_and_keeps_draft_fields() {
        let ids = SequentialIdGenerator::new("t");
        let mut list = TodoList::new();
        let draft = Draft::named("  Call mom \t")
            .with_description("Sunday")
            .with_done(true);

        list.add(&draft, &ids).unwrap();

        let first = &list.items()[0];
        assert_eq!(first.name, "Call mom");
        assert_eq!(first.description.as_deref(), Some("Sunday"));
        assert!(first.done);
    }

    #[test]
    fn add_rejects_blank_names() {
        let ids = SequentialIdGenerator::new("t");
        let mut list = TodoList::from_items([todo("a", "A", false)]);
        let before = list.clone();

        for name in ["", " ", "\t\n  "] {
            assert_eq!(
                list.add(&Draft::named(name), &ids),
                Err(ValidationError::EmptyName)
            );
        }
        assert_eq!(list, before);
    }

    #[test]
    fn consecutive_adds_get_distinct_ids() {
        let ids = SequentialIdGenerator::new("t");
        let mut list = TodoList::new();
        let a = list.add(&Draft::named("a"), &ids).unwrap();
        let b = list.add(&Draft::named("b"), &ids).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn colliding_ids_get_a_suffix() {
        let ids = ScriptedIdGenerator::new(["same"]);
        let mut list = TodoList::new();

        let a = list.add(&Draft::named("a"), &ids).unwrap();
        let b = list.add(&Draft::named("b"), &ids).unwrap();
        let c = list.add(&Draft::named("c"), &ids).unwrap();

        assert_eq!(a.as_str(), "same");
        assert_eq!(b.as_str(), "same-1");
        assert_eq!(c.as_str(), "same-2");
    }

    #[test]
    fn toggle_flips_and_keeps_order() {
        let mut list = TodoList::from_items([
            todo("a", "A", false),
            todo("b", "B", false),
            todo("c", "C", true),
        ]);

        assert!(list.toggle(&TodoId::new("b")));

        let names: Vec<_> = list.items().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert!(list.get(&TodoId::new("b")).unwrap().done);
        assert!(!list.get(&TodoId::new("a")).unwrap().done);
        assert!(list.get(&TodoId::new("c")).unwrap().done);
        assert_eq!(list.done_count(), 2);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut list = TodoList::from_items([todo("a", "A", false)]);
        let before = list.clone();

        assert!(!list.toggle(&TodoId::new("missing")));
        assert_eq!(list, before);
    }

    #[test]
    fn from_items_skips_invalid_entries() {
        let list = TodoList::from_items([
            todo("a", "A", false),
            todo("a", "Duplicate", false),
            todo("b", "   ", false),
        ]);
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].name, "A");
    }

    #[test]
    fn deserializing_drops_invalid_entries() {
        let json = r#"[
            {"id": "a", "name": "  ", "description": null, "done": false},
            {"id": "a", "name": "x", "description": null, "done": false},
            {"id": "a", "name": "y", "description": null, "done": true}
        ]"#;
        let mut list: TodoList = serde_json::from_str(json).unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].name, "x");

        assert!(list.toggle(&TodoId::new("a")));
        assert_eq!(list.done_count(), 1);
    }

    #[test]
    fn serializes_as_array() {
        let list = TodoList::from_items([todo("a", "A", true)]);
        let value = serde_json::to_value(&list).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{"id": "a", "name": "A", "description": null, "done": true}])
        );
        assert_eq!(serde_json::from_value::<TodoList>(value).unwrap(), list);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn ids_stay_unique(names in proptest::collection::vec("[a-z ]{0,8}", 0..40)) {
                let ids = ScriptedIdGenerator::new(["x", "y"]);
                let mut list = TodoList::new();
                for name in &names {
                    let _ = list.add(&Draft::named(name.clone()), &ids);
                }

                let mut seen: Vec<_> = list.items().iter().map(|t| t.id.clone()).collect();
                seen.sort_by(|a, b| a.as_str().cmp(b.as_str()));
                seen.dedup();
                prop_assert_eq!(seen.len(), list.len());
                prop_assert_eq!(
                    list.len(),
                    names.iter().filter(|n| !n.trim().is_empty()).count()
                );
            }

            #[test]
            fn toggle_twice_restores(done in proptest::collection::vec(any::<bool>(), 1..10), pick in any::<prop::sample::Index>()) {
                let items: Vec<_> = done
                    .iter()
                    .enumerate()
                    .map(|(i, d)| todo(&i.to_string(), &format!("T{i}"), *d))
                    .collect();
                let mut list = TodoList::from_items(items);
                let before = list.clone();
                let id = list.items()[pick.index(list.len())].id.clone();

                prop_assert!(list.toggle(&id));
                prop_assert_ne!(&list, &before);
                prop_assert!(list.toggle(&id));
                prop_assert_eq!(list, before);
            }
        }
    }
}
