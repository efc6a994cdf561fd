use std::{cell::Cell, rc::Rc};

use derive_ex::derive_ex;
use parse_display::Display;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Stable identity of a [`Task`].
#[derive(
    Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[display("{0}")]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// One to-do item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    /// Whether the title is being edited in place.
    #[serde(default)]
    pub is_editing: bool,
}

impl Task {
    /// Create a pending task that is not in edit mode.
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed: false,
            is_editing: false,
        }
    }

    /// Returns this task with its `completed` flag set to `completed`.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Monotonic source of fresh [`TaskId`]s.
///
/// Clones share the same counter, so ids handed out through any clone never repeat.
/// Once `u64::MAX` has been handed out the generator is exhausted and yields no more ids.
#[derive_ex(Clone, Default)]
#[default(Self::starting_at(1))]
pub struct TaskIdGen(Rc<Cell<Option<u64>>>);

impl TaskIdGen {
    /// Create a generator whose first id is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator whose first id is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self(Rc::new(Cell::new(Some(first))))
    }

    /// Create a generator whose ids never collide with any of `ids`.
    ///
    /// If `ids` contains `u64::MAX`, the generator starts out exhausted.
    pub fn after<'a>(ids: impl IntoIterator<Item = &'a TaskId>) -> Self {
        let next = match ids.into_iter().map(|id| id.0).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Self(Rc::new(Cell::new(next)))
    }

    /// Returns a fresh id, or `None` if the generator is exhausted.
    pub fn next_id(&self) -> Option<TaskId> {
        let id = self.0.get()?;
        self.0.set(id.checked_add(1));
        Some(TaskId(id))
    }

    /// Returns the id the next call to [`next_id`](Self::next_id) will produce.
    pub fn peek(&self) -> Option<TaskId> {
        self.0.get().map(TaskId)
    }
}

impl std::fmt::Debug for TaskIdGen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("TaskIdGen").field(&self.0.get()).finish()
    }
}
