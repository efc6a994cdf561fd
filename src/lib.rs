//! An observable, in-memory task list built on [`sigmut`] signals.
//!
//! [`TaskListStore`] owns an ordered sequence of [`Task`]s, the current [`Filter`]
//! and the text of the new-task input. State changes go through an
//! [`ActionContext`](sigmut::ActionContext) and reads through a
//! [`SignalContext`](sigmut::SignalContext), so a UI can render the store inside
//! an effect and be re-run whenever something it read changes.
//!
//! ```rust
//! use tasklist::{Filter, TaskListStore};
//!
//! let mut rt = sigmut::core::Runtime::new();
//! let store = TaskListStore::new();
//!
//! let id = store.add_task("Write docs", rt.ac()).unwrap();
//! assert!(store.add_task("ab", rt.ac()).is_none());
//!
//! store.toggle_complete(id, rt.ac());
//! store.set_filter(Filter::Pending, rt.ac());
//! assert!(store.visible_tasks(&mut rt.sc()).is_empty());
//!
//! store.set_filter(Filter::Completed, rt.ac());
//! assert_eq!(store.visible_tasks(&mut rt.sc())[0].title, "Write docs");
//! ```
mod filter;
mod store;
mod task;
mod title;

pub use filter::*;
pub use store::*;
pub use task::*;
pub use title::*;
