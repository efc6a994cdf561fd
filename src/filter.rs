use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};

use crate::Task;

#[cfg(test)]
mod tests;

/// Selection applied to the task sequence when rendering.
#[derive(
    Clone, Copy, Debug, Default, Display, FromStr, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[display(style = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}

impl Filter {
    /// All filters in display order.
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Completed, Filter::Pending];

    /// Returns `true` if `task` is selected by this filter.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => task.completed,
            Filter::Pending => !task.completed,
        }
    }

    /// Returns the tasks this filter selects, keeping their order.
    pub fn apply<'a>(self, tasks: impl IntoIterator<Item = &'a Task>) -> Vec<Task> {
        tasks
            .into_iter()
            .filter(|task| self.matches(task))
            .cloned()
            .collect()
    }
}
