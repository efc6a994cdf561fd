use std::{collections::HashSet, rc::Rc};

use derive_ex::derive_ex;
use sigmut::{ActionContext, Signal, SignalContext, State};
use tracing::{debug, warn};

use crate::{
    normalize_title, validate_title, Filter, Task, TaskId, TaskIdGen, TitleError, TitleRules,
};


/// Observable, in-memory task list.
///
/// Cloning a `TaskListStore` yields another handle to the same tasks, filter and input.
///
/// Mutations take an [`ActionContext`] and are seen by dependants once the runtime processes them.
/// Reads take a [`SignalContext`] and add a dependency on the state they read.
#[derive_ex(Clone, Default)]
#[default(Self::new())]
pub struct TaskListStore {
    tasks: State<Vec<Task>>,
    filter: State<Filter>,
    input: State<String>,
    rules: Rc<TitleRules>,
    ids: TaskIdGen,
    visible: Signal<Vec<Task>>,
    input_error: Signal<Option<TitleError>>,
}

impl TaskListStore {
    /// Create an empty store with the default [`TitleRules`].
    pub fn new() -> Self {
        Self::with_rules(TitleRules::default())
    }

    /// Create an empty store that validates new titles with `rules`.
    pub fn with_rules(rules: TitleRules) -> Self {
        Self::with_tasks_and_rules(Vec::new(), rules)
    }

    /// Create a store holding `tasks` in the given order.
    ///
    /// Ids created later are greater than every id in `tasks`.
    /// If an id appears more than once, only its first task is kept.
    /// If more than one task is in edit mode, only the first one stays in edit mode.
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        Self::with_tasks_and_rules(tasks, TitleRules::default())
    }

    /// Create a store holding `tasks` that validates new titles with `rules`.
    ///
    /// Seeding follows the same rules as [`with_tasks`](Self::with_tasks).
    pub fn with_tasks_and_rules(
        tasks: impl IntoIterator<Item = Task>,
        rules: TitleRules,
    ) -> Self {
        let tasks = sanitize(tasks);
        let ids = TaskIdGen::after(tasks.iter().map(|t| &t.id));
        Self::from_parts(tasks, ids, rules)
    }

    /// Create a store with one pending task per title, each with a fresh id.
    ///
    /// Titles left over once ids are exhausted are dropped.
    pub fn from_titles<S: Into<String>>(titles: impl IntoIterator<Item = S>) -> Self {
        let ids = TaskIdGen::new();
        let tasks = titles
            .into_iter()
            .filter_map(|title| {
                let Some(id) = ids.next_id() else {
                    warn!("task ids exhausted: seed title dropped");
                    return None;
                };
                Some(Task::new(id, title))
            })
            .collect();
        Self::from_parts(tasks, ids, TitleRules::default())
    }

    fn from_parts(tasks: Vec<Task>, ids: TaskIdGen, rules: TitleRules) -> Self {
        let tasks = State::new(tasks);
        let filter = State::new(Filter::default());
        let input = State::new(String::new());
        let rules = Rc::new(rules);
        let visible = Signal::new({
            let tasks = tasks.clone();
            let filter = filter.clone();
            move |sc| {
                let filter = filter.get(sc);
                filter.apply(tasks.borrow(sc).iter())
            }
        });
        let input_error = Signal::new({
            let input = input.clone();
            let rules = rules.clone();
            move |sc| validate_title(&input.borrow(sc), &rules).err()
        });
        Self {
            tasks,
            filter,
            input,
            rules,
            ids,
            visible,
            input_error,
        }
    }

    /// Returns the rules new titles are validated with.
    pub fn rules(&self) -> &TitleRules {
        &self.rules
    }

    /// Appends a new pending task.
    ///
    /// Returns `None` without changing anything if `title` fails validation
    /// or no fresh id is left.
    /// The stored title has surrounding whitespace removed.
    pub fn add_task(&self, title: &str, ac: &mut ActionContext) -> Option<TaskId> {
        if let Err(e) = validate_title(title, &self.rules) {
            debug!(reason = %e, "add_task rejected");
            return None;
        }
        let Some(id) = self.ids.next_id() else {
            warn!("add_task rejected: task ids exhausted");
            return None;
        };
        self.tasks
            .borrow_mut(ac)
            .push(Task::new(id, normalize_title(title)));
        debug!(task_id = %id, "task added");
        Some(id)
    }

    /// Flips the `completed` flag of the task with `id`.
    pub fn toggle_complete(&self, id: TaskId, ac: &mut ActionContext) {
        let mut tasks = self.tasks.borrow_mut(ac);
        let Some(index) = position(&tasks, id) else {
            debug!(task_id = %id, "toggle_complete ignored: no such task");
            return;
        };
        let task = &mut tasks[index];
        task.completed = !task.completed;
        debug!(task_id = %id, completed = task.completed, "task toggled");
    }

    /// Removes the task with `id`, keeping the order of the others.
    pub fn delete_task(&self, id: TaskId, ac: &mut ActionContext) {
        let mut tasks = self.tasks.borrow_mut(ac);
        let Some(index) = position(&tasks, id) else {
            debug!(task_id = %id, "delete_task ignored: no such task");
            return;
        };
        tasks.remove(index);
        debug!(task_id = %id, "task deleted");
    }

    /// Puts the task with `id` in edit mode and takes every other task out of it.
    ///
    /// If no task has `id`, every task leaves edit mode.
    pub fn begin_editing(&self, id: TaskId, ac: &mut ActionContext) {
        let mut tasks = self.tasks.borrow_mut(ac);
        if position(&tasks, id).is_none() {
            debug!(task_id = %id, "begin_editing: no such task");
        }
        if tasks.iter().any(|t| t.is_editing != (t.id == id)) {
            for task in tasks.iter_mut() {
                task.is_editing = task.id == id;
            }
        }
    }

    /// Replaces the title of the task with `id` and leaves edit mode.
    ///
    /// `title` is stored as given.
    pub fn commit_edit(&self, id: TaskId, title: impl Into<String>, ac: &mut ActionContext) {
        let mut tasks = self.tasks.borrow_mut(ac);
        let Some(index) = position(&tasks, id) else {
            debug!(task_id = %id, "commit_edit ignored: no such task");
            return;
        };
        let task = &mut tasks[index];
        task.title = title.into();
        task.is_editing = false;
        debug!(task_id = %id, "task edited");
    }

    /// Selects which tasks [`visible_tasks`](Self::visible_tasks) returns.
    pub fn set_filter(&self, filter: Filter, ac: &mut ActionContext) {
        self.filter.set_dedup(filter, ac);
    }

    /// Replaces the text of the new-task input.
    pub fn set_input(&self, text: impl Into<String>, ac: &mut ActionContext) {
        self.input.set_dedup(text.into(), ac);
    }

    /// Adds the input text as a new task and clears the input.
    ///
    /// Does nothing if the input text fails validation.
    pub fn submit_input(&self, ac: &mut ActionContext) -> Option<TaskId> {
        let text = {
            let input = self.input.borrow_mut(ac);
            // read only; `DerefMut` would notify dependants
            String::clone(&*input)
        };
        let id = self.add_task(&text, ac)?;
        self.input.set(String::new(), ac);
        Some(id)
    }

    /// Returns all tasks in insertion order.
    pub fn tasks(&self, sc: &mut SignalContext) -> Vec<Task> {
        self.tasks.get(sc)
    }

    /// Returns the task with `id`.
    pub fn task(&self, id: TaskId, sc: &mut SignalContext) -> Option<Task> {
        self.tasks.borrow(sc).iter().find(|t| t.id == id).cloned()
    }

    /// Returns the current filter.
    pub fn filter(&self, sc: &mut SignalContext) -> Filter {
        self.filter.get(sc)
    }

    /// Returns the tasks selected by the current filter, in insertion order.
    pub fn visible_tasks(&self, sc: &mut SignalContext) -> Vec<Task> {
        self.visible.get(sc)
    }

    /// Returns the id of the task in edit mode.
    pub fn editing_task(&self, sc: &mut SignalContext) -> Option<TaskId> {
        self.tasks
            .borrow(sc)
            .iter()
            .find(|t| t.is_editing)
            .map(|t| t.id)
    }

    /// Returns the text of the new-task input.
    pub fn input(&self, sc: &mut SignalContext) -> String {
        self.input.get(sc)
    }

    /// Returns why the current input text cannot be submitted.
    pub fn input_error(&self, sc: &mut SignalContext) -> Option<TitleError> {
        self.input_error.get(sc)
    }

    /// Returns `true` if the current input text can be submitted.
    pub fn input_is_valid(&self, sc: &mut SignalContext) -> bool {
        self.input_error(sc).is_none()
    }

    /// Returns a `Signal` of all tasks in insertion order.
    pub fn tasks_signal(&self) -> Signal<Vec<Task>> {
        self.tasks.to_signal()
    }

    /// Returns a `Signal` of the current filter.
    pub fn filter_signal(&self) -> Signal<Filter> {
        self.filter.to_signal()
    }

    /// Returns a `Signal` of the tasks selected by the current filter.
    pub fn visible_tasks_signal(&self) -> Signal<Vec<Task>> {
        self.visible.clone()
    }

    /// Returns a `Signal` of why the current input text cannot be submitted.
    pub fn input_error_signal(&self) -> Signal<Option<TitleError>> {
        self.input_error.clone()
    }
}

impl std::fmt::Debug for TaskListStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskListStore")
            .field("tasks", &self.tasks)
            .field("filter", &self.filter)
            .field("input", &self.input)
            .field("rules", &self.rules)
            .field("ids", &self.ids)
            .finish_non_exhaustive()
    }
}

fn position(tasks: &[Task], id: TaskId) -> Option<usize> {
    tasks.iter().position(|t| t.id == id)
}

fn sanitize(tasks: impl IntoIterator<Item = Task>) -> Vec<Task> {
    let mut seen = HashSet::new();
    let mut editing = false;
    let mut result = Vec::new();
    for mut task in tasks {
        if !seen.insert(task.id) {
            warn!(task_id = %task.id, "duplicate task id dropped");
            continue;
        }
        if task.is_editing {
            task.is_editing = !editing;
            editing = true;
        }
        result.push(task);
    }
    result
}
