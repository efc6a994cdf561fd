use serde_json::json;

use super::{Task, TaskId, TaskIdGen};

#[test]
fn id_gen_is_monotonic() {
    let g = TaskIdGen::new();
    assert_eq!(g.next_id(), Some(TaskId(1)));
    assert_eq!(g.next_id(), Some(TaskId(2)));
    assert_eq!(g.next_id(), Some(TaskId(3)));
}

#[test]
fn id_gen_clones_share_counter() {
    let g0 = TaskIdGen::new();
    let g1 = g0.clone();
    assert_eq!(g0.next_id(), Some(TaskId(1)));
    assert_eq!(g1.next_id(), Some(TaskId(2)));
    assert_eq!(g0.peek(), Some(TaskId(3)));
}

#[test]
fn id_gen_after_existing() {
    let ids = [TaskId(4), TaskId(17), TaskId(9)];
    let g = TaskIdGen::after(&ids);
    assert_eq!(g.next_id(), Some(TaskId(18)));
}

#[test]
fn id_gen_after_nothing() {
    let g = TaskIdGen::after(&Vec::<TaskId>::new());
    assert_eq!(g.next_id(), Some(TaskId(1)));
}

#[test]
fn id_gen_exhausts_at_max() {
    let g = TaskIdGen::starting_at(u64::MAX - 1);
    assert_eq!(g.next_id(), Some(TaskId(u64::MAX - 1)));
    assert_eq!(g.next_id(), Some(TaskId(u64::MAX)));
    assert_eq!(g.next_id(), None);
    assert_eq!(g.next_id(), None);
    assert_eq!(g.peek(), None);
}

#[test]
fn id_gen_after_max_is_exhausted() {
    let g = TaskIdGen::after(&[TaskId(3), TaskId(u64::MAX)]);
    assert_eq!(g.next_id(), None);
}

#[test]
fn task_new_is_pending() {
    let t = Task::new(5, "write docs");
    assert_eq!(t.id, TaskId(5));
    assert_eq!(t.title, "write docs");
    assert!(!t.completed);
    assert!(!t.is_editing);
}

#[test]
fn task_id_display() {
    assert_eq!(TaskId(42).to_string(), "42");
}

#[test]
fn task_serialize() {
    let t = Task::new(1, "A").with_completed(true);
    let v = serde_json::to_value(&t).unwrap();
    assert_eq!(
        v,
        json!({ "id": 1, "title": "A", "completed": true, "isEditing": false })
    );
}

#[test]
fn task_deserialize_without_editing_flag() {
    let t: Task = serde_json::from_value(json!({ "id": 3, "title": "B", "completed": false }))
        .unwrap();
    assert_eq!(t, Task::new(3, "B"));
}
