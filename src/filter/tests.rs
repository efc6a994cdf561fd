use rstest::rstest;

use crate::{Filter, Task};

fn sample() -> Vec<Task> {
    vec![
        Task::new(1, "a").with_completed(true),
        Task::new(2, "b"),
        Task::new(3, "c").with_completed(true),
        Task::new(4, "d"),
    ]
}

fn ids(tasks: &[Task]) -> Vec<u64> {
    tasks.iter().map(|t| t.id.0).collect()
}

#[test]
fn default_is_all() {
    assert_eq!(Filter::default(), Filter::All);
}

#[rstest]
#[case(Filter::All, vec![1, 2, 3, 4])]
#[case(Filter::Completed, vec![1, 3])]
#[case(Filter::Pending, vec![2, 4])]
fn apply(#[case] filter: Filter, #[case] expected: Vec<u64>) {
    assert_eq!(ids(&filter.apply(&sample())), expected);
}

#[test]
fn completed_and_pending_partition() {
    let tasks = sample();
    let completed = Filter::Completed.apply(&tasks);
    let pending = Filter::Pending.apply(&tasks);
    assert_eq!(completed.len() + pending.len(), tasks.len());
    assert!(completed.iter().all(|t| !pending.contains(t)));
}

#[rstest]
#[case(Filter::All, "all")]
#[case(Filter::Completed, "completed")]
#[case(Filter::Pending, "pending")]
fn text_form(#[case] filter: Filter, #[case] text: &str) {
    assert_eq!(filter.to_string(), text);
    assert_eq!(text.parse::<Filter>().unwrap(), filter);
    assert_eq!(serde_json::to_string(&filter).unwrap(), format!("\"{text}\""));
}

#[test]
fn parse_unknown() {
    assert!("done".parse::<Filter>().is_err());
}
