use super::*;

fn training(id: i64, description: &str) -> Training {
    Training {
        id,
        name: "Push day".to_owned(),
        description: description.to_owned(),
        training_date: "2024-03-01".to_owned(),
        completed: false,
    }
}

#[test]
fn remove_training_drops_reviewed_entry() {
    let mut list = vec![training(1, ""), training(2, ""), training(3, "")];
    remove_training(&mut list, 2);
    assert_eq!(list.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn training_summary_includes_description_when_present() {
    assert_eq!(training_summary(&training(1, " bench 5x5 ")), "Push day (2024-03-01): bench 5x5");
}

#[test]
fn training_summary_omits_blank_description() {
    assert_eq!(training_summary(&training(1, "  ")), "Push day (2024-03-01)");
}
