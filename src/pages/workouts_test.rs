use super::*;

#[test]
fn toggle_expanded_opens_then_closes() {
    let mut expanded = vec![3];

    toggle_expanded(&mut expanded, 7);
    assert_eq!(expanded, vec![3, 7]);

    toggle_expanded(&mut expanded, 3);
    assert_eq!(expanded, vec![7]);
}

#[test]
fn detail_rows_list_name_date_and_description() {
    let training = Training {
        id: 4,
        name: "Pull day".to_owned(),
        description: "rows 4x8".to_owned(),
        training_date: "2025-02-14".to_owned(),
        completed: true,
    };

    assert_eq!(
        detail_rows(&training),
        [
            ("Name", "Pull day".to_owned()),
            ("Date", "2025-02-14".to_owned()),
            ("Description", "rows 4x8".to_owned()),
        ]
    );
}
