use super::*;

fn account(id: i64, name: &str, admin: bool, trainer: bool) -> Account {
    Account { id, name: name.to_owned(), mail: format!("{name}@gym.pl"), admin, trainer }
}

#[test]
fn remove_account_drops_only_matching_id() {
    let mut list = vec![account(1, "ala", false, false), account(2, "ola", false, false)];
    remove_account(&mut list, 1);
    assert_eq!(list, vec![account(2, "ola", false, false)]);
}

#[test]
fn remove_account_ignores_unknown_id() {
    let mut list = vec![account(1, "ala", false, false)];
    remove_account(&mut list, 9);
    assert_eq!(list.len(), 1);
}

#[test]
fn apply_rename_updates_matching_account() {
    let mut list = vec![account(1, "ala", false, false), account(2, "ola", false, false)];
    apply_rename(&mut list, 2, "Aleksandra");
    assert_eq!(list[0].name, "ala");
    assert_eq!(list[1].name, "Aleksandra");
    assert_eq!(list[1].mail, "ola@gym.pl");
}

#[test]
fn validate_rename_trims_and_rejects_blank() {
    assert_eq!(validate_rename("  Kasia "), Ok("Kasia".to_owned()));
    assert_eq!(validate_rename("   "), Err(EMPTY_NAME));
}

#[test]
fn role_label_covers_each_flag_combination() {
    assert_eq!(role_label(&account(1, "a", true, true)), "Admin, Trainer");
    assert_eq!(role_label(&account(1, "a", true, false)), "Admin");
    assert_eq!(role_label(&account(1, "a", false, true)), "Trainer");
    assert_eq!(role_label(&account(1, "a", false, false)), "User");
}
